//! Export executor - walks the node list once and writes the site tree.
mod page;
mod post;

use std::sync::Arc;
use std::time::Instant;

use chrono::{Local, NaiveDate, TimeZone};
use drupal_export_repository::{ContentRepository, NodeKind, NodeRecord};
use tracing::{debug, info};

use crate::authors::AuthorMap;
use crate::config::ExportOptions;
use crate::content::{normalize_tags, render_redirect, PostFrontMatter};
use crate::errors::ExportError;
use crate::site::SiteWriter;

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub posts: usize,
    pub pages: usize,
    pub drafts: usize,
    pub redirects: usize,
    pub skipped_unpublished: usize,
    pub pages_without_alias: usize,
}

/// Export executor that reads every node and writes its files.
pub struct SiteExporter {
    repository: Arc<dyn ContentRepository>,
    writer: SiteWriter,
    authors: AuthorMap,
    options: ExportOptions,
}

impl SiteExporter {
    pub fn new(
        repository: Arc<dyn ContentRepository>,
        writer: SiteWriter,
        authors: AuthorMap,
        options: ExportOptions,
    ) -> Self {
        Self {
            repository,
            writer,
            authors,
            options,
        }
    }

    /// Execute the full export.
    ///
    /// Stops at the first repository or filesystem error; whatever was
    /// written up to that point stays on disk.
    pub async fn run(&self) -> Result<ExportSummary, ExportError> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::default();

        self.writer.bootstrap().await?;
        info!(root = %self.writer.root().display(), "Prepared site layout");

        let nodes = self.repository.list_nodes().await?;
        info!(count = nodes.len(), "Read nodes");

        for node in &nodes {
            if !node.is_published() {
                if self.options.include_drafts && node.kind.is_post() {
                    self.export_draft(node).await?;
                    summary.drafts += 1;
                } else {
                    debug!(nid = node.nid, "Skipping unpublished node");
                    summary.skipped_unpublished += 1;
                }
                continue;
            }

            match node.kind {
                NodeKind::Blog | NodeKind::Story => self.export_post(node, &mut summary).await?,
                NodeKind::Page => self.export_page(node, &mut summary).await?,
            }
        }

        info!(
            elapsed_secs = start_time.elapsed().as_secs_f64(),
            posts = summary.posts,
            pages = summary.pages,
            drafts = summary.drafts,
            redirects = summary.redirects,
            skipped_unpublished = summary.skipped_unpublished,
            pages_without_alias = summary.pages_without_alias,
            "Export complete"
        );

        Ok(summary)
    }

    async fn front_matter(&self, node: &NodeRecord) -> Result<PostFrontMatter, ExportError> {
        let tags = self.repository.tags_for(node.nid).await?;

        Ok(PostFrontMatter {
            layout: self.options.post_layout.clone(),
            title: node.title.clone(),
            nodeid: node.nid,
            created: node.created,
            tags: normalize_tags(tags),
            author: self.authors.resolve(&node.author).to_string(),
        })
    }

    async fn write_redirect(
        &self,
        stub: &std::path::Path,
        target: &str,
        summary: &mut ExportSummary,
    ) -> Result<(), ExportError> {
        self.writer.write(stub, &render_redirect(target)?).await?;
        summary.redirects += 1;
        Ok(())
    }
}

/// Calendar date of the node's creation in the local time zone.
fn publish_date(node: &NodeRecord) -> Result<NaiveDate, ExportError> {
    Local
        .timestamp_opt(node.created, 0)
        .single()
        .map(|created| created.date_naive())
        .ok_or(ExportError::InvalidTimestamp {
            nid: node.nid,
            created: node.created,
        })
}
