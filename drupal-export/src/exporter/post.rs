// Blog entries and stories
use drupal_export_repository::NodeRecord;
use tracing::info;

use super::{publish_date, ExportSummary, SiteExporter};
use crate::content::{normalize_post_body, render_body, render_document, slugify};
use crate::errors::ExportError;
use crate::site::layout;

impl SiteExporter {
    /// Writes a dated post plus a redirect for each legacy URL of the node.
    pub(super) async fn export_post(
        &self,
        node: &NodeRecord,
        summary: &mut ExportSummary,
    ) -> Result<(), ExportError> {
        let rendered = render_body(&node.format, normalize_post_body(&node.body));
        let slug = slugify(&node.title);
        let date = publish_date(node)?;
        let front_matter = self.front_matter(node).await?;

        let path = layout::post_path(date, &slug, rendered.extension);
        self.writer
            .write(&path, &render_document(&front_matter, &rendered.body)?)
            .await?;
        summary.posts += 1;

        let permalink = layout::post_permalink(date, &slug);
        for alias in self.repository.aliases_for(node.nid).await? {
            self.write_redirect(&layout::alias_stub_path(&alias), &permalink, summary)
                .await?;
        }
        self.write_redirect(&layout::node_stub_path(node.nid), &permalink, summary)
            .await?;

        info!(nid = node.nid, kind = %node.kind, path = %path.display(), "Exported post");
        Ok(())
    }

    /// Writes an unpublished post into `_drafts`, without redirects.
    pub(super) async fn export_draft(&self, node: &NodeRecord) -> Result<(), ExportError> {
        let rendered = render_body(&node.format, normalize_post_body(&node.body));
        let slug = slugify(&node.title);
        let date = publish_date(node)?;
        let front_matter = self.front_matter(node).await?;

        let path = layout::draft_path(date, &slug, rendered.extension);
        self.writer
            .write(&path, &render_document(&front_matter, &rendered.body)?)
            .await?;

        info!(nid = node.nid, path = %path.display(), "Exported draft");
        Ok(())
    }
}
