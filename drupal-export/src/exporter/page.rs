// Static pages, addressed by their first URL alias
use drupal_export_repository::NodeRecord;
use tracing::{info, warn};

use super::{ExportSummary, SiteExporter};
use crate::content::{normalize_line_endings, render_body, render_document};
use crate::errors::ExportError;
use crate::site::layout;

impl SiteExporter {
    /// Writes the page under its oldest alias and redirects every other one.
    ///
    /// A page without any alias has no URL to preserve and is skipped.
    pub(super) async fn export_page(
        &self,
        node: &NodeRecord,
        summary: &mut ExportSummary,
    ) -> Result<(), ExportError> {
        let mut aliases = self.repository.aliases_for(node.nid).await?;
        // Lowest alias id is canonical, whatever order the source returned.
        aliases.sort_by_key(|alias| alias.id);
        let Some((canonical, secondary)) = aliases.split_first() else {
            warn!(nid = node.nid, title = %node.title, "Page has no URL alias, skipping");
            summary.pages_without_alias += 1;
            return Ok(());
        };

        let rendered = render_body(&node.format, normalize_line_endings(&node.body));
        let front_matter = self.front_matter(node).await?;

        let path = layout::page_path(canonical, rendered.extension);
        self.writer
            .write(&path, &render_document(&front_matter, &rendered.body)?)
            .await?;
        summary.pages += 1;

        let permalink = layout::page_permalink(canonical);
        for alias in secondary {
            self.write_redirect(&layout::alias_stub_path(alias), &permalink, summary)
                .await?;
        }
        self.write_redirect(&layout::node_stub_path(node.nid), &permalink, summary)
            .await?;

        info!(nid = node.nid, kind = %node.kind, path = %path.display(), "Exported page");
        Ok(())
    }
}
