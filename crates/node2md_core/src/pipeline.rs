use node2md_logging::export_debug;

use crate::assets::{rewrite_body_references, AssetRewriter};
use crate::convert::{Converter, Html2MdConverter};
use crate::frontmatter::{assemble, RenderedDocument};
use crate::slug::file_name_for;
use crate::types::{ContentRecord, RecordAssets, TargetPath};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub target: TargetPath,
    pub document: RenderedDocument,
}

/// Per-record transformation: rewrite assets, convert HTML, assemble.
///
/// Holds no mutable state; one instance can render any number of records.
pub struct Pipeline<C: Converter = Html2MdConverter> {
    rewriter: AssetRewriter,
    converter: C,
    site_url: String,
}

impl Pipeline<Html2MdConverter> {
    pub fn new(site_url: impl Into<String>) -> Self {
        Self::with_parts(AssetRewriter::default(), Html2MdConverter, site_url)
    }
}

impl<C: Converter> Pipeline<C> {
    pub fn with_parts(rewriter: AssetRewriter, converter: C, site_url: impl Into<String>) -> Self {
        Self {
            rewriter,
            converter,
            site_url: site_url.into(),
        }
    }

    pub fn target_for(&self, record: &ContentRecord) -> TargetPath {
        TargetPath {
            author_dir: record.author_name.clone(),
            file_name: file_name_for(&record.title),
        }
    }

    pub fn render(&self, record: &ContentRecord, assets: &RecordAssets) -> ExportedDocument {
        let cover = assets
            .cover_uri
            .as_deref()
            .map(|uri| self.rewriter.rewrite_cover_uri(uri));
        let gallery = assets
            .gallery_uris
            .iter()
            .map(|uri| self.rewriter.rewrite_gallery_uri(uri))
            .collect();

        // Only the body carries inline site-file links worth rewriting.
        let body_html = record
            .body_html
            .as_deref()
            .map(|html| rewrite_body_references(html, &self.site_url));
        let body_markdown = self.converter.to_markdown_opt(body_html.as_deref());
        let summary_markdown = self
            .converter
            .to_markdown_opt(record.summary_html.as_deref());

        let target = self.target_for(record);
        export_debug!(
            "rendered node {} as {}",
            record.id,
            target.relative_path().display()
        );

        ExportedDocument {
            target,
            document: assemble(
                record,
                assets.taxonomy.clone(),
                cover,
                gallery,
                body_markdown,
                summary_markdown,
            ),
        }
    }
}
