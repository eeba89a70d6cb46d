use chrono::{DateTime, Utc};

use crate::types::{ContentRecord, NodeId};
use crate::yaml_list::format_list;

const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `YYYY-MM-DD HH:MM:SS` in UTC.
pub fn format_created(created_at: &DateTime<Utc>) -> String {
    created_at.format(CREATED_FORMAT).to_string()
}

/// Header fields in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub content_type: String,
    pub created: String,
    pub nid: NodeId,
    pub taxonomy: Vec<String>,
    pub cover: Option<String>,
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub front_matter: FrontMatter,
    pub summary_markdown: Option<String>,
    pub body_markdown: Option<String>,
}

impl RenderedDocument {
    /// Serialize to the on-disk format.
    ///
    /// Scalars are double-quoted verbatim, lists go through [`format_list`]
    /// and absent values become empty strings only here. `taxonomy: ` keeps
    /// its trailing space and the text ends right after the body.
    pub fn to_markdown(&self) -> String {
        let fm = &self.front_matter;
        format!(
            "---\n\
             title: \"{title}\"\n\
             type: \"{content_type}\"\n\
             created: \"{created}\"\n\
             nid: \"{nid}\"\n\
             taxonomy: \n\
             {taxonomy}\n\
             copertina: \"{cover}\"\n\
             gallery:\n\
             {gallery}\n\
             ---\n\
             \n\
             {summary}\n\
             \n\
             {body}",
            title = fm.title,
            content_type = fm.content_type,
            created = fm.created,
            nid = fm.nid,
            taxonomy = format_list(&fm.taxonomy),
            cover = fm.cover.as_deref().unwrap_or(""),
            gallery = format_list(&fm.gallery),
            summary = self.summary_markdown.as_deref().unwrap_or(""),
            body = self.body_markdown.as_deref().unwrap_or(""),
        )
    }
}

/// Combine a record's metadata with its already rewritten assets and
/// converted Markdown.
pub fn assemble(
    record: &ContentRecord,
    taxonomy: Vec<String>,
    cover: Option<String>,
    gallery: Vec<String>,
    body_markdown: Option<String>,
    summary_markdown: Option<String>,
) -> RenderedDocument {
    RenderedDocument {
        front_matter: FrontMatter {
            title: record.title.clone(),
            content_type: record.content_type.clone(),
            created: format_created(&record.created_at),
            nid: record.id,
            taxonomy,
            cover,
            gallery,
        },
        summary_markdown,
        body_markdown,
    }
}
