use std::path::PathBuf;

use chrono::{DateTime, Utc};

pub type NodeId = u64;

/// One published content item as read from the content database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRecord {
    pub id: NodeId,
    pub title: String,
    pub body_html: Option<String>,
    pub summary_html: Option<String>,
    pub created_at: DateTime<Utc>,
    pub content_type: String,
    pub author_name: String,
}

/// Taxonomy and image references resolved for a single record.
///
/// Cover and gallery entries are raw storage URIs (`public://...`); the
/// pipeline rewrites them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordAssets {
    pub taxonomy: Vec<String>,
    pub cover_uri: Option<String>,
    pub gallery_uris: Vec<String>,
}

/// Where a rendered document lands, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetPath {
    pub author_dir: String,
    pub file_name: String,
}

impl TargetPath {
    /// `<author>/<slug>.md`
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(&self.author_dir).join(&self.file_name)
    }
}
