use node2md_core::{ContentRecord, NodeId, RecordAssets};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("node {nid}: invalid created timestamp {timestamp}")]
    InvalidTimestamp { nid: NodeId, timestamp: i64 },
    #[error("invalid node id {0}")]
    InvalidNodeId(String),
}

/// Supplies published content and the per-node lookups the pipeline needs.
///
/// Cover and gallery values are raw storage URIs, exactly as stored.
pub trait ContentSource {
    fn published_records(&self) -> Result<Vec<ContentRecord>, SourceError>;
    fn taxonomy_terms(&self, nid: NodeId) -> Result<Vec<String>, SourceError>;
    fn cover_image(&self, nid: NodeId) -> Result<Option<String>, SourceError>;
    fn gallery_images(&self, nid: NodeId) -> Result<Vec<String>, SourceError>;

    fn record_assets(&self, nid: NodeId) -> Result<RecordAssets, SourceError> {
        Ok(RecordAssets {
            taxonomy: self.taxonomy_terms(nid)?,
            cover_uri: self.cover_image(nid)?,
            gallery_uris: self.gallery_images(nid)?,
        })
    }
}
