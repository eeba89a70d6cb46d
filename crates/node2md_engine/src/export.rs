use std::collections::HashMap;
use std::path::PathBuf;

use node2md_core::{
    ContentRecord, Converter, ExportedDocument, Html2MdConverter, NodeId, Pipeline,
};
use node2md_logging::{export_debug, export_info};
use thiserror::Error;

use crate::manifest::AssetManifest;
use crate::persist::{ensure_output_dir, AtomicFileWriter, PersistError};
use crate::source::{ContentSource, SourceError};
use crate::types::{ExportEvent, ProgressSink};

pub const DEFAULT_MANIFEST_FILENAME: &str = "assets.json";

/// What to do when a single record cannot be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop and return the error.
    #[default]
    Abort,
    /// Report the record as skipped and continue with the next one.
    Skip,
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub manifest_filename: Option<String>,
    pub error_policy: ErrorPolicy,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("content"),
            manifest_filename: Some(DEFAULT_MANIFEST_FILENAME.to_string()),
            error_policy: ErrorPolicy::Abort,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub written: usize,
    pub skipped: usize,
    pub collisions: usize,
    pub output_dir: PathBuf,
    pub documents: Vec<PathBuf>,
    pub manifest_path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("author name {0:?} is not usable as a directory name")]
    InvalidAuthorDir(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
    #[error("node {nid}: {source}")]
    Record {
        nid: NodeId,
        #[source]
        source: RecordError,
    },
    #[error("manifest serialization failed: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Drives the pipeline over every published record of a [`ContentSource`].
///
/// Records are processed one at a time, in source order. Two records whose
/// titles slugify to the same name under the same author write to the same
/// file: the later one wins, and the overwrite is reported as
/// [`ExportEvent::CollisionDetected`].
pub struct Exporter<C: Converter = Html2MdConverter> {
    pipeline: Pipeline<C>,
    options: ExportOptions,
}

impl<C: Converter> Exporter<C> {
    pub fn new(pipeline: Pipeline<C>, options: ExportOptions) -> Self {
        Self { pipeline, options }
    }

    pub fn run(
        &self,
        source: &dyn ContentSource,
        sink: &dyn ProgressSink,
    ) -> Result<ExportSummary, ExportError> {
        let output_dir = &self.options.output_dir;
        ensure_output_dir(output_dir)?;
        let writer = AtomicFileWriter::new(output_dir.clone());

        let records = source.published_records()?;
        export_info!(
            "exporting {} published nodes into {:?}",
            records.len(),
            output_dir
        );

        let mut written_by: HashMap<PathBuf, NodeId> = HashMap::new();
        let mut manifest = AssetManifest::default();
        let mut documents = Vec::new();
        let mut skipped = 0;
        let mut collisions = 0;

        for record in &records {
            let exported = match self.render_record(source, record) {
                Ok(exported) => exported,
                Err(err) => {
                    self.handle_failure(record.id, err, sink)?;
                    skipped += 1;
                    continue;
                }
            };

            let relative = exported.target.relative_path();
            match writer.write(&relative, &exported.document.to_markdown()) {
                Ok(path) => {
                    if let Some(previous_nid) = written_by.insert(relative, record.id) {
                        collisions += 1;
                        sink.emit(ExportEvent::CollisionDetected {
                            nid: record.id,
                            previous_nid,
                            path: path.clone(),
                        });
                    }
                    sink.emit(ExportEvent::DocumentWritten {
                        nid: record.id,
                        path: path.clone(),
                    });
                    manifest.push(&exported);
                    documents.push(path);
                }
                Err(err) => {
                    self.handle_failure(record.id, err.into(), sink)?;
                    skipped += 1;
                }
            }
        }

        let manifest_path = match &self.options.manifest_filename {
            Some(name) => Some(manifest.write(output_dir, name)?),
            None => None,
        };

        export_info!(
            "export finished: {} written, {} skipped, {} collisions",
            documents.len(),
            skipped,
            collisions
        );

        Ok(ExportSummary {
            written: documents.len(),
            skipped,
            collisions,
            output_dir: output_dir.clone(),
            documents,
            manifest_path,
        })
    }

    fn render_record(
        &self,
        source: &dyn ContentSource,
        record: &ContentRecord,
    ) -> Result<ExportedDocument, RecordError> {
        let assets = source.record_assets(record.id)?;
        export_debug!(
            "node {}: {} terms, cover {}, {} gallery images",
            record.id,
            assets.taxonomy.len(),
            assets.cover_uri.is_some(),
            assets.gallery_uris.len()
        );
        let exported = self.pipeline.render(record, &assets);
        if !is_plain_dir_name(&exported.target.author_dir) {
            return Err(RecordError::InvalidAuthorDir(
                exported.target.author_dir.clone(),
            ));
        }
        Ok(exported)
    }

    fn handle_failure(
        &self,
        nid: NodeId,
        err: RecordError,
        sink: &dyn ProgressSink,
    ) -> Result<(), ExportError> {
        match self.options.error_policy {
            ErrorPolicy::Abort => Err(ExportError::Record { nid, source: err }),
            ErrorPolicy::Skip => {
                sink.emit(ExportEvent::RecordSkipped {
                    nid,
                    reason: err.to_string(),
                });
                Ok(())
            }
        }
    }
}

/// A single path component that stays inside its parent directory.
fn is_plain_dir_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::is_plain_dir_name;

    #[test]
    fn author_dir_must_be_one_plain_component() {
        assert!(is_plain_dir_name("jane"));
        assert!(is_plain_dir_name("mario.rossi"));
        assert!(is_plain_dir_name("..jane"));
        for bad in ["", ".", "..", "a/b", "/etc", "a\\b"] {
            assert!(!is_plain_dir_name(bad), "{bad:?} accepted");
        }
    }
}
