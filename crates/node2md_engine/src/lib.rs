//! node2md engine: reads published content, runs the pipeline, writes files.
mod export;
mod manifest;
mod persist;
mod source;
mod sqlite;
mod types;

pub use export::{
    ErrorPolicy, ExportError, ExportOptions, ExportSummary, Exporter, RecordError,
    DEFAULT_MANIFEST_FILENAME,
};
pub use manifest::{AssetManifest, ManifestEntry};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use source::{ContentSource, SourceError};
pub use sqlite::SqliteSource;
pub use types::{ExportEvent, LogProgressSink, ProgressSink};
