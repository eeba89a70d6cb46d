use std::path::PathBuf;

use node2md_core::NodeId;
use node2md_logging::{export_error, export_info, export_warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportEvent {
    DocumentWritten {
        nid: NodeId,
        path: PathBuf,
    },
    /// `nid` is about to overwrite the file written earlier for `previous_nid`.
    CollisionDetected {
        nid: NodeId,
        previous_nid: NodeId,
        path: PathBuf,
    },
    RecordSkipped {
        nid: NodeId,
        reason: String,
    },
}

pub trait ProgressSink {
    fn emit(&self, event: ExportEvent);
}

/// Forwards every event to the global logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn emit(&self, event: ExportEvent) {
        match event {
            ExportEvent::DocumentWritten { nid, path } => {
                export_info!("File created: {} (node {})", path.display(), nid);
            }
            ExportEvent::CollisionDetected {
                nid,
                previous_nid,
                path,
            } => {
                export_warn!(
                    "node {} overwrites {} written for node {}",
                    nid,
                    path.display(),
                    previous_nid
                );
            }
            ExportEvent::RecordSkipped { nid, reason } => {
                export_error!("node {} skipped: {}", nid, reason);
            }
        }
    }
}
