use node2md_engine::{ExportEvent, LogProgressSink, ProgressSink};
use node2md_logging::export_debug;

/// Prints one line per written file on stdout; everything else goes to the log.
pub struct ConsoleProgressSink {
    quiet: bool,
}

impl ConsoleProgressSink {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ProgressSink for ConsoleProgressSink {
    fn emit(&self, event: ExportEvent) {
        match event {
            ExportEvent::DocumentWritten { nid, path } => {
                export_debug!("node {} written to {:?}", nid, path);
                if !self.quiet {
                    println!("File created: {}", path.display());
                }
            }
            other => LogProgressSink.emit(other),
        }
    }
}
