use std::path::{Path, PathBuf};

use node2md_core::{ExportedDocument, NodeId};
use serde::Serialize;

use crate::persist::AtomicFileWriter;
use crate::ExportError;

/// Asset references of the exported documents, for a separate copy-out step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetManifest {
    pub doc_count: usize,
    pub documents: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub nid: NodeId,
    pub path: String,
    pub cover: Option<String>,
    pub gallery: Vec<String>,
}

impl AssetManifest {
    /// Documents without a cover or gallery still count towards `doc_count`
    /// but get no entry.
    pub fn push(&mut self, exported: &ExportedDocument) {
        self.doc_count += 1;
        let fm = &exported.document.front_matter;
        if fm.cover.is_none() && fm.gallery.is_empty() {
            return;
        }
        self.documents.push(ManifestEntry {
            nid: fm.nid,
            path: exported
                .target
                .relative_path()
                .to_string_lossy()
                .replace('\\', "/"),
            cover: fm.cover.clone(),
            gallery: fm.gallery.clone(),
        });
    }

    pub fn write(&self, output_dir: &Path, filename: &str) -> Result<PathBuf, ExportError> {
        let json = serde_json::to_string_pretty(self)?;
        let writer = AtomicFileWriter::new(output_dir.to_path_buf());
        Ok(writer.write(Path::new(filename), &json)?)
    }
}
