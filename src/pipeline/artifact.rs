// src/pipeline/artifact.rs
use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A finished export: the serialized document and the name it should be
/// saved under.
///
/// The pipeline stops here. Writing to disk is a separate call so the
/// caller decides when (and whether) it happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn new(file_name: String, bytes: Vec<u8>) -> Self {
        Self { file_name, bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Writes the document into `dir` and returns the full path.
    pub fn save_in<P: AsRef<Path>>(&self, dir: P) -> io::Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        log::info!("Saved {} bytes to {}", self.bytes.len(), path.display());
        Ok(path)
    }
}

/// `<slugified prefix>_<unix millis>.pdf`
pub fn artifact_name(prefix: &str, at: DateTime<Utc>) -> String {
    let stem = slug::slugify(prefix).replace('-', "_");
    let stem = if stem.is_empty() { "geoexport".to_string() } else { stem };
    format!("{}_{}.pdf", stem, at.timestamp_millis())
}
