// src/pipeline/config.rs
use crate::error::ExportError;
use crate::style::{LayerStyles, LayerToggles};
use geoexport_types::PageGeometry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

pub const DEFAULT_ARTIFACT_PREFIX: &str = "geoexport_pro";

/// Everything that shapes an export besides the data itself.
///
/// Deserialized from JSON with camelCase keys; every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportConfig {
    /// `showWater`, `showBuildings` and `showStreets` at the top level.
    #[serde(flatten)]
    pub layers: LayerToggles,
    pub page: PageGeometry,
    pub styles: LayerStyles,
    pub artifact_prefix: String,
    pub title: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            layers: LayerToggles::default(),
            page: PageGeometry::a4(),
            styles: LayerStyles::default(),
            artifact_prefix: DEFAULT_ARTIFACT_PREFIX.to_string(),
            title: None,
        }
    }
}

impl ExportConfig {
    pub fn from_json_str(source: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            ExportError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json_str(&source)
    }

    /// Rejects settings that could never produce a document.
    pub fn validate(&self) -> Result<(), ExportError> {
        if !self.page.is_valid() {
            return Err(ExportError::Config(format!(
                "page {}x{} with margin {} leaves no drawable area",
                self.page.width, self.page.height, self.page.margin
            )));
        }
        for (name, style) in [
            ("water", &self.styles.water),
            ("buildings", &self.styles.buildings),
            ("streets", &self.styles.streets),
        ] {
            if !(style.width.is_finite() && style.width >= 0.0) {
                return Err(ExportError::Config(format!(
                    "{} line width must be a non-negative number, got {}",
                    name, style.width
                )));
            }
        }
        Ok(())
    }
}
