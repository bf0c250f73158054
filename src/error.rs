// src/error.rs
use geoexport_projection::ProjectionError;
use geoexport_render_core::RenderError;
use thiserror::Error;

/// A comprehensive error type for the export pipeline.
///
/// Every fatal condition maps to its own variant so a caller can show a
/// specific notice. Recoverable input problems (unsupported geometry, rings
/// with fewer than two vertices) never surface here.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No export area defined: supply map bounds or draw an area first")]
    NoExportAreaDefined,

    #[error("Projection failed: {0}")]
    Projection(#[from] ProjectionError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration is invalid: {0}")]
    Config(String),
}
