use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("Latitude {lat} is outside the Web Mercator domain (-90, 90)")]
    InvalidLatitude { lat: f64 },

    /// Only reachable from features built in code; JSON has no non-finite numbers.
    #[error("Longitude {lon} is not a finite number")]
    InvalidLongitude { lon: f64 },

    #[error("Export bounds are degenerate: projected size is {width} x {height}")]
    DegenerateBounds { width: f64, height: f64 },

    #[error("Page {width}x{height} cannot hold a margin of {margin}")]
    InvalidPageGeometry { width: f64, height: f64, margin: f64 },
}
