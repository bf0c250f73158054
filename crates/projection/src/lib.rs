//! Geographic to page-space projection.
//!
//! This crate provides:
//! - Spherical Web Mercator (EPSG:3857) forward and inverse conversion
//! - `Transform`, the scale-to-fit mapping of a bounding rectangle onto a page
//! - `ProjectionError` for the fatal cases (poles, degenerate bounds, bad page)

mod error;
pub mod mercator;
mod transform;

pub use error::ProjectionError;
pub use mercator::{from_web_mercator, to_web_mercator, MercatorPoint, EARTH_MERCATOR_EXTENT};
pub use transform::{derive_transform, Transform};
