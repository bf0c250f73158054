pub mod color;
pub mod feature;
pub mod geometry;

pub use color::Color;
pub use feature::{FeatureCollection, GeoFeature, Geometry, Position, Ring, TagLookup};
pub use geometry::{BoundingRectangle, LatLng, PageGeometry, PagePoint};
