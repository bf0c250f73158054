//! Choosing the geographic area to export.

use crate::error::ExportError;
use geoexport_types::{BoundingRectangle, FeatureCollection, Geometry, LatLng};

/// Picks the export rectangle.
///
/// A non-empty drawn area wins and contributes its bounding box; otherwise
/// the viewport rectangle is used as is. With neither there is nothing to
/// export.
pub fn resolve_bounds(
    drawn_area: Option<&[LatLng]>,
    viewport: Option<BoundingRectangle>,
) -> Result<BoundingRectangle, ExportError> {
    if let Some(rect) = drawn_area.and_then(BoundingRectangle::enclosing) {
        return Ok(rect);
    }
    viewport.ok_or(ExportError::NoExportAreaDefined)
}

/// The vertices of an area the user drew on the map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawnArea {
    vertices: Vec<LatLng>,
}

impl DrawnArea {
    /// Collects every vertex of a drawable geometry.
    pub fn from_geometry(geometry: &Geometry) -> Option<Self> {
        let vertices: Vec<LatLng> = geometry
            .positions()
            .map(|p| LatLng::new(p.lat, p.lon))
            .collect();
        (!vertices.is_empty()).then_some(Self { vertices })
    }

    /// Uses the first feature that carries a drawable geometry, the way a
    /// drawing tool hands over its first shape.
    pub fn from_collection(collection: &FeatureCollection) -> Option<Self> {
        collection
            .features
            .iter()
            .filter_map(|f| f.geometry.as_ref())
            .find_map(Self::from_geometry)
    }

    pub fn vertices(&self) -> &[LatLng] {
        &self.vertices
    }
}
