use crate::error::ProjectionError;
use crate::mercator::{to_web_mercator, MercatorPoint};
use geoexport_types::{BoundingRectangle, PageGeometry, PagePoint, Position};

/// Scale-to-fit mapping from geographic coordinates to page points.
///
/// Derived once per export from the resolved bounds and the page. The drawn
/// area keeps the bounds' aspect ratio and is centered on the page; page
/// coordinates have their origin at the top-left with y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Page points per projected meter.
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Width of the drawn area in points.
    pub map_width: f64,
    /// Height of the drawn area in points.
    pub map_height: f64,
    origin: MercatorPoint,
    page_height: f64,
}

/// Derives the [`Transform`] that fits `rect` inside `page` minus its margins.
pub fn derive_transform(
    rect: &BoundingRectangle,
    page: &PageGeometry,
) -> Result<Transform, ProjectionError> {
    if !page.is_valid() {
        return Err(ProjectionError::InvalidPageGeometry {
            width: page.width,
            height: page.height,
            margin: page.margin,
        });
    }

    let min = to_web_mercator(rect.sw.lat, rect.sw.lon)?;
    let max = to_web_mercator(rect.ne.lat, rect.ne.lon)?;
    let merc_w = max.x - min.x;
    let merc_h = max.y - min.y;
    if !(merc_w > 0.0 && merc_h > 0.0) {
        return Err(ProjectionError::DegenerateBounds {
            width: merc_w,
            height: merc_h,
        });
    }

    // The tighter axis wins so the whole rectangle fits.
    let scale = (page.drawable_width() / merc_w).min(page.drawable_height() / merc_h);
    let map_width = merc_w * scale;
    let map_height = merc_h * scale;
    let offset_x = (page.width - map_width) / 2.0;
    let offset_y = (page.height - map_height) / 2.0;

    log::debug!(
        "Derived transform: scale={:e} map={:.2}x{:.2}pt offset=({:.2}, {:.2})",
        scale,
        map_width,
        map_height,
        offset_x,
        offset_y
    );

    Ok(Transform {
        scale,
        offset_x,
        offset_y,
        map_width,
        map_height,
        origin: min,
        page_height: page.height,
    })
}

impl Transform {
    /// Page y of the bottom edge of the drawn area.
    pub fn base_bottom(&self) -> f64 {
        self.page_height - self.offset_y
    }

    /// Projects a geographic coordinate to page space.
    pub fn project(&self, lat: f64, lon: f64) -> Result<PagePoint, ProjectionError> {
        let m = to_web_mercator(lat, lon)?;
        Ok(PagePoint::new(
            self.offset_x + (m.x - self.origin.x) * self.scale,
            self.base_bottom() - (m.y - self.origin.y) * self.scale,
        ))
    }

    /// Projects a GeoJSON position (longitude first).
    pub fn project_position(&self, position: &Position) -> Result<PagePoint, ProjectionError> {
        self.project(position.lat, position.lon)
    }
}
