//! Spherical Web Mercator (EPSG:3857).

use crate::error::ProjectionError;
use geoexport_types::LatLng;
use std::f64::consts::PI;

/// Half the circumference of the Mercator sphere, in meters.
pub const EARTH_MERCATOR_EXTENT: f64 = 20037508.34;

/// A point in projected meters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MercatorPoint {
    pub x: f64,
    pub y: f64,
}

/// Projects a geographic coordinate to Web Mercator meters.
///
/// The projection is undefined at the poles, so any latitude outside the open
/// interval (-90, 90) is rejected rather than producing an infinite `y`.
pub fn to_web_mercator(lat: f64, lon: f64) -> Result<MercatorPoint, ProjectionError> {
    if !lat.is_finite() || lat <= -90.0 || lat >= 90.0 {
        return Err(ProjectionError::InvalidLatitude { lat });
    }
    if !lon.is_finite() {
        return Err(ProjectionError::InvalidLongitude { lon });
    }

    let x = lon * EARTH_MERCATOR_EXTENT / 180.0;
    let y = ((90.0 + lat) * PI / 360.0).tan().ln() / (PI / 180.0);
    let y = y * EARTH_MERCATOR_EXTENT / 180.0;

    // Latitudes a hair away from a pole can still overflow.
    if !y.is_finite() {
        return Err(ProjectionError::InvalidLatitude { lat });
    }
    Ok(MercatorPoint { x, y })
}

/// Inverse of [`to_web_mercator`].
pub fn from_web_mercator(point: MercatorPoint) -> LatLng {
    let lon = point.x * 180.0 / EARTH_MERCATOR_EXTENT;
    let y_deg = point.y * 180.0 / EARTH_MERCATOR_EXTENT;
    let lat = (y_deg * PI / 180.0).exp().atan() * 360.0 / PI - 90.0;
    LatLng::new(lat, lon)
}
