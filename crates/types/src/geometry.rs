use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lon: f64,
}

impl LatLng {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A geographic rectangle given by its southwest and northeast corners.
///
/// Constructed through [`BoundingRectangle::from_corners`] the corners are
/// always ordered: `sw.lat <= ne.lat` and `sw.lon <= ne.lon`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRectangle {
    pub sw: LatLng,
    pub ne: LatLng,
}

impl BoundingRectangle {
    /// Builds a rectangle from any two opposite corners.
    pub fn from_corners(a: LatLng, b: LatLng) -> Self {
        Self {
            sw: LatLng::new(a.lat.min(b.lat), a.lon.min(b.lon)),
            ne: LatLng::new(a.lat.max(b.lat), a.lon.max(b.lon)),
        }
    }

    /// Smallest rectangle enclosing every point, or `None` for an empty input.
    pub fn enclosing<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a LatLng>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let (mut sw, mut ne) = (first, first);
        for p in iter {
            sw.lat = sw.lat.min(p.lat);
            sw.lon = sw.lon.min(p.lon);
            ne.lat = ne.lat.max(p.lat);
            ne.lon = ne.lon.max(p.lon);
        }
        Some(Self { sw, ne })
    }

    pub fn south(&self) -> f64 {
        self.sw.lat
    }

    pub fn west(&self) -> f64 {
        self.sw.lon
    }

    pub fn north(&self) -> f64 {
        self.ne.lat
    }

    pub fn east(&self) -> f64 {
        self.ne.lon
    }
}

/// Fixed page size and margin, in PDF points.
///
/// Missing fields deserialize to the A4 defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl PageGeometry {
    pub const A4_WIDTH: f64 = 595.28;
    pub const A4_HEIGHT: f64 = 841.89;
    pub const DEFAULT_MARGIN: f64 = 25.0;

    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self { width, height, margin }
    }

    /// ISO A4 portrait with the default margin.
    pub fn a4() -> Self {
        Self::new(Self::A4_WIDTH, Self::A4_HEIGHT, Self::DEFAULT_MARGIN)
    }

    pub fn drawable_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    pub fn drawable_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }

    /// `2 * margin < min(width, height)`, with every dimension finite.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.margin.is_finite()
            && self.margin >= 0.0
            && 2.0 * self.margin < self.width.min(self.height)
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// A point in page space: origin at the top-left, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PagePoint {
    pub x: f64,
    pub y: f64,
}

impl PagePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
