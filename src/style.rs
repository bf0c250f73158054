//! Style buckets and the layer configuration attached to them.

use geoexport_types::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three mutually exclusive feature groups.
///
/// The declaration order is both the classification priority and the
/// drawing order: later buckets are painted over earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleBucket {
    Water,
    Buildings,
    Streets,
}

impl StyleBucket {
    pub const RENDER_ORDER: [StyleBucket; 3] =
        [StyleBucket::Water, StyleBucket::Buildings, StyleBucket::Streets];

    /// Closed buckets close every ring and may fill it; open ones only stroke.
    pub fn is_closed(self) -> bool {
        match self {
            StyleBucket::Water | StyleBucket::Buildings => true,
            StyleBucket::Streets => false,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StyleBucket::Water => "water",
            StyleBucket::Buildings => "buildings",
            StyleBucket::Streets => "streets",
        }
    }
}

impl fmt::Display for StyleBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Visual style of one bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    #[serde(default)]
    pub fill: Option<Color>,
    pub stroke: Color,
    pub width: f64,
}

/// Styles for all three buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerStyles {
    pub water: LayerStyle,
    pub buildings: LayerStyle,
    pub streets: LayerStyle,
}

impl LayerStyles {
    pub fn get(&self, bucket: StyleBucket) -> &LayerStyle {
        match bucket {
            StyleBucket::Water => &self.water,
            StyleBucket::Buildings => &self.buildings,
            StyleBucket::Streets => &self.streets,
        }
    }
}

impl Default for LayerStyles {
    fn default() -> Self {
        Self {
            water: LayerStyle {
                fill: Some(Color::rgb(0xe0, 0xf2, 0xfe)),
                stroke: Color::rgb(0x0e, 0xa5, 0xe9),
                width: 0.5,
            },
            buildings: LayerStyle {
                fill: Some(Color::rgb(0xf1, 0xf5, 0xf9)),
                stroke: Color::rgb(0x64, 0x74, 0x8b),
                width: 0.2,
            },
            streets: LayerStyle {
                fill: None,
                stroke: Color::rgb(0x1e, 0x29, 0x3b),
                width: 0.8,
            },
        }
    }
}

/// Which buckets take part in an export. All enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayerToggles {
    pub show_water: bool,
    pub show_buildings: bool,
    pub show_streets: bool,
}

impl LayerToggles {
    pub fn is_enabled(&self, bucket: StyleBucket) -> bool {
        match bucket {
            StyleBucket::Water => self.show_water,
            StyleBucket::Buildings => self.show_buildings,
            StyleBucket::Streets => self.show_streets,
        }
    }

    pub fn any_enabled(&self) -> bool {
        self.show_water || self.show_buildings || self.show_streets
    }
}

impl Default for LayerToggles {
    fn default() -> Self {
        Self {
            show_water: true,
            show_buildings: true,
            show_streets: true,
        }
    }
}
