//! GeoJSON feature model.
//!
//! Only the geometry kinds that can be drawn as paths are modelled. Anything
//! else (points, geometry collections, unknown `type` values) deserializes to
//! [`Geometry::Unsupported`] so one odd feature never rejects a whole
//! collection.

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// A GeoJSON position. Stored in GeoJSON order: longitude first.
///
/// A third (altitude) element is accepted and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
}

impl Position {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.lon)?;
        tup.serialize_element(&self.lat)?;
        tup.end()
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PositionVisitor;

        impl<'de> Visitor<'de> for PositionVisitor {
            type Value = Position;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an array of at least two numbers [longitude, latitude]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Position, A::Error> {
                let lon: f64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let lat: f64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(Position { lon, lat })
            }
        }

        deserializer.deserialize_seq(PositionVisitor)
    }
}

/// An ordered sequence of vertices describing one contour.
pub type Ring = Vec<Position>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString { coordinates: Ring },
    MultiLineString { coordinates: Vec<Ring> },
    /// Outer ring followed by hole rings.
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::LineString { .. } => "LineString",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
            Geometry::Unsupported => "Unsupported",
        }
    }

    /// Every vertex of every ring, in document order.
    pub fn positions(&self) -> Box<dyn Iterator<Item = &Position> + '_> {
        match self {
            Geometry::LineString { coordinates } => Box::new(coordinates.iter()),
            Geometry::MultiLineString { coordinates } | Geometry::Polygon { coordinates } => {
                Box::new(coordinates.iter().flatten())
            }
            Geometry::MultiPolygon { coordinates } => {
                Box::new(coordinates.iter().flatten().flatten())
            }
            Geometry::Unsupported => Box::new(std::iter::empty()),
        }
    }
}

/// A single geographic feature: geometry plus free-form properties.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct GeoFeature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

impl GeoFeature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry: Some(geometry),
            properties: None,
        }
    }

    /// Adds (or replaces) a property. Mostly useful when building fixtures.
    pub fn with_tag(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.properties
            .get_or_insert_with(Map::new)
            .insert(name.to_string(), value.into());
        self
    }
}

/// Typed access to a feature's semantic tags.
pub trait TagLookup {
    /// Raw property value, if the key exists.
    fn tag(&self, name: &str) -> Option<&Value>;

    /// A tag is present when its key exists with a value other than `null`,
    /// `false`, zero or the empty string.
    fn has_tag(&self, name: &str) -> bool {
        match self.tag(name) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(_) => true,
        }
    }

    /// The tag's value when it is a string.
    fn tag_value(&self, name: &str) -> Option<&str> {
        self.tag(name).and_then(Value::as_str)
    }
}

impl TagLookup for GeoFeature {
    fn tag(&self, name: &str) -> Option<&Value> {
        self.properties.as_ref().and_then(|p| p.get(name))
    }
}

/// A GeoJSON `FeatureCollection`.
///
/// Deserialization is lenient: a feature that fails to parse is counted in
/// `rejected` and left out instead of failing the whole collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<GeoFeature>,
    #[serde(skip)]
    pub rejected: usize,
}

impl FeatureCollection {
    pub fn new(features: Vec<GeoFeature>) -> Self {
        Self { features, rejected: 0 }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl<'de> Deserialize<'de> for FeatureCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawCollection {
            #[serde(default)]
            features: Vec<Value>,
        }

        let raw = RawCollection::deserialize(deserializer)?;
        let total = raw.features.len();
        let features: Vec<GeoFeature> = raw
            .features
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect();
        let rejected = total - features.len();
        Ok(FeatureCollection { features, rejected })
    }
}
