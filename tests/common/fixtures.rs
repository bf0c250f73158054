use geoexport::{BoundingRectangle, FeatureCollection, LatLng};
use serde_json::{json, Value};

/// Central Madrid, wider than tall
pub fn madrid_bounds() -> BoundingRectangle {
    BoundingRectangle::from_corners(LatLng::new(40.40, -3.75), LatLng::new(40.43, -3.65))
}

pub fn line_feature(coords: Value, tags: Value) -> Value {
    json!({
        "type": "Feature",
        "geometry": { "type": "LineString", "coordinates": coords },
        "properties": tags
    })
}

pub fn polygon_feature(rings: Value, tags: Value) -> Value {
    json!({
        "type": "Feature",
        "geometry": { "type": "Polygon", "coordinates": rings },
        "properties": tags
    })
}

pub fn collection(features: Vec<Value>) -> FeatureCollection {
    serde_json::from_value(json!({ "type": "FeatureCollection", "features": features }))
        .expect("fixture collection should parse")
}

/// One feature of each bucket plus an untagged one.
pub fn mixed_city() -> FeatureCollection {
    collection(vec![
        line_feature(
            json!([[-3.71, 40.415], [-3.70, 40.416], [-3.69, 40.418]]),
            json!({ "highway": "primary", "name": "Gran Vía" }),
        ),
        polygon_feature(
            json!([[[-3.705, 40.417], [-3.704, 40.417], [-3.704, 40.418], [-3.705, 40.418], [-3.705, 40.417]]]),
            json!({ "building": "yes" }),
        ),
        polygon_feature(
            json!([[[-3.73, 40.41], [-3.72, 40.41], [-3.72, 40.42], [-3.73, 40.42], [-3.73, 40.41]]]),
            json!({ "natural": "water", "name": "Lago" }),
        ),
        line_feature(
            json!([[-3.68, 40.42], [-3.67, 40.42]]),
            json!({ "amenity": "bench" }),
        ),
    ])
}
