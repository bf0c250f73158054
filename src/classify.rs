//! Partitioning features into style buckets.

use crate::style::{LayerToggles, StyleBucket};
use geoexport_types::TagLookup;

/// Does `feature` carry the tags of `bucket`?
///
/// Water is `waterway=*` or `natural=water`, buildings are `building=*` and
/// streets are `highway=*`.
pub fn matches_bucket<F: TagLookup + ?Sized>(feature: &F, bucket: StyleBucket) -> bool {
    match bucket {
        StyleBucket::Water => {
            feature.has_tag("waterway") || feature.tag_value("natural") == Some("water")
        }
        StyleBucket::Buildings => feature.has_tag("building"),
        StyleBucket::Streets => feature.has_tag("highway"),
    }
}

/// The first enabled bucket `feature` matches, in priority order.
pub fn bucket_for<F: TagLookup + ?Sized>(feature: &F, toggles: &LayerToggles) -> Option<StyleBucket> {
    StyleBucket::RENDER_ORDER
        .into_iter()
        .find(|b| toggles.is_enabled(*b) && matches_bucket(feature, *b))
}

/// Features grouped by bucket. Borrowed from the caller's collection.
#[derive(Debug)]
pub struct Classification<'a, F> {
    pub water: Vec<&'a F>,
    pub buildings: Vec<&'a F>,
    pub streets: Vec<&'a F>,
    /// Features that matched no enabled bucket.
    pub dropped: usize,
}

impl<'a, F> Classification<'a, F> {
    pub fn bucket(&self, bucket: StyleBucket) -> &[&'a F] {
        match bucket {
            StyleBucket::Water => &self.water,
            StyleBucket::Buildings => &self.buildings,
            StyleBucket::Streets => &self.streets,
        }
    }

    pub fn classified(&self) -> usize {
        self.water.len() + self.buildings.len() + self.streets.len()
    }
}

/// Single pass over `features`, each placed in at most one bucket.
pub fn classify<'a, F: TagLookup>(features: &'a [F], toggles: &LayerToggles) -> Classification<'a, F> {
    let mut out = Classification {
        water: Vec::new(),
        buildings: Vec::new(),
        streets: Vec::new(),
        dropped: 0,
    };

    for feature in features {
        match bucket_for(feature, toggles) {
            Some(StyleBucket::Water) => out.water.push(feature),
            Some(StyleBucket::Buildings) => out.buildings.push(feature),
            Some(StyleBucket::Streets) => out.streets.push(feature),
            None => out.dropped += 1,
        }
    }

    log::debug!(
        "Classified {} features: water={} buildings={} streets={} dropped={}",
        features.len(),
        out.water.len(),
        out.buildings.len(),
        out.streets.len(),
        out.dropped
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoexport_types::GeoFeature;

    fn tagged(tags: &[(&str, &str)]) -> GeoFeature {
        tags.iter()
            .fold(GeoFeature::default(), |f, (k, v)| f.with_tag(k, *v))
    }

    #[test]
    fn test_water_wins_over_building() {
        let features = vec![tagged(&[("building", "yes"), ("waterway", "canal")])];
        let c = classify(&features, &LayerToggles::default());
        assert_eq!(c.water.len(), 1);
        assert!(c.buildings.is_empty());
        assert!(c.streets.is_empty());
    }

    #[test]
    fn test_natural_water_is_water_but_other_natural_is_not() {
        let features = vec![
            tagged(&[("natural", "water")]),
            tagged(&[("natural", "wood")]),
        ];
        let c = classify(&features, &LayerToggles::default());
        assert_eq!(c.water.len(), 1);
        assert_eq!(c.dropped, 1);
    }

    #[test]
    fn test_disabled_layer_drops_features() {
        let features = vec![
            tagged(&[("building", "yes")]),
            tagged(&[("building", "house")]),
            tagged(&[("highway", "primary")]),
        ];
        let toggles = LayerToggles {
            show_buildings: false,
            ..LayerToggles::default()
        };
        let c = classify(&features, &toggles);
        assert!(c.buildings.is_empty());
        assert_eq!(c.streets.len(), 1);
        assert_eq!(c.dropped, 2);
    }

    #[test]
    fn test_disabled_water_falls_through_to_next_match() {
        let features = vec![tagged(&[("waterway", "river"), ("building", "yes")])];
        let toggles = LayerToggles {
            show_water: false,
            ..LayerToggles::default()
        };
        let c = classify(&features, &toggles);
        assert!(c.water.is_empty());
        assert_eq!(c.buildings.len(), 1);
    }

    #[test]
    fn test_each_feature_lands_in_at_most_one_bucket() {
        let combos: &[&[(&str, &str)]] = &[
            &[],
            &[("highway", "residential")],
            &[("building", "yes"), ("highway", "service")],
            &[("waterway", "stream"), ("highway", "footway")],
            &[("natural", "water"), ("building", "yes"), ("highway", "track")],
            &[("amenity", "cafe")],
        ];
        let features: Vec<GeoFeature> = combos.iter().map(|tags| tagged(tags)).collect();

        for show_water in [true, false] {
            for show_buildings in [true, false] {
                for show_streets in [true, false] {
                    let toggles = LayerToggles { show_water, show_buildings, show_streets };
                    let c = classify(&features, &toggles);
                    assert_eq!(c.classified() + c.dropped, features.len());

                    for f in &features {
                        let hits = StyleBucket::RENDER_ORDER
                            .iter()
                            .filter(|b| c.bucket(**b).iter().any(|x| std::ptr::eq(*x, f)))
                            .count();
                        assert!(hits <= 1);
                        let expected = bucket_for(f, &toggles);
                        assert_eq!(hits == 1, expected.is_some());
                        if let Some(b) = expected {
                            assert!(c.bucket(b).iter().any(|x| std::ptr::eq(*x, f)));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_building_tag_falls_through_to_streets() {
        let features = vec![
            GeoFeature::default()
                .with_tag("building", 0)
                .with_tag("highway", "x"),
        ];
        let c = classify(&features, &LayerToggles::default());
        assert!(c.buildings.is_empty());
        assert_eq!(c.streets.len(), 1);
    }

    #[test]
    fn test_classification_preserves_input_order() {
        let features = vec![
            tagged(&[("highway", "a")]),
            tagged(&[("building", "yes")]),
            tagged(&[("highway", "b")]),
        ];
        let c = classify(&features, &LayerToggles::default());
        assert_eq!(c.streets[0].tag_value("highway"), Some("a"));
        assert_eq!(c.streets[1].tag_value("highway"), Some("b"));
    }
}
