//! Emitting page-space paths for classified features.

use crate::error::ExportError;
use crate::style::{LayerStyle, StyleBucket};
use geoexport_projection::Transform;
use geoexport_render_core::DocumentSink;
use geoexport_types::{GeoFeature, Geometry, Position};
use std::ops::AddAssign;

/// Counters collected while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Rings turned into a painted path.
    pub paths: usize,
    /// Rings with fewer than two vertices.
    pub rings_skipped: usize,
    /// Features without a drawable geometry.
    pub features_skipped: usize,
}

impl AddAssign for RenderStats {
    fn add_assign(&mut self, rhs: Self) {
        self.paths += rhs.paths;
        self.rings_skipped += rhs.rings_skipped;
        self.features_skipped += rhs.features_skipped;
    }
}

/// Turns features into path primitives through a fixed [`Transform`].
pub struct PathRenderer<'t> {
    transform: &'t Transform,
}

impl<'t> PathRenderer<'t> {
    pub fn new(transform: &'t Transform) -> Self {
        Self { transform }
    }

    /// Renders every feature of one bucket with that bucket's style.
    ///
    /// The style is applied once, before the first path. An empty bucket
    /// emits nothing at all.
    pub fn render_bucket<S: DocumentSink>(
        &self,
        bucket: StyleBucket,
        style: &LayerStyle,
        features: &[&GeoFeature],
        sink: &mut S,
    ) -> Result<RenderStats, ExportError> {
        let mut stats = RenderStats::default();
        if features.is_empty() {
            return Ok(stats);
        }

        sink.set_line_width(style.width)?;
        sink.set_stroke_color(style.stroke)?;
        if let Some(fill) = style.fill {
            sink.set_fill_color(fill)?;
        }
        let fill = bucket.is_closed() && style.fill.is_some();

        for feature in features {
            match &feature.geometry {
                Some(Geometry::LineString { coordinates }) => {
                    self.render_ring(coordinates, bucket, fill, sink, &mut stats)?;
                }
                Some(Geometry::MultiLineString { coordinates })
                | Some(Geometry::Polygon { coordinates }) => {
                    for ring in coordinates {
                        self.render_ring(ring, bucket, fill, sink, &mut stats)?;
                    }
                }
                Some(Geometry::MultiPolygon { coordinates }) => {
                    for ring in coordinates.iter().flatten() {
                        self.render_ring(ring, bucket, fill, sink, &mut stats)?;
                    }
                }
                Some(Geometry::Unsupported) | None => {
                    log::debug!(
                        "Skipping {} feature without a drawable geometry",
                        bucket
                    );
                    stats.features_skipped += 1;
                }
            }
        }

        Ok(stats)
    }

    // Holes are painted as rings of their own; nothing is subtracted.
    fn render_ring<S: DocumentSink>(
        &self,
        ring: &[Position],
        bucket: StyleBucket,
        fill: bool,
        sink: &mut S,
        stats: &mut RenderStats,
    ) -> Result<(), ExportError> {
        let [first, rest @ ..] = ring else {
            stats.rings_skipped += 1;
            return Ok(());
        };
        if rest.is_empty() {
            log::debug!("Skipping {} ring with a single vertex", bucket);
            stats.rings_skipped += 1;
            return Ok(());
        }

        sink.move_to(self.transform.project_position(first)?)?;
        for position in rest {
            sink.line_to(self.transform.project_position(position)?)?;
        }

        if bucket.is_closed() {
            sink.close_path()?;
            if fill {
                sink.fill_and_stroke()?;
            } else {
                sink.stroke()?;
            }
        } else {
            sink.stroke()?;
        }
        stats.paths += 1;
        Ok(())
    }
}
