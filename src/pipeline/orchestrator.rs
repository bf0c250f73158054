// src/pipeline/orchestrator.rs
use super::artifact::{artifact_name, ExportArtifact};
use super::config::ExportConfig;
use crate::bounds::resolve_bounds;
use crate::classify::classify;
use crate::error::ExportError;
use crate::events::{ExportEvent, ExportObserver};
use crate::render::{PathRenderer, RenderStats};
use crate::style::StyleBucket;
use chrono::Utc;
use geoexport_projection::derive_transform;
use geoexport_render_core::DocumentSink;
use geoexport_render_lopdf::{PdfMetadata, PdfSink};
use geoexport_types::{BoundingRectangle, GeoFeature, LatLng};
use log::{debug, info, warn};
use std::time::Instant;

/// Input of one export. Borrowed for the duration of the call only.
#[derive(Debug, Clone, Copy)]
pub struct ExportRequest<'a> {
    pub features: &'a [GeoFeature],
    /// Vertices of an area the user drew, if any. Takes precedence.
    pub drawn_area: Option<&'a [LatLng]>,
    /// The visible map rectangle.
    pub viewport: Option<BoundingRectangle>,
}

impl<'a> ExportRequest<'a> {
    pub fn new(features: &'a [GeoFeature]) -> Self {
        Self {
            features,
            drawn_area: None,
            viewport: None,
        }
    }

    pub fn with_viewport(mut self, viewport: BoundingRectangle) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn with_drawn_area(mut self, vertices: &'a [LatLng]) -> Self {
        self.drawn_area = Some(vertices);
        self
    }
}

/// The export pipeline: bounds, projection, classification and rendering.
///
/// Holds only configuration, so one pipeline can serve any number of
/// exports. Nothing derived from a request outlives that request.
#[derive(Debug, Clone)]
pub struct ExportPipeline {
    config: ExportConfig,
}

impl ExportPipeline {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Runs every stage against `sink` and finalizes it.
    ///
    /// Any fatal error aborts before `finalize`, so a partial document is
    /// never returned.
    pub fn render_into<S: DocumentSink>(
        &self,
        request: &ExportRequest<'_>,
        mut sink: S,
        observer: &mut dyn ExportObserver,
    ) -> Result<(S::Document, RenderStats), ExportError> {
        let ExportConfig { layers, page, styles, .. } = &self.config;

        observer.on_event(&ExportEvent::Started { features: request.features.len() });
        if !layers.any_enabled() {
            warn!("All layers are disabled; the export will be an empty page.");
        }

        let bounds = resolve_bounds(request.drawn_area, request.viewport)?;
        info!(
            "Export bounds: south={} west={} north={} east={}",
            bounds.south(),
            bounds.west(),
            bounds.north(),
            bounds.east()
        );
        observer.on_event(&ExportEvent::BoundsResolved {
            south: bounds.south(),
            west: bounds.west(),
            north: bounds.north(),
            east: bounds.east(),
        });

        let transform = derive_transform(&bounds, page)?;
        observer.on_event(&ExportEvent::TransformDerived {
            scale: transform.scale,
            map_width: transform.map_width,
            map_height: transform.map_height,
        });

        let classification = classify(request.features, layers);
        info!(
            "Classified {} features ({} dropped).",
            classification.classified(),
            classification.dropped
        );
        observer.on_event(&ExportEvent::Classified {
            water: classification.water.len(),
            buildings: classification.buildings.len(),
            streets: classification.streets.len(),
            dropped: classification.dropped,
        });

        let renderer = PathRenderer::new(&transform);
        let mut stats = RenderStats::default();
        for bucket in StyleBucket::RENDER_ORDER {
            let features = classification.bucket(bucket);
            if features.is_empty() {
                debug!("Bucket '{}' is empty, skipping.", bucket);
                continue;
            }
            observer.on_event(&ExportEvent::RenderingBucket {
                bucket,
                features: features.len(),
            });
            stats += renderer.render_bucket(bucket, styles.get(bucket), features, &mut sink)?;
        }
        if stats.rings_skipped > 0 || stats.features_skipped > 0 {
            debug!(
                "Skipped {} short rings and {} features without drawable geometry.",
                stats.rings_skipped, stats.features_skipped
            );
        }

        let document = sink.finalize()?;
        Ok((document, stats))
    }

    /// Renders a one-page PDF and names it, without touching the disk.
    pub fn export_pdf(
        &self,
        request: &ExportRequest<'_>,
        observer: &mut dyn ExportObserver,
    ) -> Result<ExportArtifact, ExportError> {
        let start = Instant::now();
        let now = Utc::now();
        let sink = PdfSink::new(self.config.page).with_metadata(PdfMetadata {
            title: self.config.title.clone(),
            producer: Some(format!("geoexport {}", env!("CARGO_PKG_VERSION"))),
            creation_date: Some(now),
        });

        let (bytes, stats) = self.render_into(request, sink, observer)?;
        let artifact = ExportArtifact::new(artifact_name(&self.config.artifact_prefix, now), bytes);

        info!(
            "Rendered {} paths into '{}' ({} bytes) in {:.2?}.",
            stats.paths,
            artifact.file_name,
            artifact.len(),
            start.elapsed()
        );
        observer.on_event(&ExportEvent::Finished {
            paths: stats.paths,
            bytes: artifact.len(),
        });
        Ok(artifact)
    }
}
