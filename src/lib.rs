//! Vector map export: turns a GeoJSON feature collection and an area into a
//! styled, page-fitted PDF.
//!
//! The pipeline runs in four synchronous stages. Bounds are resolved from a
//! drawn area or the viewport, a Web Mercator transform is fitted to the
//! page, features are classified into water, building and street buckets,
//! and each bucket is rendered as paths into a [`DocumentSink`].

pub mod bounds;
pub mod classify;
pub mod error;
pub mod events;
pub mod pipeline;
pub mod render;
pub mod style;

pub use bounds::{resolve_bounds, DrawnArea};
pub use classify::{classify, Classification};
pub use error::ExportError;
pub use events::{ExportEvent, ExportObserver, NoopObserver};
pub use pipeline::{
    artifact_name, ExportArtifact, ExportConfig, ExportPipeline, ExportPipelineBuilder,
    ExportRequest,
};
pub use render::{PathRenderer, RenderStats};
pub use style::{LayerStyle, LayerStyles, LayerToggles, StyleBucket};

pub use geoexport_projection::{derive_transform, ProjectionError, Transform};
pub use geoexport_render_core::{DocumentSink, DrawOp, RecordingSink, RenderError};
pub use geoexport_render_lopdf::{PdfMetadata, PdfSink};
pub use geoexport_types::{
    BoundingRectangle, Color, FeatureCollection, GeoFeature, Geometry, LatLng, PageGeometry,
    PagePoint, Position, TagLookup,
};
