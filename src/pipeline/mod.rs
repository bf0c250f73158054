//! Export pipeline orchestration.
//!
//! - [`ExportPipelineBuilder`]: fluent builder for an [`ExportPipeline`]
//! - [`ExportConfig`]: layer toggles, page, styles and naming, loadable from JSON
//! - [`ExportArtifact`]: the finished document, saved on request
//!
//! # Example
//!
//! ```ignore
//! use geoexport::{ExportPipelineBuilder, ExportRequest, NoopObserver};
//!
//! let pipeline = ExportPipelineBuilder::new().with_buildings(false).build()?;
//! let request = ExportRequest::new(&collection.features).with_viewport(bounds);
//! let artifact = pipeline.export_pdf(&request, &mut NoopObserver)?;
//! artifact.save_in("out")?;
//! ```

mod artifact;
mod builder;
pub mod config;
mod orchestrator;

pub use artifact::{artifact_name, ExportArtifact};
pub use builder::ExportPipelineBuilder;
pub use config::ExportConfig;
pub use orchestrator::{ExportPipeline, ExportRequest};
