// src/pipeline/builder.rs
use super::config::ExportConfig;
use super::orchestrator::ExportPipeline;
use crate::error::ExportError;
use crate::style::LayerStyles;
use geoexport_types::PageGeometry;
use std::path::Path;

/// A builder for creating an `ExportPipeline`.
#[derive(Debug, Default)]
pub struct ExportPipelineBuilder {
    config: ExportConfig,
}

impl ExportPipelineBuilder {
    /// Creates a new `ExportPipelineBuilder` with all layers enabled on an A4 page.
    pub fn new() -> Self { Default::default() }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: ExportConfig) -> Self { self.config = config; self }

    /// Loads the configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ExportError> {
        self.config = ExportConfig::from_file(path)?;
        Ok(self)
    }

    pub fn with_streets(mut self, show: bool) -> Self { self.config.layers.show_streets = show; self }

    pub fn with_buildings(mut self, show: bool) -> Self { self.config.layers.show_buildings = show; self }

    pub fn with_water(mut self, show: bool) -> Self { self.config.layers.show_water = show; self }

    /// Overrides the page size and margin. Defaults to A4 portrait.
    pub fn with_page(mut self, page: PageGeometry) -> Self { self.config.page = page; self }

    pub fn with_styles(mut self, styles: LayerStyles) -> Self { self.config.styles = styles; self }

    /// Sets the file name prefix; it is slugified when the artifact is named.
    pub fn with_artifact_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.artifact_prefix = prefix.into();
        self
    }

    /// Sets the PDF document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    /// Consumes the builder and creates the `ExportPipeline`.
    pub fn build(self) -> Result<ExportPipeline, ExportError> {
        self.config.validate()?;
        let layers = &self.config.layers;
        log::debug!(
            "Building export pipeline: water={} buildings={} streets={}",
            layers.show_water,
            layers.show_buildings,
            layers.show_streets
        );
        Ok(ExportPipeline::new(self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_are_applied() {
        let pipeline = ExportPipelineBuilder::new()
            .with_buildings(false)
            .with_title("Test")
            .build()
            .unwrap();
        assert!(!pipeline.config().layers.show_buildings);
        assert!(pipeline.config().layers.show_streets);
        assert_eq!(pipeline.config().title.as_deref(), Some("Test"));
    }

    #[test]
    fn test_build_validates_page() {
        let result = ExportPipelineBuilder::new()
            .with_page(PageGeometry::new(40.0, 40.0, 25.0))
            .build();
        assert!(matches!(result, Err(ExportError::Config(_))));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let result = ExportPipelineBuilder::new().with_config_file("/definitely/not/here.json");
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
