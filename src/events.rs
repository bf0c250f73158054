// src/events.rs
use crate::style::StyleBucket;
use std::fmt;

/// A stage boundary reached by the export pipeline.
///
/// Events carry enough data for a presentation layer to show a status line
/// and a progress bar. The pipeline never waits on the observer.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportEvent {
    Started { features: usize },
    BoundsResolved { south: f64, west: f64, north: f64, east: f64 },
    TransformDerived { scale: f64, map_width: f64, map_height: f64 },
    Classified { water: usize, buildings: usize, streets: usize, dropped: usize },
    RenderingBucket { bucket: StyleBucket, features: usize },
    Finished { paths: usize, bytes: usize },
}

impl ExportEvent {
    /// Rough completion percentage in `10..=100`.
    pub fn progress(&self) -> u8 {
        match self {
            ExportEvent::Started { .. } => 10,
            ExportEvent::BoundsResolved { .. } => 20,
            ExportEvent::TransformDerived { .. } => 30,
            ExportEvent::Classified { .. } => 40,
            ExportEvent::RenderingBucket { bucket, .. } => match bucket {
                StyleBucket::Water => 50,
                StyleBucket::Buildings => 65,
                StyleBucket::Streets => 80,
            },
            ExportEvent::Finished { .. } => 100,
        }
    }
}

impl fmt::Display for ExportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportEvent::Started { features } => {
                write!(f, "Preparing export of {} features", features)
            }
            ExportEvent::BoundsResolved { south, west, north, east } => write!(
                f,
                "Export area {:.5},{:.5} to {:.5},{:.5}",
                south, west, north, east
            ),
            ExportEvent::TransformDerived { map_width, map_height, .. } => {
                write!(f, "Fitting map to {:.1} x {:.1} pt", map_width, map_height)
            }
            ExportEvent::Classified { water, buildings, streets, .. } => write!(
                f,
                "Classified {} water, {} building and {} street features",
                water, buildings, streets
            ),
            ExportEvent::RenderingBucket { bucket, features } => {
                write!(f, "Rendering {} ({} features)", bucket, features)
            }
            ExportEvent::Finished { bytes, .. } => write!(f, "Export finished ({} bytes)", bytes),
        }
    }
}

/// Receives [`ExportEvent`]s as the pipeline advances.
pub trait ExportObserver {
    fn on_event(&mut self, event: &ExportEvent);
}

impl<F: FnMut(&ExportEvent)> ExportObserver for F {
    fn on_event(&mut self, event: &ExportEvent) {
        self(event)
    }
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ExportObserver for NoopObserver {
    fn on_event(&mut self, _event: &ExportEvent) {}
}
