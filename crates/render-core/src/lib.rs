//! Core rendering abstractions for vector document export.
//!
//! This crate provides the fundamental traits and types used by drawing backends:
//! - `DocumentSink` trait for abstracting path-drawing primitives
//! - `RecordingSink`, a backend that records primitives instead of drawing them
//! - Error types for rendering operations
//! - Shared coordinate helpers

mod error;
mod recording;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use recording::{DrawOp, RecordingSink};
pub use traits::DocumentSink;
