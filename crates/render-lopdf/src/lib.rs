//! Vector PDF backend using lopdf.
//!
//! This crate provides `PdfSink`, a `DocumentSink` that turns path primitives
//! into a single-page PDF content stream and serializes the document on
//! `finalize`.

mod sink;

pub use sink::{PdfMetadata, PdfSink};
