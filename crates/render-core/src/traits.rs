use crate::error::RenderError;
use geoexport_types::{Color, PagePoint};

/// A vector drawing destination, abstracting the path primitives the
/// exporter emits.
///
/// Points are in page space (top-left origin, y down); a backend whose
/// native origin differs is responsible for flipping. Style setters apply
/// to every path issued after them.
pub trait DocumentSink {
    /// What `finalize` hands back: serialized bytes, a recorded op list, ...
    type Document;

    fn set_line_width(&mut self, width: f64) -> Result<(), RenderError>;

    fn set_stroke_color(&mut self, color: Color) -> Result<(), RenderError>;

    fn set_fill_color(&mut self, color: Color) -> Result<(), RenderError>;

    /// Starts a new subpath at `point`.
    fn move_to(&mut self, point: PagePoint) -> Result<(), RenderError>;

    /// Appends a straight segment from the current point to `point`.
    fn line_to(&mut self, point: PagePoint) -> Result<(), RenderError>;

    /// Closes the current subpath back to its start.
    fn close_path(&mut self) -> Result<(), RenderError>;

    /// Fills then strokes the current path, ending it.
    fn fill_and_stroke(&mut self) -> Result<(), RenderError>;

    /// Strokes the current path without filling, ending it.
    fn stroke(&mut self) -> Result<(), RenderError>;

    /// Consumes the sink and produces the finished document.
    fn finalize(self) -> Result<Self::Document, RenderError>
    where
        Self: Sized;
}
