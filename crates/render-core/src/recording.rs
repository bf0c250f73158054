use crate::error::RenderError;
use crate::traits::DocumentSink;
use geoexport_types::{Color, PagePoint};

/// One drawing primitive, as issued to a [`DocumentSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    SetLineWidth(f64),
    SetStrokeColor(Color),
    SetFillColor(Color),
    MoveTo(PagePoint),
    LineTo(PagePoint),
    ClosePath,
    FillAndStroke,
    Stroke,
}

/// A sink that keeps the primitive sequence instead of drawing it.
///
/// Its document is the recorded `Vec<DrawOp>`, which makes it the reference
/// backend for comparing two renders or inspecting what a bucket emitted.
#[derive(Debug, Default)]
pub struct RecordingSink {
    ops: Vec<DrawOp>,
    path_open: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    fn require_path(&self, op: &str) -> Result<(), RenderError> {
        if self.path_open {
            Ok(())
        } else {
            Err(RenderError::InvalidSequence(format!("{} without a current path", op)))
        }
    }
}

impl DocumentSink for RecordingSink {
    type Document = Vec<DrawOp>;

    fn set_line_width(&mut self, width: f64) -> Result<(), RenderError> {
        self.ops.push(DrawOp::SetLineWidth(width));
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.ops.push(DrawOp::SetStrokeColor(color));
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.ops.push(DrawOp::SetFillColor(color));
        Ok(())
    }

    fn move_to(&mut self, point: PagePoint) -> Result<(), RenderError> {
        self.path_open = true;
        self.ops.push(DrawOp::MoveTo(point));
        Ok(())
    }

    fn line_to(&mut self, point: PagePoint) -> Result<(), RenderError> {
        self.require_path("lineTo")?;
        self.ops.push(DrawOp::LineTo(point));
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), RenderError> {
        self.require_path("closePath")?;
        self.ops.push(DrawOp::ClosePath);
        Ok(())
    }

    fn fill_and_stroke(&mut self) -> Result<(), RenderError> {
        self.require_path("fillAndStroke")?;
        self.path_open = false;
        self.ops.push(DrawOp::FillAndStroke);
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), RenderError> {
        self.require_path("stroke")?;
        self.path_open = false;
        self.ops.push(DrawOp::Stroke);
        Ok(())
    }

    fn finalize(self) -> Result<Vec<DrawOp>, RenderError> {
        if self.path_open {
            return Err(RenderError::InvalidSequence(
                "document finalized with an unpainted path".into(),
            ));
        }
        Ok(self.ops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut sink = RecordingSink::new();
        sink.set_line_width(0.8).unwrap();
        sink.move_to(PagePoint::new(1.0, 2.0)).unwrap();
        sink.line_to(PagePoint::new(3.0, 4.0)).unwrap();
        sink.stroke().unwrap();

        let ops = sink.finalize().unwrap();
        assert_eq!(
            ops,
            vec![
                DrawOp::SetLineWidth(0.8),
                DrawOp::MoveTo(PagePoint::new(1.0, 2.0)),
                DrawOp::LineTo(PagePoint::new(3.0, 4.0)),
                DrawOp::Stroke,
            ]
        );
    }

    #[test]
    fn test_line_to_requires_move_to() {
        let mut sink = RecordingSink::new();
        assert!(matches!(
            sink.line_to(PagePoint::new(0.0, 0.0)),
            Err(RenderError::InvalidSequence(_))
        ));
    }

    #[test]
    fn test_paint_ends_the_path() {
        let mut sink = RecordingSink::new();
        sink.move_to(PagePoint::new(0.0, 0.0)).unwrap();
        sink.line_to(PagePoint::new(1.0, 0.0)).unwrap();
        sink.stroke().unwrap();
        assert!(sink.close_path().is_err());
    }

    #[test]
    fn test_finalize_rejects_dangling_path() {
        let mut sink = RecordingSink::new();
        sink.move_to(PagePoint::new(0.0, 0.0)).unwrap();
        assert!(sink.finalize().is_err());
    }
}
