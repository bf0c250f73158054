use chrono::{DateTime, Utc};
use geoexport_render_core::utils::flip_y;
use geoexport_render_core::{DocumentSink, RenderError};
use geoexport_types::{Color, PageGeometry, PagePoint};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

/// Document information written to the PDF `Info` dictionary.
#[derive(Debug, Clone, Default)]
pub struct PdfMetadata {
    pub title: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
}

/// A `DocumentSink` that builds a one-page PDF with `lopdf`.
///
/// Primitives accumulate into a single content stream; nothing is written
/// until `finalize`, which serializes the whole document into memory.
pub struct PdfSink {
    page: PageGeometry,
    metadata: PdfMetadata,
    content: Content,
    path_open: bool,
}

fn pdf_err(e: lopdf::Error) -> RenderError {
    RenderError::Pdf(e.to_string())
}

fn color_operands(color: Color) -> Vec<Object> {
    color.to_unit_rgb().iter().map(|c| Object::Real(*c)).collect()
}

impl PdfSink {
    pub fn new(page: PageGeometry) -> Self {
        Self {
            page,
            metadata: PdfMetadata::default(),
            content: Content { operations: vec![] },
            path_open: false,
        }
    }

    pub fn with_metadata(mut self, metadata: PdfMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn point_operands(&self, point: PagePoint) -> Vec<Object> {
        vec![
            Object::Real(point.x as f32),
            Object::Real(flip_y(point.y, self.page.height) as f32),
        ]
    }

    fn require_path(&self, op: &str) -> Result<(), RenderError> {
        if self.path_open {
            Ok(())
        } else {
            Err(RenderError::InvalidSequence(format!("{} without a current path", op)))
        }
    }

    fn info_dictionary(&self) -> Option<Dictionary> {
        let PdfMetadata { title, producer, creation_date } = &self.metadata;
        if title.is_none() && producer.is_none() && creation_date.is_none() {
            return None;
        }
        let mut info = Dictionary::new();
        if let Some(title) = &self.metadata.title {
            info.set("Title", Object::string_literal(title.as_str()));
        }
        if let Some(producer) = &self.metadata.producer {
            info.set("Producer", Object::string_literal(producer.as_str()));
        }
        if let Some(date) = &self.metadata.creation_date {
            let stamp = date.format("D:%Y%m%d%H%M%SZ").to_string();
            info.set("CreationDate", Object::string_literal(stamp));
        }
        Some(info)
    }
}

impl DocumentSink for PdfSink {
    type Document = Vec<u8>;

    fn set_line_width(&mut self, width: f64) -> Result<(), RenderError> {
        self.push("w", vec![Object::Real(width as f32)]);
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.push("RG", color_operands(color));
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) -> Result<(), RenderError> {
        self.push("rg", color_operands(color));
        Ok(())
    }

    fn move_to(&mut self, point: PagePoint) -> Result<(), RenderError> {
        let operands = self.point_operands(point);
        self.push("m", operands);
        self.path_open = true;
        Ok(())
    }

    fn line_to(&mut self, point: PagePoint) -> Result<(), RenderError> {
        self.require_path("lineTo")?;
        let operands = self.point_operands(point);
        self.push("l", operands);
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), RenderError> {
        self.require_path("closePath")?;
        self.push("h", vec![]);
        Ok(())
    }

    fn fill_and_stroke(&mut self) -> Result<(), RenderError> {
        self.require_path("fillAndStroke")?;
        self.push("B", vec![]);
        self.path_open = false;
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), RenderError> {
        self.require_path("stroke")?;
        self.push("S", vec![]);
        self.path_open = false;
        Ok(())
    }

    fn finalize(self) -> Result<Vec<u8>, RenderError> {
        if self.path_open {
            return Err(RenderError::InvalidSequence(
                "document finalized with an unpainted path".into(),
            ));
        }

        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let encoded = self.content.encode().map_err(pdf_err)?;
        log::debug!(
            "Encoded {} content operations into {} bytes",
            self.content.operations.len(),
            encoded.len()
        );
        let content_id = document.add_object(Stream::new(Dictionary::new(), encoded));

        let page_id = document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(self.page.width as f32),
                Object::Real(self.page.height as f32),
            ],
            "Contents" => content_id,
            "Resources" => Dictionary::new(),
        });

        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        document.trailer.set("Root", catalog_id);

        if let Some(info) = self.info_dictionary() {
            let info_id = document.add_object(info);
            document.trailer.set("Info", info_id);
        }

        let mut bytes = Vec::new();
        document
            .save_to(&mut bytes)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        Ok(bytes)
    }
}
