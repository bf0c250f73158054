pub mod fixtures;

use geoexport::{ExportArtifact, ExportError, ExportPipeline, ExportRequest, NoopObserver};
use lopdf::content::{Content, Operation};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// `[width, height]` of the first page's MediaBox
    pub fn page_size(&self) -> Result<(f32, f32), Box<dyn std::error::Error>> {
        let page_id = *self.doc.get_pages().get(&1).ok_or("PDF has no pages")?;
        let page = self.doc.get_object(page_id)?.as_dict()?;
        let media_box = page.get(b"MediaBox")?.as_array()?;
        Ok((media_box[2].as_float()?, media_box[3].as_float()?))
    }

    /// Decoded content stream operations of the first page
    pub fn operations(&self) -> Result<Vec<Operation>, Box<dyn std::error::Error>> {
        let page_id = *self.doc.get_pages().get(&1).ok_or("PDF has no pages")?;
        let raw = self.doc.get_page_content(page_id)?;
        Ok(Content::decode(&raw)?.operations)
    }

    /// Just the operator names, in order
    pub fn operators(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        Ok(self.operations()?.into_iter().map(|op| op.operator).collect())
    }
}

/// Run an export and parse the result back
pub fn export(
    pipeline: &ExportPipeline,
    request: &ExportRequest<'_>,
) -> Result<(ExportArtifact, GeneratedPdf), Box<dyn std::error::Error>> {
    let artifact = pipeline.export_pdf(request, &mut NoopObserver)?;
    let pdf = GeneratedPdf::from_bytes(artifact.bytes.clone())?;
    Ok((artifact, pdf))
}

/// Run an export that is expected to fail
pub fn export_err(pipeline: &ExportPipeline, request: &ExportRequest<'_>) -> ExportError {
    match pipeline.export_pdf(request, &mut NoopObserver) {
        Ok(artifact) => panic!("expected export to fail, got {} bytes", artifact.len()),
        Err(e) => e,
    }
}

pub fn count(operators: &[String], name: &str) -> usize {
    operators.iter().filter(|op| op.as_str() == name).count()
}
