use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Drawing primitive out of order: {0}")]
    InvalidSequence(String),
}
