mod docx_exporter;
mod pdf_exporter;
mod transcript;

pub use docx_exporter::render_docx;
pub use pdf_exporter::render_pdf;
pub use transcript::{Transcript, TranscriptBlock};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("render failed: {0}")]
    RenderFailed(String),
}
