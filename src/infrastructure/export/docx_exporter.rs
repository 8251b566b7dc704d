use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};

use super::transcript::Transcript;
use super::ExportError;

/// Renders a transcript as a DOCX document: bold title, then per block a bold
/// heading (when present) followed by one paragraph per body line.
pub fn render_docx(transcript: &Transcript) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new().add_paragraph(
        Paragraph::new().add_run(Run::new().add_text(transcript.title.as_str()).bold().size(32)),
    );

    for block in &transcript.blocks {
        if let Some(heading) = &block.heading {
            docx = docx.add_paragraph(
                Paragraph::new().add_run(Run::new().add_text(heading.as_str()).bold()),
            );
        }
        for line in block.body.lines() {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
        }
        docx = docx.add_paragraph(Paragraph::new());
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| ExportError::RenderFailed(format!("docx serialization: {e}")))?;

    Ok(buffer.into_inner())
}
