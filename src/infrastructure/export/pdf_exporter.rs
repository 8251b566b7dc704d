use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};

use super::transcript::Transcript;
use super::ExportError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 6.0;
const BODY_FONT_SIZE: f32 = 11.0;
const TITLE_FONT_SIZE: f32 = 14.0;
// Helvetica at 11pt fits roughly this many characters across the text width.
const WRAP_COLUMNS: usize = 95;

/// Renders a transcript as a paginated A4 PDF using the builtin Helvetica
/// faces, so no font files need to ship with the binary.
pub fn render_pdf(transcript: &Transcript) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        &transcript.title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "content",
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::RenderFailed(format!("builtin font: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::RenderFailed(format!("builtin font: {e}")))?;

    let mut writer = PageWriter {
        doc: &doc,
        layer: doc.get_page(first_page).get_layer(first_layer),
        y_mm: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    writer.write_lines(&wrap(&transcript.title), &bold, TITLE_FONT_SIZE);
    writer.advance(LINE_HEIGHT_MM);

    for block in &transcript.blocks {
        if let Some(heading) = &block.heading {
            writer.write_lines(&wrap(heading), &bold, BODY_FONT_SIZE);
        }
        writer.write_lines(&wrap(&block.body), &regular, BODY_FONT_SIZE);
        writer.advance(LINE_HEIGHT_MM / 2.0);
    }

    doc.save_to_bytes()
        .map_err(|e| ExportError::RenderFailed(format!("pdf serialization: {e}")))
}

struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: printpdf::PdfLayerReference,
    y_mm: f32,
}

impl PageWriter<'_> {
    fn write_lines(&mut self, lines: &[String], font: &IndirectFontRef, size: f32) {
        for line in lines {
            if self.y_mm < MARGIN_MM + LINE_HEIGHT_MM {
                self.new_page();
            }
            self.layer
                .use_text(line, size, Mm(MARGIN_MM), Mm(self.y_mm), font);
            self.y_mm -= LINE_HEIGHT_MM;
        }
    }

    fn advance(&mut self, delta_mm: f32) {
        self.y_mm -= delta_mm;
    }

    fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y_mm = PAGE_HEIGHT_MM - MARGIN_MM;
    }
}

/// Greedy word wrap to the page's column budget. Preserves explicit newlines;
/// an over-long word is emitted on its own line rather than split.
fn wrap(text: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for source_line in text.lines() {
        if source_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in source_line.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= WRAP_COLUMNS {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::wrap;

    #[test]
    fn given_short_line_when_wrapping_then_line_is_unchanged() {
        assert_eq!(wrap("hello world"), vec!["hello world".to_string()]);
    }

    #[test]
    fn given_long_line_when_wrapping_then_no_line_exceeds_budget() {
        let text = "kata ".repeat(100);
        for line in wrap(&text) {
            assert!(line.chars().count() <= super::WRAP_COLUMNS);
        }
    }

    #[test]
    fn given_explicit_newlines_when_wrapping_then_breaks_are_preserved() {
        let lines = wrap("first\n\nsecond");
        assert_eq!(lines, vec!["first".to_string(), String::new(), "second".to_string()]);
    }
}
