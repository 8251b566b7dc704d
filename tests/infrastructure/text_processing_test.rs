use lexora::application::ports::FileLoader;
use lexora::domain::{ContentType, Document};
use lexora::infrastructure::text_processing::{sanitize_extracted_text, PlainTextAdapter};

#[test]
fn given_hyphenated_line_break_then_the_word_is_rejoined() {
    let raw = "perjan-\njian sewa";

    assert_eq!(sanitize_extracted_text(raw), "perjanjian sewa");
}

#[test]
fn given_ragged_whitespace_then_it_collapses_but_paragraphs_survive() {
    let raw = "Pasal  1\t tentang   sewa\n\n\nPasal 2";

    assert_eq!(sanitize_extracted_text(raw), "Pasal 1 tentang sewa\n\nPasal 2");
}

#[test]
fn given_compatibility_characters_then_nfkc_normalizes_them() {
    // U+FB01 LATIN SMALL LIGATURE FI
    let raw = "ﬁnal";

    assert_eq!(sanitize_extracted_text(raw), "final");
}

fn text_document(name: &str, size: u64) -> Document {
    Document::new(name.to_string(), ContentType::Text, size)
}

#[tokio::test]
async fn given_utf8_bytes_then_plain_text_decodes_losslessly() {
    let adapter = PlainTextAdapter;
    let data = "Pasal 1: déjà vu".as_bytes();

    let text = adapter
        .extract_text(data, &text_document("a.txt", data.len() as u64))
        .await
        .unwrap();

    assert_eq!(text, "Pasal 1: déjà vu");
}

#[tokio::test]
async fn given_legacy_single_byte_encoding_then_decoding_falls_back() {
    let adapter = PlainTextAdapter;
    // "café" in Windows-1252: 0xE9 is é.
    let data = [0x63, 0x61, 0x66, 0xE9];

    let text = adapter
        .extract_text(&data, &text_document("legacy.txt", 4))
        .await
        .unwrap();

    assert_eq!(text, "café");
}

#[tokio::test]
async fn given_pdf_document_then_plain_text_adapter_rejects_it() {
    let adapter = PlainTextAdapter;
    let doc = Document::new("a.pdf".to_string(), ContentType::Pdf, 4);

    let result = adapter.extract_text(b"%PDF", &doc).await;

    assert!(result.is_err());
}
