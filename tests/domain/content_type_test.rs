use lexora::domain::ContentType;

#[test]
fn given_mime_variants_then_pdf_and_text_are_recognized() {
    assert_eq!(ContentType::from_mime("application/pdf"), Some(ContentType::Pdf));
    assert_eq!(ContentType::from_mime("Application/PDF"), Some(ContentType::Pdf));
    assert_eq!(ContentType::from_mime("text/plain"), Some(ContentType::Text));
    assert_eq!(ContentType::from_mime("text/markdown"), Some(ContentType::Text));
    assert_eq!(ContentType::from_mime("image/png"), None);
}

#[test]
fn given_unhelpful_mime_then_detection_falls_back_to_the_extension() {
    assert_eq!(
        ContentType::detect(Some("application/octet-stream"), "kontrak.PDF"),
        Some(ContentType::Pdf)
    );
    assert_eq!(
        ContentType::detect(None, "notulen.txt"),
        Some(ContentType::Text)
    );
    assert_eq!(ContentType::detect(None, "foto.png"), None);
}

#[test]
fn given_declared_mime_then_it_wins_over_the_extension() {
    assert_eq!(
        ContentType::detect(Some("application/pdf"), "dokumen.txt"),
        Some(ContentType::Pdf)
    );
}
