use lexora::domain::{Chat, Message, MessageRole};
use lexora::infrastructure::export::{render_docx, render_pdf, Transcript};

fn sample_chat() -> (Chat, Vec<Message>) {
    let chat = Chat::new(Some("Analisa Dokumen".to_string()));
    let messages = vec![
        Message::new(chat.id, MessageRole::User, "Isi dokumen sewa.".to_string()),
        Message::new(
            chat.id,
            MessageRole::Assistant,
            "Ringkasan:\n- sewa dua tahun\n- denda keterlambatan".to_string(),
        ),
    ];
    (chat, messages)
}

#[test]
fn given_chat_transcript_then_headings_carry_role_and_timestamp() {
    let (chat, messages) = sample_chat();

    let transcript = Transcript::from_chat(&chat, &messages, "fallback");

    assert_eq!(transcript.title, "Analisa Dokumen");
    assert_eq!(transcript.blocks.len(), 2);
    let first = transcript.blocks[0].heading.as_deref().unwrap();
    assert!(first.starts_with("[USER] "));
    let second = transcript.blocks[1].heading.as_deref().unwrap();
    assert!(second.starts_with("[ASSISTANT] "));
}

#[test]
fn given_untitled_chat_then_the_default_title_is_used() {
    let chat = Chat::new(None);
    let messages = [Message::new(chat.id, MessageRole::User, "isi".to_string())];

    let transcript = Transcript::from_chat(&chat, &messages, "Analisa Dokumen");

    assert_eq!(transcript.title, "Analisa Dokumen");
}

#[test]
fn given_draft_transcript_then_it_has_one_headingless_block() {
    let transcript = Transcript::from_draft("Perjanjian", "Pasal 1\nPasal 2");

    assert_eq!(transcript.blocks.len(), 1);
    assert!(transcript.blocks[0].heading.is_none());
    assert_eq!(transcript.blocks[0].body, "Pasal 1\nPasal 2");
}

#[test]
fn given_transcript_then_pdf_renderer_emits_a_pdf_document() {
    let (chat, messages) = sample_chat();
    let transcript = Transcript::from_chat(&chat, &messages, "fallback");

    let bytes = render_pdf(&transcript).unwrap();

    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn given_long_draft_then_pdf_renderer_paginates_without_failing() {
    let body = "Baris panjang dengan banyak kata untuk memaksa pemenggalan baris. ".repeat(400);
    let transcript = Transcript::from_draft("Draft Panjang", &body);

    let bytes = render_pdf(&transcript).unwrap();

    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn given_transcript_then_docx_renderer_emits_a_zip_container() {
    let (chat, messages) = sample_chat();
    let transcript = Transcript::from_chat(&chat, &messages, "fallback");

    let bytes = render_docx(&transcript).unwrap();

    // DOCX is an OOXML zip archive.
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn given_empty_message_list_then_renderers_still_produce_output() {
    let transcript = Transcript::from_chat(&Chat::new(None), &[], "Analisa Dokumen");

    assert!(render_pdf(&transcript).unwrap().starts_with(b"%PDF"));
    assert!(render_docx(&transcript).unwrap().starts_with(b"PK"));
}
