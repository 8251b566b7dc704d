use lexora::application::services::prompt_builder::{
    self, ANALYSIS_BUDGET, COMPARE_BUDGET,
};
use lexora::application::services::{AnalysisPreset, DraftLength, DraftSpec};
use lexora::domain::Language;

#[test]
fn given_short_document_then_every_task_embeds_it_verbatim() {
    let doc = "Pasal 1: Para pihak sepakat.";

    for lang in [Language::Id, Language::En] {
        let prompts = [
            prompt_builder::summarize(lang, doc),
            prompt_builder::ask(lang, doc, "Siapa para pihaknya?"),
            prompt_builder::analyze(lang, AnalysisPreset::Summary, doc),
            prompt_builder::review(lang, doc, doc),
            prompt_builder::compare(lang, doc, doc),
            prompt_builder::compliance(lang, doc, doc),
        ];
        for prompt in prompts {
            assert!(prompt.text.contains(doc));
            assert!(!prompt.truncated);
        }
    }
}

#[test]
fn given_oversized_document_then_exactly_the_budget_prefix_survives() {
    let doc = "a".repeat(ANALYSIS_BUDGET + 5_000);

    let prompt = prompt_builder::summarize(Language::Id, &doc);

    assert!(prompt.truncated);
    assert!(prompt.text.contains(&"a".repeat(ANALYSIS_BUDGET)));
    assert!(!prompt.text.contains(&"a".repeat(ANALYSIS_BUDGET + 1)));
}

#[test]
fn given_multibyte_document_then_truncation_counts_characters() {
    // 3 bytes per char; a byte-indexed cut would panic or split a code point.
    let doc = "é".repeat(ANALYSIS_BUDGET + 10);

    let prompt = prompt_builder::summarize(Language::Id, &doc);

    assert!(prompt.truncated);
    assert!(prompt.text.contains(&"é".repeat(ANALYSIS_BUDGET)));
}

#[test]
fn given_two_oversized_documents_then_compare_truncates_each_to_its_budget() {
    let left = "x".repeat(COMPARE_BUDGET + 100);
    let right = "y".repeat(COMPARE_BUDGET + 100);

    let prompt = prompt_builder::compare(Language::En, &left, &right);

    assert!(prompt.truncated);
    assert!(prompt.text.contains(&"x".repeat(COMPARE_BUDGET)));
    assert!(!prompt.text.contains(&"x".repeat(COMPARE_BUDGET + 1)));
    assert!(prompt.text.contains(&"y".repeat(COMPARE_BUDGET)));
}

#[test]
fn given_structured_tasks_then_schema_directive_is_appended() {
    let doc = "Isi dokumen.";

    let analyze = prompt_builder::analyze(Language::Id, AnalysisPreset::Risk, doc);
    let review = prompt_builder::review(Language::En, doc, doc);

    assert!(analyze.text.contains("JSON"));
    assert!(analyze.text.contains("\"risks\""));
    assert!(review.text.contains("JSON"));
}

#[test]
fn given_free_text_tasks_then_no_schema_directive_is_appended() {
    let doc = "Isi dokumen.";

    let summarize = prompt_builder::summarize(Language::Id, doc);
    let ask = prompt_builder::ask(Language::En, doc, "Who signs?");

    assert!(!summarize.text.contains("JSON"));
    assert!(!ask.text.contains("JSON"));
}

#[test]
fn given_distinct_presets_then_analyze_instructions_differ() {
    let doc = "Isi dokumen.";

    let summary = prompt_builder::analyze(Language::Id, AnalysisPreset::Summary, doc);
    let risk = prompt_builder::analyze(Language::Id, AnalysisPreset::Risk, doc);
    let timeline = prompt_builder::analyze(Language::Id, AnalysisPreset::Timeline, doc);

    assert_ne!(summary.text, risk.text);
    assert_ne!(risk.text, timeline.text);
}

#[test]
fn given_question_then_ask_places_it_after_the_document() {
    let prompt = prompt_builder::ask(Language::Id, "dokumen", "Apa isinya?");

    assert!(prompt.text.ends_with("Pertanyaan: Apa isinya?"));
    assert_eq!(prompt.temperature, 0.0);
}

#[test]
fn given_draft_spec_then_all_fields_appear_in_the_prompt() {
    let spec = DraftSpec {
        doc_type: "Perjanjian Kerja",
        requirements: Some("Masa percobaan 3 bulan"),
        tone: Some("formal"),
        length: DraftLength::Long,
    };

    let prompt = prompt_builder::draft(Language::Id, &spec, Some("konteks referensi"));

    assert!(prompt.text.contains("Perjanjian Kerja"));
    assert!(prompt.text.contains("Masa percobaan 3 bulan"));
    assert!(prompt.text.contains("formal"));
    assert!(prompt.text.contains("konteks referensi"));
    assert_eq!(prompt.max_tokens, 1500);
}

#[test]
fn given_draft_without_context_then_nothing_is_truncated() {
    let spec = DraftSpec {
        doc_type: "Surat Kuasa",
        ..DraftSpec::default()
    };

    let prompt = prompt_builder::draft(Language::En, &spec, None);

    assert!(!prompt.truncated);
    assert!(prompt.text.contains("Surat Kuasa"));
}

#[test]
fn given_preset_strings_then_parsing_is_case_insensitive() {
    assert_eq!("RISK".parse::<AnalysisPreset>(), Ok(AnalysisPreset::Risk));
    assert_eq!("timeline".parse(), Ok(AnalysisPreset::Timeline));
    assert!("unknown".parse::<AnalysisPreset>().is_err());

    assert_eq!("Short".parse::<DraftLength>(), Ok(DraftLength::Short));
    assert!("huge".parse::<DraftLength>().is_err());
}
