use lexora::application::services::response_parser::parse_report;

#[test]
fn given_json_object_then_recognized_fields_are_parsed() {
    let raw = r#"{
        "summary": "Perjanjian sewa dua tahun.",
        "risks": ["Denda keterlambatan tidak dibatasi"],
        "recommendations": ["Negosiasikan batas denda"],
        "entities": {"penyewa": "PT Alpha"}
    }"#;

    let report = parse_report(raw);

    assert_eq!(report.summary.as_deref(), Some("Perjanjian sewa dua tahun."));
    assert_eq!(report.risks.as_ref().map(Vec::len), Some(1));
    assert_eq!(report.recommendations.as_ref().map(Vec::len), Some(1));
    assert_eq!(
        report.entities.as_ref().and_then(|e| e.get("penyewa")),
        Some(&serde_json::json!("PT Alpha"))
    );
    assert!(report.extra.is_empty());
}

#[test]
fn given_unrecognized_fields_then_they_survive_in_extra() {
    let raw = r#"{"summary": "ok", "confidence": 0.9, "notes": ["n1"]}"#;

    let report = parse_report(raw);

    assert_eq!(report.summary.as_deref(), Some("ok"));
    assert_eq!(report.extra.get("confidence"), Some(&serde_json::json!(0.9)));
    assert_eq!(report.extra.get("notes"), Some(&serde_json::json!(["n1"])));
}

#[test]
fn given_plain_prose_then_it_becomes_the_summary_unchanged() {
    let raw = "Dokumen ini adalah perjanjian sewa.\nTidak ada format JSON.";

    let report = parse_report(raw);

    assert_eq!(report.summary.as_deref(), Some(raw));
    assert!(report.risks.is_none());
}

#[test]
fn given_json_array_then_it_degrades_to_raw_text() {
    let raw = "[1, 2, 3]";

    let report = parse_report(raw);

    assert_eq!(report.summary.as_deref(), Some(raw));
}

#[test]
fn given_report_without_summary_then_primary_text_falls_back_to_raw() {
    let raw = r#"{"risks": ["a"]}"#;

    let report = parse_report(raw);

    assert!(report.summary.is_none());
    assert_eq!(report.primary_text(raw), raw);
}
