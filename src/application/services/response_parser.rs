use crate::domain::AnalysisReport;

/// Interprets raw completion text as a structured report.
///
/// Structured-output tasks never hard-fail on the model's formatting: anything
/// that does not strictly parse as a JSON object degrades to a one-field
/// report carrying the raw text unchanged.
pub fn parse_report(raw: &str) -> AnalysisReport {
    match serde_json::from_str::<AnalysisReport>(raw) {
        Ok(report) => report,
        Err(e) => {
            tracing::debug!(error = %e, "completion is not a JSON object, returning raw text");
            AnalysisReport::from_raw_text(raw)
        }
    }
}
