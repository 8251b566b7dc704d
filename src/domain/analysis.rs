use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structured result of an analysis or review completion.
///
/// Every recognized field is optional; the model is free to omit any of them.
/// Fields the model emits that are not declared here are kept verbatim in
/// `extra` so callers see the full record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risks: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clauses: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisReport {
    /// Wraps unstructured completion text in a one-field report.
    pub fn from_raw_text(raw: &str) -> Self {
        Self {
            summary: Some(raw.to_string()),
            ..Self::default()
        }
    }

    /// The textual field shown to the user, falling back to the given raw
    /// completion when the model produced no summary.
    pub fn primary_text<'a>(&'a self, raw: &'a str) -> &'a str {
        self.summary.as_deref().unwrap_or(raw)
    }
}
