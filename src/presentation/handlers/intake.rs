use axum::extract::Multipart;

use crate::application::ports::FileLoader;
use crate::domain::{ContentType, Document, Language};
use crate::infrastructure::text_processing::DOCUMENT_SEPARATOR;

use super::error::ApiError;
use crate::application::services::AnalysisPreset;

/// Everything gathered from a multipart request: extracted text per named
/// slot, uploaded filenames, and the common form fields.
#[derive(Default)]
pub struct Intake {
    /// Extracted text per form field name, in arrival order.
    pub parts: Vec<(String, String)>,
    pub filenames: Vec<String>,
    pub text_fields: Vec<(String, String)>,
    pub lang: Language,
    pub confidential: bool,
    pub preset: AnalysisPreset,
}

impl Intake {
    /// Joined text of every file part and text field, original order,
    /// separated by the visible document separator.
    pub fn combined_text(&self) -> String {
        let mut sections: Vec<&str> = Vec::new();
        for (_, text) in &self.parts {
            if !text.trim().is_empty() {
                sections.push(text.trim());
            }
        }
        for (_, text) in &self.text_fields {
            if !text.trim().is_empty() {
                sections.push(text.trim());
            }
        }
        sections.join(DOCUMENT_SEPARATOR)
    }

    /// Text for one named slot: a file field takes precedence over its text
    /// counterpart (e.g. `file_current` over `text_current`).
    pub fn slot(&self, file_field: &str, text_field: &str) -> Option<&str> {
        self.parts
            .iter()
            .find(|(name, _)| name == file_field)
            .map(|(_, text)| text.as_str())
            .or_else(|| {
                self.text_fields
                    .iter()
                    .find(|(name, _)| name == text_field)
                    .map(|(_, text)| text.as_str())
            })
            .filter(|text| !text.trim().is_empty())
    }
}

/// The truthy set the original form clients send for the confidential flag.
fn is_truthy(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "True" | "on")
}

/// Drains a multipart body, extracting text from each file part via the
/// loader and collecting plain form fields. File parts are any fields whose
/// name starts with `file`; everything else is treated as a form value.
pub async fn collect_multipart(
    mut multipart: Multipart,
    loader: &dyn FileLoader,
) -> Result<Intake, ApiError> {
    let mut intake = Intake::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read multipart: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "file" || name == "files" || name.starts_with("file_") {
            let filename = field.file_name().unwrap_or("unknown").to_string();
            let mime = field.content_type().map(str::to_string);

            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read file: {}", e)))?;

            if data.is_empty() {
                continue;
            }

            let content_type = ContentType::detect(mime.as_deref(), &filename)
                .ok_or_else(|| {
                    ApiError::bad_request(
                        "Tipe file tidak didukung. Gunakan PDF atau TXT.".to_string(),
                    )
                })?;

            let document = Document::new(filename.clone(), content_type, data.len() as u64);
            let text = loader.extract_text(&data, &document).await?;

            intake.parts.push((name, text));
            intake.filenames.push(filename);
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::bad_request(format!("Failed to read field: {}", e)))?;

            match name.as_str() {
                "lang" => {
                    intake.lang = value
                        .parse()
                        .map_err(|e: String| ApiError::bad_request(e))?;
                }
                "confidential" => intake.confidential = is_truthy(&value),
                "preset" => {
                    intake.preset = value
                        .parse()
                        .map_err(|e: String| ApiError::bad_request(e))?;
                }
                _ => intake.text_fields.push((name, value)),
            }
        }
    }

    Ok(intake)
}
