use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::application::ports::{CompletionClient, FileLoader};
use crate::application::services::{prompt_builder, response_parser};
use crate::domain::{
    AnalysisReport, Chat, FileRec, Language, Message, MessageRole,
};
use crate::presentation::state::AppState;

use super::error::ApiError;
use super::intake::collect_multipart;

#[derive(Serialize)]
pub struct AnalyzeResponse {
    /// The textual field of the parsed record, or raw completion text.
    pub result: String,
    /// The full parsed record.
    pub details: AnalysisReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_message_id: Option<String>,
    pub truncated: bool,
}

fn chat_title(lang: Language) -> &'static str {
    match lang {
        Language::Id => "Analisa Dokumen",
        Language::En => "Document Analysis",
    }
}

/// Multi-file analysis. Unless the request is confidential, the exchange is
/// persisted as a chat with one user and one assistant message plus a file
/// record per uploaded filename.
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_handler<F, L>(
    State(state): State<AppState<F, L>>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError>
where
    F: FileLoader + 'static,
    L: CompletionClient + 'static,
{
    let intake = collect_multipart(multipart, state.file_loader.as_ref()).await?;

    let combined_text = intake.combined_text();
    if combined_text.is_empty() {
        return Err(ApiError::bad_request("Tidak ada input untuk dianalisa"));
    }

    let prompt = prompt_builder::analyze(intake.lang, intake.preset, &combined_text);

    let raw = state
        .completion_client
        .complete(&prompt.text, prompt.max_tokens, prompt.temperature)
        .await?;

    let details = response_parser::parse_report(&raw);
    let result = details.primary_text(&raw).to_string();

    let mut chat_id = None;
    let mut assistant_message_id = None;

    if intake.confidential {
        tracing::debug!("confidential analyze, skipping persistence");
    } else {
        let chat = Chat::new(Some(chat_title(intake.lang).to_string()));

        // The user message echoes the (budget-truncated) input, matching what
        // the model actually saw.
        let echo: String = combined_text
            .chars()
            .take(prompt_builder::ANALYSIS_BUDGET)
            .collect();
        let user_message = Message::new(chat.id, MessageRole::User, echo);
        let assistant_message = Message::new(chat.id, MessageRole::Assistant, result.clone());

        let files: Vec<FileRec> = intake
            .filenames
            .iter()
            .map(|name| FileRec::new(chat.id, name.clone()))
            .collect();

        assistant_message_id = Some(assistant_message.id.to_string());
        chat_id = Some(chat.id.to_string());

        state
            .chat_repository
            .record_analysis(&chat, &[user_message, assistant_message], &files)
            .await?;

        tracing::info!(chat_id = %chat.id, files = files.len(), "analysis persisted");
    }

    Ok(Json(AnalyzeResponse {
        result,
        details,
        chat_id,
        assistant_message_id,
        truncated: prompt.truncated,
    }))
}
