use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::application::ports::{CompletionClient, FileLoader};
use crate::domain::ChatId;
use crate::infrastructure::export::{render_docx, render_pdf, Transcript};
use crate::presentation::state::AppState;

use super::error::ApiError;

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const DEFAULT_CHAT_TITLE: &str = "Analisa Dokumen";
const DEFAULT_DRAFT_TITLE: &str = "Draft Dokumen";

#[derive(Debug, Clone, Copy)]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => PDF_MIME,
            ExportFormat::Docx => DOCX_MIME,
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }

    fn render(&self, transcript: &Transcript) -> Result<Vec<u8>, ApiError> {
        let bytes = match self {
            ExportFormat::Pdf => render_pdf(transcript)?,
            ExportFormat::Docx => render_docx(transcript)?,
        };
        Ok(bytes)
    }
}

#[derive(Deserialize)]
pub struct ExportChatRequest {
    pub chat_id: String,
}

#[derive(Deserialize)]
pub struct ExportDraftRequest {
    pub text: String,
    #[serde(default)]
    pub title: Option<String>,
}

fn attachment(format: ExportFormat, stem: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, format.mime().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}.{}", stem, format.extension()),
            ),
        ],
        bytes,
    )
        .into_response()
}

async fn export_chat<F, L>(
    state: AppState<F, L>,
    request: ExportChatRequest,
    format: ExportFormat,
) -> Result<Response, ApiError>
where
    F: FileLoader + 'static,
    L: CompletionClient + 'static,
{
    let chat_id = Uuid::parse_str(&request.chat_id)
        .map_err(|_| ApiError::not_found("Chat tidak ditemukan"))
        .map(ChatId::from_uuid)?;

    let chat = state
        .chat_repository
        .get_chat(chat_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Chat tidak ditemukan"))?;

    let messages = state.chat_repository.get_messages(chat_id).await?;

    let transcript = Transcript::from_chat(&chat, &messages, DEFAULT_CHAT_TITLE);
    let bytes = format.render(&transcript)?;

    tracing::info!(chat_id = %chat_id, bytes = bytes.len(), "chat exported");

    Ok(attachment(format, &format!("chat_{}", chat_id), bytes))
}

fn export_draft(request: ExportDraftRequest, format: ExportFormat) -> Result<Response, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::bad_request("Teks draf tidak boleh kosong"));
    }

    let title = request
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(DEFAULT_DRAFT_TITLE);

    let transcript = Transcript::from_draft(title, &request.text);
    let bytes = format.render(&transcript)?;

    Ok(attachment(format, "draft", bytes))
}

#[tracing::instrument(skip(state, request), fields(chat_id = %request.chat_id))]
pub async fn export_pdf_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Json(request): Json<ExportChatRequest>,
) -> Result<Response, ApiError>
where
    F: FileLoader + 'static,
    L: CompletionClient + 'static,
{
    export_chat(state, request, ExportFormat::Pdf).await
}

#[tracing::instrument(skip(state, request), fields(chat_id = %request.chat_id))]
pub async fn export_docx_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Json(request): Json<ExportChatRequest>,
) -> Result<Response, ApiError>
where
    F: FileLoader + 'static,
    L: CompletionClient + 'static,
{
    export_chat(state, request, ExportFormat::Docx).await
}

#[tracing::instrument(skip(request))]
pub async fn export_draft_pdf_handler(
    Json(request): Json<ExportDraftRequest>,
) -> Result<Response, ApiError> {
    export_draft(request, ExportFormat::Pdf)
}

#[tracing::instrument(skip(request))]
pub async fn export_draft_docx_handler(
    Json(request): Json<ExportDraftRequest>,
) -> Result<Response, ApiError> {
    export_draft(request, ExportFormat::Docx)
}
