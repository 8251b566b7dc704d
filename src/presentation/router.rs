use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{CompletionClient, FileLoader};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_handler, ask_handler, compare_handler, compliance_handler, draft_handler,
    export_docx_handler, export_draft_docx_handler, export_draft_pdf_handler, export_pdf_handler,
    feedback_handler, health_handler, list_chats_handler, review_handler, root_handler,
    summarize_handler, upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<F, L>(state: AppState<F, L>) -> Router
where
    F: FileLoader + 'static,
    L: CompletionClient + 'static,
{
    let cors = if state.settings.cors.allow_any {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = state
            .settings
            .cors
            .origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.settings.server.max_upload_bytes);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/upload", post(upload_handler::<F, L>))
        .route("/summarize", post(summarize_handler::<F, L>))
        .route("/ask", post(ask_handler::<F, L>))
        .route("/analyze", post(analyze_handler::<F, L>))
        .route("/draft", post(draft_handler::<F, L>))
        .route("/review", post(review_handler::<F, L>))
        .route("/compare", post(compare_handler::<F, L>))
        .route("/compliance", post(compliance_handler::<F, L>))
        .route("/chats", get(list_chats_handler::<F, L>))
        .route("/export_pdf", post(export_pdf_handler::<F, L>))
        .route("/export_docx", post(export_docx_handler::<F, L>))
        .route("/export_draft_pdf", post(export_draft_pdf_handler))
        .route("/export_draft_docx", post(export_draft_docx_handler))
        .route("/feedback", post(feedback_handler::<F, L>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .layer(body_limit)
        .with_state(state)
}
