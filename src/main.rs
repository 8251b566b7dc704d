use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use lexora::application::ports::FileLoader;
use lexora::application::services::SessionStore;
use lexora::domain::ContentType;
use lexora::infrastructure::llm::AnthropicClient;
use lexora::infrastructure::observability::{init_tracing, TracingConfig};
use lexora::infrastructure::persistence::{create_pool, PgChatRepository};
use lexora::infrastructure::text_processing::{
    CompositeFileLoader, PdfAdapter, PlainTextAdapter,
};
use lexora::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::from_env(), settings.server.port);

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    sqlx::migrate!().run(&pool).await?;

    let adapters: Vec<(ContentType, Arc<dyn FileLoader>)> = vec![
        (ContentType::Pdf, Arc::new(PdfAdapter::new())),
        (ContentType::Text, Arc::new(PlainTextAdapter)),
    ];
    let file_loader = Arc::new(CompositeFileLoader::new(adapters));

    let completion_client = Arc::new(AnthropicClient::new(
        settings.llm.api_key.clone(),
        settings.llm.model.clone(),
        settings.llm.timeout,
        settings.llm.max_retries,
    )?);

    let chat_repository = Arc::new(PgChatRepository::new(pool));

    let session_store = Arc::new(SessionStore::new(settings.session.ttl));
    SessionStore::start_sweeper(Arc::clone(&session_store), settings.session.sweep_interval);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        file_loader,
        completion_client,
        chat_repository,
        session_store,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
