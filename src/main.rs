use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use scriptorium::application::ports::{DocumentRenderer, JobRepository};
use scriptorium::application::services::{AssemblyWorker, AssignmentService};
use scriptorium::infrastructure::llm::GeminiClient;
use scriptorium::infrastructure::observability::{TracingConfig, init_tracing};
use scriptorium::infrastructure::persistence::{
    InMemoryJobStore, PgJobRepository, create_pool, ensure_schema,
};
use scriptorium::infrastructure::rendering::BlockDocumentRenderer;
use scriptorium::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let job_repository: Arc<dyn JobRepository> = match &settings.database.url {
        Some(url) => {
            let pool = create_pool(url, settings.database.max_connections).await?;
            ensure_schema(&pool).await?;
            tracing::info!("Using Postgres job repository");
            Arc::new(PgJobRepository::new(pool))
        }
        None => {
            tracing::info!("DATABASE_URL not set, using in-memory job store");
            Arc::new(InMemoryJobStore::new())
        }
    };

    let generator = Arc::new(GeminiClient::new(&settings.llm));
    let renderer: Arc<dyn DocumentRenderer> = Arc::new(BlockDocumentRenderer::new());

    let assignment_service = Arc::new(AssignmentService::new(Arc::clone(&generator), renderer));

    let (assembly_sender, assembly_receiver) = mpsc::channel(settings.worker.queue_capacity);
    let worker = AssemblyWorker::new(
        assembly_receiver,
        Arc::clone(&assignment_service),
        Arc::clone(&job_repository),
    );
    tokio::spawn(worker.run());

    let state = AppState {
        assignment_service,
        job_repository,
        assembly_sender,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
