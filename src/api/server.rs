//! Survey API Server implementation
//!
//! HTTP REST API server using Axum. Survey and campaign routes live under
//! `/api/survey`, mirroring the endpoints existing clients already call.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers;
use crate::client::InMemoryDataClient;
use crate::excel::ArtifactWriter;
use crate::mail::{MailPolicy, OutboxMailSender};
use crate::pipeline::ExportPipeline;

/// API Server configuration
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// YAML seed for the in-memory data source
    pub data_file: Option<PathBuf>,
    /// Directory the outbox mail sender drops messages into
    pub outbox_dir: PathBuf,
    /// Directory for transient report files
    pub artifact_dir: PathBuf,
    pub mail: MailPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            data_file: None,
            outbox_dir: std::env::temp_dir().join("survey-outbox"),
            artifact_dir: std::env::temp_dir(),
            mail: MailPolicy::default(),
        }
    }
}

impl ApiConfig {
    /// Assemble the export pipeline this configuration describes
    pub fn pipeline(&self) -> crate::ExportResult<ExportPipeline> {
        let client = match &self.data_file {
            Some(path) => InMemoryDataClient::from_yaml_file(path)?,
            None => InMemoryDataClient::new(),
        };
        let mailer = OutboxMailSender::new(&self.outbox_dir, self.mail.clone());
        Ok(ExportPipeline::with_writer(
            Arc::new(client),
            Arc::new(mailer),
            ArtifactWriter::new(&self.artifact_dir),
        ))
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub version: String,
    pub pipeline: ExportPipeline,
}

impl AppState {
    pub fn new(pipeline: ExportPipeline) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            pipeline,
        }
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health and info endpoints
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/version", get(handlers::version))
        // Survey endpoints
        .route("/api/survey/create", post(handlers::create_survey))
        .route("/api/survey/get", get(handlers::get_survey))
        .route("/api/survey/campaign/create", post(handlers::create_campaign))
        .route("/api/survey/campaign/get", get(handlers::get_campaign))
        .route("/api/survey/campaign/export", post(handlers::export_campaign))
        // State and middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Run the API server
pub async fn run_api_server(config: ApiConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "survey_server=info,survey_export=info,tower_http=info".into()
            }),
        )
        .init();

    let pipeline = config.pipeline()?;
    let state = Arc::new(AppState::new(pipeline));
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Survey API Server starting on http://{}", addr);
    info!("   Endpoints: /api/survey/create, /api/survey/get, /api/survey/campaign/{{create,get,export}}");
    info!("   Outbox: {}", config.outbox_dir.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Survey API Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, stopping server...");
}
