use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use startup_insight_backend::controllers::{insight::InsightController, report::ReportController};
use startup_insight_backend::domain::{insight::InsightService, report::ReportService};
use startup_insight_backend::infrastructure::config::{Config, LogFormat};
use startup_insight_backend::infrastructure::http::start_http_server;
use startup_insight_backend::infrastructure::repositories::{
    GoogleTtsRepository, OllamaCompletionRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Startup Insight Backend on {}:{}",
        config.host,
        config.port
    );
    tracing::info!(
        environment = ?config.environment,
        development = config.is_development(),
        ollama_host = %config.ollama_host,
        ollama_model = %config.ollama_model,
        tts_language = %config.tts_language,
        "Configuration loaded"
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject HTTP clients)
    tracing::info!("Instantiating repositories...");
    let completion_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.completion_timeout_secs))
        .build()?;
    let completion_repo = Arc::new(OllamaCompletionRepository::new(
        completion_client,
        config.ollama_host.clone(),
        config.ollama_model.clone(),
    ));

    let tts_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.tts_timeout_secs))
        .build()?;
    let tts_repo = Arc::new(GoogleTtsRepository::new(
        tts_client,
        config.tts_language.clone(),
    ));

    // 2. Instantiate services (inject repositories)
    tracing::info!("Instantiating services...");
    let report_service = Arc::new(ReportService::new(completion_repo.clone()));
    let insight_service = Arc::new(InsightService::new(completion_repo, tts_repo));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let report_controller = Arc::new(ReportController::new(report_service));
    let insight_controller = Arc::new(InsightController::new(insight_service));

    // Start HTTP server with all routes
    start_http_server(config, report_controller, insight_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "startup_insight_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
