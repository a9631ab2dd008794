use clap::Parser;
use rag_api::config::RagConfig;
use rag_api::startup::Application;
use rag_api::SERVICE_NAME;
use service_core::error::AppError;
use service_core::observability::{init_tracing, shutdown_tracing};
use std::path::PathBuf;

/// Log level used when configuration cannot be read.
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser)]
#[command(name = "rag-api", about = "RAG Project HTTP API", version)]
struct Cli {
    /// Write the OpenAPI document and exit instead of serving
    #[arg(long)]
    generate_openapi_json: bool,

    /// Destination for --generate-openapi-json
    #[arg(long, default_value = "openapi.json")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if cli.generate_openapi_json {
        rag_api::openapi::write_to(&cli.output)?;
        println!("OpenAPI document written to {}", cli.output.display());
        return Ok(());
    }

    // Load configuration - fail fast if invalid
    let config = match RagConfig::load() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(SERVICE_NAME, DEFAULT_LOG_LEVEL, None);
            tracing::error!("Failed to load configuration: {}", e);
            shutdown_tracing();
            return Err(e);
        }
    };

    init_tracing(
        SERVICE_NAME,
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );

    tracing::info!(
        service = SERVICE_NAME,
        version = rag_api::SERVICE_VERSION,
        environment = %config.environment,
        "Starting RAG API"
    );

    let app = Application::build(config).await?;
    let result = app.run_until_stopped().await;

    shutdown_tracing();
    result.map_err(AppError::from)
}
