//! OpenAPI description of the HTTP surface.

use crate::handlers;
use crate::handlers::health::HealthResponse;
use crate::handlers::root::RootResponse;
use service_core::error::AppError;
use std::path::Path;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RAG Project",
        description = "RAG application with Qdrant and FastEmbed"
    ),
    paths(
        handlers::root::root,
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::metrics::metrics,
    ),
    components(schemas(RootResponse, HealthResponse)),
    tags(
        (name = "Service", description = "Service identification"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;

/// Pretty-printed OpenAPI document.
pub fn render() -> Result<String, AppError> {
    Ok(ApiDoc::openapi().to_pretty_json()?)
}

/// Write the OpenAPI document to `path`, creating parent directories.
pub fn write_to(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut document = render()?;
    document.push('\n');
    std::fs::write(path, document)?;
    Ok(())
}
