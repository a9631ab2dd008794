use crate::{SERVICE_NAME, SERVICE_VERSION};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Payload of `GET /`. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "RAG API is running")]
    pub message: String,
    #[schema(example = "0.1.0")]
    pub version: String,
}

impl RootResponse {
    pub fn running() -> Self {
        Self {
            message: "RAG API is running".to_string(),
            version: SERVICE_VERSION.to_string(),
        }
    }
}

/// Liveness endpoint: reports that the service process is up.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = RootResponse)
    ),
    tag = "Service"
)]
pub async fn root() -> Json<RootResponse> {
    tracing::debug!(service = SERVICE_NAME, "Liveness probe");
    Json(RootResponse::running())
}
