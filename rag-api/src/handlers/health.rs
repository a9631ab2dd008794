use crate::SERVICE_NAME;
use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Payload of `GET /health`. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "rag-api")]
    pub service: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

/// Health check endpoint for Docker/K8s health probes; liveness is `GET /`.
///
/// Reports only that the process answers; no backing store is probed.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Observability"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check endpoint for K8s readiness probes.
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Service accepts traffic")
    ),
    tag = "Observability"
)]
pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}
