//! HTTP handlers for the RAG API.

pub mod health;
pub mod metrics;
pub mod openapi;
pub mod root;

use axum::http::Uri;
use service_core::error::AppError;

/// Fallback for paths with no route.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("no route for {}", uri.path()))
}
