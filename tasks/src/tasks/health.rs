use crate::config::TasksConfig;
use crate::error::{Result, TaskError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct HealthBody {
    status: String,
    #[serde(default)]
    service: Option<String>,
}

/// Probe `<api_url>/health` and require `"status": "healthy"`.
pub async fn run(config: &TasksConfig) -> Result<()> {
    let url = health_url(&config.api_url);
    println!("🔄 Checking: {}", url);

    let client = reqwest::Client::builder()
        .timeout(config.health_timeout())
        .build()
        .map_err(|e| TaskError::Health(format!("failed to build HTTP client: {}", e)))?;

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| TaskError::Health(format!("{} is unreachable: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(TaskError::Health(format!("{} returned {}", url, status)));
    }

    let body: HealthBody = response
        .json()
        .await
        .map_err(|e| TaskError::Health(format!("{} returned an unexpected body: {}", url, e)))?;

    if body.status != "healthy" {
        return Err(TaskError::Health(format!(
            "{} reported status '{}'",
            url, body.status
        )));
    }

    println!(
        "✅ {} is healthy",
        body.service.as_deref().unwrap_or(config.api_url.as_str())
    );
    Ok(())
}

fn health_url(api_url: &str) -> String {
    format!("{}/health", api_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response and return the base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}", addr)
    }

    fn config(api_url: String) -> TasksConfig {
        TasksConfig {
            api_url,
            health_timeout_secs: 2,
            ..TasksConfig::default()
        }
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(health_url("http://localhost:8080/"), "http://localhost:8080/health");
    }

    #[tokio::test]
    async fn healthy_service_passes() {
        let url = serve_once("200 OK", r#"{"status":"healthy","service":"rag-api"}"#).await;
        run(&config(url)).await.unwrap();
    }

    #[tokio::test]
    async fn unhealthy_status_fails() {
        let url = serve_once("200 OK", r#"{"status":"degraded","service":"rag-api"}"#).await;

        let err = run(&config(url)).await.unwrap_err();

        assert!(err.to_string().contains("degraded"));
    }

    #[tokio::test]
    async fn error_status_fails() {
        let url = serve_once("503 Service Unavailable", r#"{"error":"down"}"#).await;

        let err = run(&config(url)).await.unwrap_err();

        assert!(matches!(err, TaskError::Health(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn unreachable_service_fails() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = tokio::time::timeout(Duration::from_secs(10), run(&config(url)))
            .await
            .unwrap()
            .unwrap_err();

        assert!(err.to_string().contains("unreachable"));
    }
}
