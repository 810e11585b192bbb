//! # HTTP Server for Print Job Encoding
//!
//! Encodes JSON print jobs into printer bytes over HTTP. The response body is
//! the raw job; delivering it to a printer is up to the client.
//!
//! ## Usage
//!
//! ```bash
//! label-printer serve --listen 0.0.0.0:8080
//! curl -X POST --data @job.json -H 'content-type: application/json' \
//!     http://localhost:8080/api/jobs/encode > job.bin
//! ```

mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use log::info;

use crate::error::LabelPrinterError;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
}

/// Build the application router.
pub fn router() -> Router {
    Router::new()
        .route("/api/commands", get(handlers::commands::list))
        .route("/api/jobs/encode", post(handlers::jobs::encode))
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use label_printer::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), label_printer::LabelPrinterError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), LabelPrinterError> {
    info!("label-printer HTTP server listening on {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, router()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        router()
    }

    fn encode_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/jobs/encode")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    const JOB: &str = r#"{
        "template": {
            "name": "tube",
            "label_type": {
                "name": "tube",
                "pitch_length": "0110",
                "print_width": "0920",
                "print_length": "0080"
            },
            "labels": [{
                "name": "main_label",
                "barcodes": [{"field_name": "barcode", "x_origin": "0300", "y_origin": "0000"}]
            }]
        },
        "body": [{"main_label": {"barcode": "ABC"}}]
    }"#;

    #[tokio::test]
    async fn test_encode() {
        let response = app().oneshot(encode_request(JOB)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/octet-stream"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.starts_with(b"\x1bD0110,0920,0080\n\x00"));
        assert!(body.ends_with(b"\x1bRB001;ABC\n\x00\x1bXS;I,0001,0002C3201\n\x00"));
    }

    #[tokio::test]
    async fn test_encode_rejects_invalid_job() {
        let job = JOB.replace("\"0300\"", "\"03000\"");
        let response = app().oneshot(encode_request(&job)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let message = String::from_utf8(body.to_vec()).unwrap();
        assert!(message.contains("x_origin"), "{}", message);
    }

    #[tokio::test]
    async fn test_list_commands() {
        let request = Request::builder()
            .uri("/api/commands")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let list: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(list.as_array().unwrap().len(), 10);
        assert_eq!(list[0]["prefix"], "D");
        assert_eq!(list[0]["name"], "set label size");
    }
}
