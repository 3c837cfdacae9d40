// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the remote enhancement service.
//!
//! The service is an opaque collaborator: one multipart `POST` goes out,
//! one JSON document comes back. Every outcome is normalized into
//! [`EnhancementOutcome`] so the caller decides what a failure means.
//!
//! There is no retry, no timeout and no cancellation. A call runs until the
//! server answers or the transport fails.

mod error;

pub use error::{ApiError, SERVER_ERROR_FALLBACK, TRANSPORT_ERROR_MESSAGE};

use crate::domain::EnhancementRequest;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

/// Base URL of the local development backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Path of the enhancement endpoint, relative to the base URL.
const ENHANCE_PATH: &str = "enhance-image";

/// Multipart field name expected by the backend.
const FILE_FIELD: &str = "file";

/// Successful response body of `POST /enhance-image`.
///
/// Extra fields (the backend also sends `success: true`) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnhanceResponse {
    /// Displayable reference to the enhanced image (data URI or URL).
    pub enhanced_image: String,
    /// Human-readable processing time, e.g. `"1.2s"`.
    pub processing_time: String,
    /// Model confidence in `[0, 1]`.
    pub confidence: f64,
}

/// Error body sent with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Uniform result of one enhancement call.
pub type EnhancementOutcome = std::result::Result<EnhanceResponse, ApiError>;

/// Client for the enhancement service.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for the given base URL (without the endpoint path).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be
    /// initialized (e.g. TLS backend failure).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("AquaVision/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the full URL of the enhancement endpoint.
    #[must_use]
    pub fn enhance_url(&self) -> String {
        format!("{}/{}", self.base_url, ENHANCE_PATH)
    }

    /// Uploads one image and waits for the enhanced result.
    ///
    /// The caller must have validated the format beforehand.
    pub async fn enhance_image(&self, request: EnhancementRequest) -> EnhancementOutcome {
        let url = self.enhance_url();
        tracing::info!(
            file = %request.file_name,
            format = %request.format,
            bytes = request.bytes.len(),
            %url,
            "uploading image for enhancement"
        );

        let part = Part::bytes(request.bytes.as_ref().clone())
            .file_name(request.file_name.clone())
            .mime_str(request.format.mime_type())?;
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "enhancement request failed"))?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = server_error_message(&body);
            tracing::warn!(status = status.as_u16(), %message, "enhancement service returned an error");
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: EnhanceResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, "enhancement response could not be parsed");
            ApiError::MalformedResponse(e.to_string())
        })?;

        tracing::info!(
            processing_time = %parsed.processing_time,
            confidence = parsed.confidence,
            "enhancement completed"
        );
        Ok(parsed)
    }

    /// Downloads an image referenced by URL (used when the service returns
    /// a link instead of an inline data URI).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Server`] for non-success statuses and
    /// [`ApiError::Transport`] for connection failures.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(%url, "fetching enhanced image");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: SERVER_ERROR_FALLBACK.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Extracts the user-facing message from an error body.
fn server_error_message(body: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail);

    match detail {
        Some(serde_json::Value::String(message)) if !message.is_empty() => message,
        Some(serde_json::Value::String(_) | serde_json::Value::Null) | None => {
            SERVER_ERROR_FALLBACK.to_string()
        }
        // FastAPI validation errors carry a list of objects.
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ImageFormat;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves exactly one canned HTTP response and returns the raw request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<Vec<u8>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });

        (format!("http://{addr}/api"), handle)
    }

    /// Reads one request, honoring `Content-Length` or chunked encoding.
    async fn read_request(socket: &mut tokio::net::TcpStream) -> Vec<u8> {
        let mut data = Vec::new();
        let mut buf = [0u8; 4096];

        let header_end = loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                return data;
            }
            data.extend_from_slice(&buf[..n]);
            if let Some(pos) = find(&data, b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let headers = String::from_utf8_lossy(&data[..header_end]).to_ascii_lowercase();
        let content_length = headers
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok());
        let chunked = headers.contains("transfer-encoding: chunked");

        loop {
            let body = &data[header_end..];
            let complete = match content_length {
                Some(len) => body.len() >= len,
                None if chunked => find(body, b"0\r\n\r\n").is_some(),
                None => true,
            };
            if complete {
                return data;
            }
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                return data;
            }
            data.extend_from_slice(&buf[..n]);
        }
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    fn sample_request() -> EnhancementRequest {
        EnhancementRequest::new(
            "reef.png",
            ImageFormat::Png,
            Arc::new(b"\x89PNG-fake-bytes".to_vec()),
        )
    }

    #[tokio::test]
    async fn success_response_is_parsed() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"success":true,"enhanced_image":"X","processing_time":"1.2s","confidence":0.87}"#,
        )
        .await;
        let client = ApiClient::new(base_url).unwrap();

        let response = client.enhance_image(sample_request()).await.unwrap();
        assert_eq!(response.enhanced_image, "X");
        assert_eq!(response.processing_time, "1.2s");
        assert!((response.confidence - 0.87).abs() < f64::EPSILON);

        let request = String::from_utf8_lossy(&server.await.unwrap()).to_string();
        assert!(request.starts_with("POST /api/enhance-image "));
        assert!(request.contains("multipart/form-data"));
        assert!(request.contains(r#"name="file""#));
        assert!(request.contains(r#"filename="reef.png""#));
        assert!(request.contains("image/png"));
        assert!(request.contains("PNG-fake-bytes"));
    }

    #[tokio::test]
    async fn error_status_uses_detail_field() {
        let (base_url, _server) = serve_once(
            "400 Bad Request",
            r#"{"detail":"Invalid image format. Only JPEG and PNG are supported."}"#,
        )
        .await;
        let client = ApiClient::new(base_url).unwrap();

        let err = client.enhance_image(sample_request()).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 400,
                message: "Invalid image format. Only JPEG and PNG are supported.".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn error_status_without_detail_uses_fallback() {
        let (base_url, _server) = serve_once("500 Internal Server Error", "oops").await;
        let client = ApiClient::new(base_url).unwrap();

        let err = client.enhance_image(sample_request()).await.unwrap_err();
        assert_eq!(err.user_message(), SERVER_ERROR_FALLBACK);
        assert!(matches!(err, ApiError::Server { status: 500, .. }));
    }

    #[tokio::test]
    async fn unparseable_success_body_is_malformed() {
        let (base_url, _server) = serve_once("200 OK", r#"{"enhanced_image": 3}"#).await;
        let client = ApiClient::new(base_url).unwrap();

        let err = client.enhance_image(sample_request()).await.unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn refused_connection_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(format!("http://{addr}/api")).unwrap();
        let err = client.enhance_image(sample_request()).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.user_message(), TRANSPORT_ERROR_MESSAGE);
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = ApiClient::new("http://localhost:8000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.enhance_url(), "http://localhost:8000/api/enhance-image");
    }

    #[test]
    fn validation_error_lists_are_stringified() {
        let message = server_error_message(r#"{"detail":[{"msg":"field required"}]}"#);
        assert!(message.contains("field required"));
        assert_eq!(server_error_message(r#"{"detail":null}"#), SERVER_ERROR_FALLBACK);
        assert_eq!(server_error_message(r#"{"detail":""}"#), SERVER_ERROR_FALLBACK);
    }
}
