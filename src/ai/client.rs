//! Hosted inference API client
//!
//! Sends text to a summarization pipeline over HTTP and pulls the
//! `summary_text` out of the response.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info};

use super::Summarizer;
use crate::core::config::AppConfig;
use crate::core::models::{InferenceRequest, SummaryOutput, SummaryParams};
use crate::errors::SummaryError;

/// Client for a Hugging Face style `summarization` endpoint.
pub struct InferenceClient {
    http: Client,
    endpoint: String,
}

impl InferenceClient {
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the HTTP
    /// client cannot be built.
    pub fn new(
        base_url: &str,
        model_name: &str,
        api_token: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, SummaryError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = api_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| SummaryError::ConfigError(format!("HF_API_TOKEN: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint_url(base_url, model_name),
        })
    }

    /// # Errors
    ///
    /// See [`InferenceClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SummaryError> {
        Self::new(
            &config.inference_base_url,
            &config.summary_model,
            config.hf_api_token.as_deref(),
            Duration::from_secs(config.inference_timeout_secs),
        )
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Summarizer for InferenceClient {
    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String, SummaryError> {
        info!(
            endpoint = %self.endpoint,
            input_chars = text.chars().count(),
            max_length = params.max_length,
            min_length = params.min_length,
            do_sample = params.do_sample,
            "Requesting summary"
        );

        let request_body = InferenceRequest {
            inputs: text,
            parameters: params.into(),
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummaryError::HttpError(format!("Inference request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, "Inference API returned an error");
            return Err(SummaryError::InferenceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummaryError::InferenceError(format!("Failed to parse inference response: {}", e))
        })?;

        extract_summary_text(&response_json)
    }
}

fn endpoint_url(base_url: &str, model_name: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        model_name.trim_start_matches('/')
    )
}

/// Pulls the first `summary_text` out of a pipeline response.
///
/// Accepts the usual `[{"summary_text": ...}]` array as well as a bare
/// object; an `{"error": ...}` body is reported as an inference error.
///
/// # Errors
///
/// Returns an error if the body carries an error message or has no summary.
pub fn extract_summary_text(response: &Value) -> Result<String, SummaryError> {
    if let Some(message) = response.get("error").and_then(|e| e.as_str()) {
        return Err(SummaryError::InferenceError(message.to_string()));
    }

    let first = match response {
        Value::Array(items) => items.first(),
        Value::Object(_) => Some(response),
        _ => None,
    };

    first
        .and_then(|item| serde_json::from_value::<SummaryOutput>(item.clone()).ok())
        .map(|output| output.summary_text)
        .ok_or_else(|| SummaryError::InferenceError("No summary_text in response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_first_summary_from_array() {
        let body = json!([
            {"summary_text": "First summary."},
            {"summary_text": "Second summary."}
        ]);
        assert_eq!(extract_summary_text(&body).unwrap(), "First summary.");
    }

    #[test]
    fn extracts_summary_from_bare_object() {
        let body = json!({"summary_text": "Only one."});
        assert_eq!(extract_summary_text(&body).unwrap(), "Only one.");
    }

    #[test]
    fn error_body_is_reported() {
        let body = json!({"error": "Model is currently loading", "estimated_time": 20.0});
        match extract_summary_text(&body) {
            Err(SummaryError::InferenceError(msg)) => {
                assert_eq!(msg, "Model is currently loading");
            }
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_array_is_an_error() {
        assert!(extract_summary_text(&json!([])).is_err());
        assert!(extract_summary_text(&json!([{"generated_text": "x"}])).is_err());
        assert!(extract_summary_text(&json!("plain")).is_err());
    }

    #[test]
    fn request_body_matches_pipeline_shape() {
        let params = SummaryParams::form_defaults();
        let body = serde_json::to_value(InferenceRequest {
            inputs: "Some text",
            parameters: (&params).into(),
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "inputs": "Some text",
                "parameters": {"max_length": 150, "min_length": 40, "do_sample": true}
            })
        );
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let client = InferenceClient::new(
            "https://example.com/models/",
            "sshleifer/distilbart-cnn-12-6",
            Some("hf_token"),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.com/models/sshleifer/distilbart-cnn-12-6"
        );
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let res = InferenceClient::new(
            "https://example.com",
            "m",
            Some("bad\ntoken"),
            Duration::from_secs(5),
        );
        assert!(matches!(res, Err(SummaryError::ConfigError(_))));
    }

    /// Answers a single HTTP request with `status` and `body`, returning the
    /// base URL to point the client at.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            // Drain the request so closing the socket doesn't reset it.
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}")
    }

    fn local_client(base_url: &str) -> InferenceClient {
        InferenceClient {
            http: Client::builder()
                .no_proxy()
                .timeout(Duration::from_secs(5))
                .build()
                .unwrap(),
            endpoint: endpoint_url(base_url, "test-model"),
        }
    }

    #[tokio::test]
    async fn non_success_status_is_an_inference_error() {
        let base_url = serve_once(
            "503 Service Unavailable",
            r#"{"error":"Model is currently loading"}"#,
        )
        .await;
        let client = local_client(&base_url);

        match client.summarize("Some text", &SummaryParams::default()).await {
            Err(SummaryError::InferenceError(msg)) => {
                assert!(msg.starts_with("HTTP 503"), "message: {msg}");
                assert!(msg.contains("Model is currently loading"));
            }
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_body_is_an_inference_error() {
        let base_url = serve_once("200 OK", "definitely not json").await;
        let client = local_client(&base_url);

        match client.summarize("Some text", &SummaryParams::default()).await {
            Err(SummaryError::InferenceError(msg)) => {
                assert!(msg.starts_with("Failed to parse inference response"));
            }
            other => panic!("Unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn successful_response_yields_summary() {
        let base_url = serve_once("200 OK", r#"[{"summary_text":"It works."}]"#).await;
        let client = local_client(&base_url);

        let summary = client
            .summarize("Some text", &SummaryParams::default())
            .await
            .unwrap();
        assert_eq!(summary, "It works.");
    }
}
