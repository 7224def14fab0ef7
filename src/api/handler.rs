//! Lambda handler for the summary form.
//!
//! `GET` renders the empty form, `POST` summarizes the submitted `text`
//! field and renders the result. `HEAD` answers with headers only and
//! everything else is rejected with 405.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::ai::Summarizer;
use crate::core::config::AppConfig;
use crate::summary::summarize_text;
use crate::views;

const ALLOWED_METHODS: &str = "GET, POST";

/// Handles one proxy event.
///
/// # Errors
///
/// Summarizer failures are not caught here; they are returned as the
/// invocation error, as are page rendering failures. Malformed request
/// bodies produce a 400 page and non-form content types a 415.
#[tracing::instrument(
    level = "info",
    skip(summarizer, config, event),
    fields(correlation_id = %Uuid::new_v4())
)]
pub async fn function_handler(
    summarizer: &dyn Summarizer,
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let payload = &event.payload;
    let method = parsing::request_method(payload).unwrap_or_else(|| "GET".to_string());
    info!(method = %method, request_id = %event.context.request_id, "Form request received");

    match method.as_str() {
        "GET" => Ok(helpers::ok_html(&views::render_index("", "")?)),
        "HEAD" => Ok(helpers::ok_html("")),
        "POST" => handle_submission(summarizer, config, payload).await,
        other => {
            info!(method = %other, "Rejecting unsupported method");
            Ok(helpers::method_not_allowed(ALLOWED_METHODS))
        }
    }
}

async fn handle_submission(
    summarizer: &dyn Summarizer,
    config: &AppConfig,
    payload: &Value,
) -> Result<Value, Error> {
    if let Some(content_type) = payload
        .get("headers")
        .and_then(|h| parsing::get_header_value(h, "Content-Type"))
    {
        info!(content_type = %content_type, "Submission content type");
        if !parsing::is_form_urlencoded(content_type) {
            warn!(content_type = %content_type, "Rejecting non-urlencoded submission");
            return Ok(helpers::html_response(
                415,
                &views::render_error("Submissions must be sent as a URL-encoded form.")?,
            ));
        }
    }

    let body = match parsing::decode_body(payload) {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to read submission: {}", e);
            return Ok(helpers::html_response(400, &views::render_error(&e.to_string())?));
        }
    };

    let text = parsing::form_field(&body, "text").unwrap_or_default();
    if text.is_empty() {
        info!("Empty submission, skipping summarization");
        return Ok(helpers::ok_html(&views::render_index("", "")?));
    }

    let summary = summarize_text(summarizer, &text, &config.form_params)
        .await
        .map_err(|e| {
            error!("Summarization failed: {}", e);
            Error::from(e)
        })?;

    Ok(helpers::ok_html(&views::render_index(&summary, &text)?))
}
