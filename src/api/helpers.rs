//! Proxy-integration response builders.

use serde_json::{Value, json};

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Returns an HTML response with the given status code.
#[must_use]
pub fn html_response(status_code: u16, body: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": HTML_CONTENT_TYPE },
        "body": body
    })
}

/// Returns a 200 OK HTML response.
#[must_use]
pub fn ok_html(body: &str) -> Value {
    html_response(200, body)
}

/// Returns a 405 response advertising the supported methods.
#[must_use]
pub fn method_not_allowed(allowed: &str) -> Value {
    json!({
        "statusCode": 405,
        "headers": { "Allow": allowed, "Content-Type": "text/plain; charset=utf-8" },
        "body": "Method Not Allowed"
    })
}
