use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::SummaryError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// HTTP method of a proxy event, upper-cased.
///
/// Function URLs and HTTP APIs carry it under `requestContext.http.method`;
/// REST APIs use the top-level `httpMethod`.
pub fn request_method(payload: &Value) -> Option<String> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .map(str::to_ascii_uppercase)
}

/// Returns the request body as text, undoing base64 transport encoding.
///
/// A missing or null body is treated as empty.
pub fn decode_body(payload: &Value) -> Result<String, SummaryError> {
    let raw = match payload.get("body") {
        None | Some(Value::Null) => return Ok(String::new()),
        Some(Value::String(s)) => s.as_str(),
        Some(_) => return Err(SummaryError::ParseError("Invalid body format".to_string())),
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_base64 {
        return Ok(raw.to_string());
    }

    let bytes = STANDARD
        .decode(raw)
        .map_err(|e| SummaryError::ParseError(format!("Failed to decode body: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| SummaryError::ParseError(format!("Body is not valid UTF-8: {}", e)))
}

/// Whether a `Content-Type` value names a URL-encoded form, ignoring
/// parameters such as `charset`.
pub fn is_form_urlencoded(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .eq_ignore_ascii_case("application/x-www-form-urlencoded")
}

/// Reads one field from an `application/x-www-form-urlencoded` body.
///
/// The first occurrence wins, matching how form frameworks resolve
/// duplicate keys.
pub fn form_field(body: &str, name: &str) -> Option<String> {
    url::form_urlencoded::parse(body.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
