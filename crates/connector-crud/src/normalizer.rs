//! Input normalization: URL resolution, method resolution, payload
//! serialization and header parsing.

use std::collections::HashMap;

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{ConnectorError, ConnectorResult};
use crate::request::CrudApiRequest;

/// Request fields after validation, ready for the HTTP builder. Constructed
/// once per invocation and discarded after the call returns.
#[derive(Debug, Clone)]
pub struct NormalizedRequest {
    /// Uppercased method name; membership in the verb set is checked by the
    /// builder stage, not here.
    pub method: String,
    pub url: String,
    /// JSON-serialized payload, `"{}"` when nothing was supplied.
    pub body_text: String,
    pub headers: HashMap<String, String>,
}

/// Resolve the effective URL and method, serialize the payload, and parse
/// the header map. Fails when no usable URL exists or the headers string is
/// not a JSON object.
pub fn normalize(request: &CrudApiRequest) -> ConnectorResult<NormalizedRequest> {
    let url = request
        .url_source()
        .and_then(|source| source.as_text())
        .ok_or_else(|| {
            ConnectorError::Validation("URL is required and cannot be empty".to_string())
        })?;

    let method = request
        .method
        .as_deref()
        .map(str::to_uppercase)
        .unwrap_or_else(|| "GET".to_string());

    let body_text = serialize_payload(request.payload.as_ref());
    let headers = parse_headers(request.headers.as_deref())?;

    debug!(%method, %url, "normalized request");
    debug!(payload = %body_text, "serialized payload");
    debug!(?headers, "parsed headers");

    Ok(NormalizedRequest { method, url, body_text, headers })
}

/// Null, missing and empty containers all collapse to the literal `"{}"`.
fn serialize_payload(payload: Option<&JsonValue>) -> String {
    match payload {
        None | Some(JsonValue::Null) => "{}".to_string(),
        Some(JsonValue::Object(map)) if map.is_empty() => "{}".to_string(),
        Some(JsonValue::Array(items)) if items.is_empty() => "{}".to_string(),
        Some(value) => value.to_string(),
    }
}

fn parse_headers(headers: Option<&str>) -> ConnectorResult<HashMap<String, String>> {
    let raw = match headers {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(HashMap::new()),
    };

    let parsed: JsonValue = serde_json::from_str(raw)
        .map_err(|e| ConnectorError::Validation(format!("Invalid headers JSON: {}", e)))?;

    let object = parsed.as_object().ok_or_else(|| {
        ConnectorError::Validation("Invalid headers JSON: expected a JSON object".to_string())
    })?;

    let mut map = HashMap::with_capacity(object.len());
    for (key, value) in object {
        // String values are taken verbatim; anything else keeps its literal
        // JSON text (numbers, booleans, nested structures).
        let text = match value {
            JsonValue::String(s) => s.clone(),
            other => other.to_string(),
        };
        map.insert(key.clone(), text);
    }
    Ok(map)
}
