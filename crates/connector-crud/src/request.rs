//! The externally supplied request descriptor and the URL source union.

use serde::Deserialize;
use serde_json::Value as JsonValue;

/// Raw request fields bound from the process variable context.
///
/// All fields are optional on the wire; validation happens during
/// normalization, not during binding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrudApiRequest {
    pub method: Option<String>,
    pub url: Option<String>,
    /// FEEL expressions may deliver the URL as a structured JSON value
    /// instead of a plain string.
    #[serde(rename = "urlNode")]
    pub url_node: Option<JsonValue>,
    pub payload: Option<JsonValue>,
    /// JSON-object-encoded header map, kept as a string by the host.
    pub headers: Option<String>,
}

/// The two shapes a caller-supplied URL can arrive in.
#[derive(Debug, Clone)]
pub enum UrlSource {
    Text(String),
    Node(JsonValue),
}

impl UrlSource {
    /// Render the source as URL text. Returns `None` when the source holds
    /// nothing usable: an empty string, JSON null, or a container value that
    /// has no scalar text.
    pub fn as_text(&self) -> Option<String> {
        let text = match self {
            UrlSource::Text(s) => s.clone(),
            UrlSource::Node(JsonValue::String(s)) => s.clone(),
            UrlSource::Node(JsonValue::Number(n)) => n.to_string(),
            UrlSource::Node(JsonValue::Bool(b)) => b.to_string(),
            UrlSource::Node(_) => String::new(),
        };
        (!text.is_empty()).then_some(text)
    }
}

impl CrudApiRequest {
    /// Fold the two optional URL fields into a single source. A non-empty
    /// `url` string always wins; `urlNode` is the fallback.
    pub fn url_source(&self) -> Option<UrlSource> {
        match &self.url {
            Some(url) if !url.is_empty() => Some(UrlSource::Text(url.clone())),
            _ => self.url_node.clone().map(UrlSource::Node),
        }
    }
}
