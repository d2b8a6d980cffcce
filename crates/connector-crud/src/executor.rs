use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Request, Response};
use tracing::debug;

use crate::client::ClientConfig;
use crate::error::{ConnectorError, ConnectorResult};
use crate::normalizer::{self, NormalizedRequest};
use crate::request::CrudApiRequest;
use crate::verb::HttpVerb;

/// Runs one translated request over the shared client.
#[derive(Debug, Clone)]
pub struct CrudExecutor {
    client: Client,
}

impl CrudExecutor {
    /// Create an executor with a client built from the default configuration.
    pub fn new() -> ConnectorResult<Self> {
        Ok(Self { client: ClientConfig::default().build_client()? })
    }

    /// Use an externally constructed client, shared across connectors.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Run the full pipeline: normalize, build, send, classify.
    pub async fn execute(&self, request: &CrudApiRequest) -> ConnectorResult<String> {
        let normalized = normalizer::normalize(request)?;
        let http_request = self.build_request(&normalized)?;
        let response = self.client.execute(http_request).await?;
        classify(response).await
    }

    /// Map normalized fields to a concrete HTTP request. Rejects methods
    /// outside the supported verb set.
    fn build_request(&self, normalized: &NormalizedRequest) -> ConnectorResult<Request> {
        let verb = HttpVerb::parse(&normalized.method)?;

        let mut builder = self
            .client
            .request(verb.into(), normalized.url.as_str())
            .headers(build_header_map(&normalized.headers)?);

        if verb.attaches_body() {
            builder = builder.body(normalized.body_text.clone());
        }

        Ok(builder.build()?)
    }
}

/// Copy the user-supplied headers, then force `Content-Type:
/// application/json` so it replaces any caller-supplied value.
fn build_header_map(headers: &HashMap<String, String>) -> ConnectorResult<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len() + 1);
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            ConnectorError::Validation(format!("Invalid header name '{}': {}", key, e))
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            ConnectorError::Validation(format!("Invalid header value for '{}': {}", key, e))
        })?;
        map.insert(name, value);
    }
    map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(map)
}

/// Success is the raw body text; any status >= 400 becomes an API error
/// carrying the full body for diagnostics. 4xx and 5xx are not
/// distinguished and nothing is retried.
async fn classify(response: Response) -> ConnectorResult<String> {
    let status = response.status().as_u16();
    let body = response.text().await?;

    debug!(status, body = %body, "response received");

    if status >= 400 {
        return Err(ConnectorError::Api { status, body });
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn executor() -> CrudExecutor {
        CrudExecutor::new().unwrap()
    }

    fn normalized(method: &str) -> NormalizedRequest {
        NormalizedRequest {
            method: method.to_string(),
            url: "https://api.example.com/items".to_string(),
            body_text: r#"{"a":1}"#.to_string(),
            headers: HashMap::new(),
        }
    }

    fn body_bytes(request: &Request) -> Option<&[u8]> {
        request.body().and_then(|body| body.as_bytes())
    }

    #[test]
    fn get_head_delete_send_no_body() {
        for method in ["GET", "HEAD", "DELETE"] {
            let request = executor().build_request(&normalized(method)).unwrap();
            assert!(request.body().is_none(), "{method} must not carry a body");
        }
    }

    #[test]
    fn post_put_patch_attach_the_body_text() {
        for method in ["POST", "PUT", "PATCH"] {
            let request = executor().build_request(&normalized(method)).unwrap();
            assert_eq!(body_bytes(&request), Some(br#"{"a":1}"#.as_slice()));
            assert_eq!(request.method().as_str(), method);
        }
    }

    #[test]
    fn unsupported_method_is_rejected() {
        let err = executor().build_request(&normalized("TRACE")).unwrap_err();
        assert!(matches!(err, ConnectorError::UnsupportedMethod(ref m) if m == "TRACE"));
    }

    #[test]
    fn content_type_is_forced_to_json() {
        let mut fields = normalized("POST");
        fields.headers.insert("Content-Type".to_string(), "text/plain".to_string());
        fields.headers.insert("X-Test".to_string(), "abc".to_string());

        let request = executor().build_request(&fields).unwrap();
        let content_types: Vec<_> = request.headers().get_all(CONTENT_TYPE).iter().collect();
        assert_eq!(content_types, vec!["application/json"]);
        assert_eq!(request.headers().get("X-Test").unwrap(), "abc");
    }

    #[test]
    fn invalid_header_names_fail_validation() {
        let mut fields = normalized("GET");
        fields.headers.insert("bad header\n".to_string(), "x".to_string());
        let err = executor().build_request(&fields).unwrap_err();
        assert!(matches!(err, ConnectorError::Validation(_)));
    }

    #[test]
    fn empty_body_text_is_sent_as_empty_string() {
        let mut fields = normalized("POST");
        fields.body_text = String::new();
        let request = executor().build_request(&fields).unwrap();
        assert_eq!(body_bytes(&request), Some(b"".as_slice()));
    }

    #[test]
    fn builder_consumes_normalized_descriptor_end_to_end() {
        // PATCH goes through the generic verb+body path.
        let descriptor: CrudApiRequest = serde_json::from_value(json!({
            "method": "PATCH",
            "url": "https://api.example.com/items/1",
            "payload": {"a": 1},
        }))
        .unwrap();
        let fields = normalizer::normalize(&descriptor).unwrap();
        let request = executor().build_request(&fields).unwrap();
        assert_eq!(request.method().as_str(), "PATCH");
        assert_eq!(body_bytes(&request), Some(br#"{"a":1}"#.as_slice()));
    }
}
