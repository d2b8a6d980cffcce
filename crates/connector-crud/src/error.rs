use thiserror::Error;

/// Failures surfaced to the hosting runtime as workflow incidents.
///
/// Every variant is terminal for the invocation; nothing is retried locally.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// Malformed input: unresolvable URL, headers string that is not valid
    /// JSON, or a variable context that does not bind to the descriptor.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Method name outside the supported verb set.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The endpoint answered with a status >= 400.
    #[error("Status: {status} Body: {body}")]
    Api { status: u16, body: String },

    /// Transport-level failure before a status could be observed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ConnectorError {
    /// Incident code the host attaches to the failure. Validation and
    /// unsupported-method errors carry only their unqualified message.
    pub fn incident_code(&self) -> Option<&'static str> {
        match self {
            ConnectorError::Api { .. } | ConnectorError::Http(_) => Some("API_ERROR"),
            ConnectorError::Validation(_) | ConnectorError::UnsupportedMethod(_) => None,
        }
    }
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;
