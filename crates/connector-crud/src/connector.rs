//! Connector identity and the `execute` entry point invoked by the host.

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::error::{ConnectorError, ConnectorResult};
use crate::executor::CrudExecutor;
use crate::request::CrudApiRequest;

/// Name the connector is registered under in the host runtime.
pub const CONNECTOR_NAME: &str = "CRUD_CONNECTOR";
/// Element type identifier used by process definitions.
pub const CONNECTOR_TYPE: &str = "io.camunda:crud-api:1";
/// Variable names the host binds into the request descriptor. `urlNode` is
/// the implicit FEEL fallback bound alongside `url`.
pub const INPUT_VARIABLES: &[&str] = &["method", "url", "headers", "payload"];

/// Static description of this connector for the host's catalog.
#[derive(Debug, Clone)]
pub struct ConnectorMetadata {
    pub name: &'static str,
    pub kind: &'static str,
    pub input_variables: &'static [&'static str],
}

/// The outbound CRUD connector: one HTTP call per invocation, no state
/// across calls. Constructed once at process start so every invocation
/// shares the same client.
#[derive(Debug, Clone)]
pub struct CrudConnector {
    executor: CrudExecutor,
}

impl CrudConnector {
    /// Build the connector with its process-wide HTTP client.
    pub fn new() -> ConnectorResult<Self> {
        Ok(Self { executor: CrudExecutor::new()? })
    }

    /// Build the connector around an existing executor.
    pub fn with_executor(executor: CrudExecutor) -> Self {
        Self { executor }
    }

    pub fn metadata() -> ConnectorMetadata {
        ConnectorMetadata {
            name: CONNECTOR_NAME,
            kind: CONNECTOR_TYPE,
            input_variables: INPUT_VARIABLES,
        }
    }

    /// Entry point invoked by the host: bind the request descriptor from the
    /// variable context, run the pipeline, and return the raw response body.
    /// On failure the host surfaces the error as a workflow incident.
    pub async fn execute(&self, variables: JsonValue) -> ConnectorResult<String> {
        let request: CrudApiRequest = serde_json::from_value(variables).map_err(|e| {
            ConnectorError::Validation(format!("Invalid request variables: {}", e))
        })?;
        debug!(connector = CONNECTOR_NAME, "executing CRUD request");
        self.executor.execute(&request).await
    }
}
