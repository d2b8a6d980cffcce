//! Outbound CRUD API connector for a workflow-automation runtime.
//!
//! One invocation translates a `{method, url, headers, payload}` variable
//! context into a single HTTP call and returns the raw response body. There
//! is no scheduler, no retry policy and no state shared across calls; the
//! whole crate is the request/response translation step.

pub mod client;
pub mod connector;
pub mod error;
pub mod executor;
pub mod normalizer;
pub mod request;
pub mod verb;


// Re-export commonly used types
pub use connector::{
    ConnectorMetadata, CrudConnector, CONNECTOR_NAME, CONNECTOR_TYPE, INPUT_VARIABLES,
};
pub use error::{ConnectorError, ConnectorResult};
pub use executor::CrudExecutor;
pub use normalizer::NormalizedRequest;
pub use request::{CrudApiRequest, UrlSource};
pub use verb::HttpVerb;
