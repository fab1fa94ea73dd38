use estimator_core::{ProjectType, RequestId};
use thiserror::Error;

/// Failure of a connect attempt. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    #[error("Please enter both API Key and Base ID")]
    MissingCredentials,
    #[error("Connection Error: {message}")]
    Http { status: u16, message: String },
    #[error("Connection Error: {0}")]
    Network(String),
    #[error("Connection Error: {0}")]
    Parse(String),
    #[error("Connection Error: invalid endpoint {0}")]
    InvalidEndpoint(String),
    #[error("Connection Error: background engine is not running")]
    EngineUnavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ConnectCompleted {
        request_id: RequestId,
        result: Result<Vec<ProjectType>, ConnectError>,
    },
}
