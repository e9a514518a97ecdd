use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProvisionerError {
    /// An Error-severity diagnostic terminated the current operation.
    #[error("operation aborted: {0}")]
    Aborted(String),

    #[error("state error: {0}")]
    State(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
