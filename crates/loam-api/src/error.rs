use thiserror::Error;

/// Errors surfaced by the remote datastore API.
///
/// Most remote failures arrive as opaque message strings; the one structured
/// case the engine relies on is `ResourceDoesNotExist`, which delete
/// classification treats as success (the desired end state already holds).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("resource does not exist")]
    ResourceDoesNotExist,

    #[error("failed to authenticate: {0}")]
    Authentication(String),

    #[error("{0}")]
    Remote(String),

    /// Transport-level failure talking to the remote endpoint. The useful
    /// detail usually sits in the source chain.
    #[error("remote call failed")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Walk the full error chain and join all causes into one string.
///
/// Transport errors often have terse `Display` impls but useful detail in
/// the source chain.
pub fn format_err_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
