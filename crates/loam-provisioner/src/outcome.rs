use loam_api::{format_err_chain, ApiError};
use loam_core::Diagnostic;

// The remote client still reports these conditions as message text rather
// than structured variants, so classification matches on substrings.
const AUTH_FAILURE_MARKER: &str = "failed to authenticate";
const PARSE_FAILURE_MARKER: &str = "unable to parse";

/// Disposition of a read against the remote datastore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// No error — continue normal read processing.
    Proceed,
    /// The remote object is gone; drop it from tracked state so the next
    /// apply recreates it.
    RemoveFromState(Diagnostic),
    /// Authentication failed. Never treated as "resource is gone" — that
    /// would drop every tracked resource behind a bad credential.
    AuthFailure(Diagnostic),
}

impl ReadOutcome {
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Proceed)
    }
}

/// Classify the result of a read call.
///
/// The dominant failure mode for a read is "the remote object no longer
/// exists", so any non-auth error becomes removal-with-warning using the
/// caller-supplied `not_found_message` as summary. Hard failure is reserved
/// for authentication problems.
pub fn classify_read(err: Option<&ApiError>, not_found_message: &str) -> ReadOutcome {
    let Some(err) = err else {
        return ReadOutcome::Proceed;
    };

    let message = format_err_chain(err);
    if message.contains(AUTH_FAILURE_MARKER) {
        return ReadOutcome::AuthFailure(Diagnostic::error("Failed to authenticate", message));
    }

    ReadOutcome::RemoveFromState(Diagnostic::warning(not_found_message, message))
}

/// Disposition of a delete against the remote datastore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Success,
    /// The item was already gone. In a declarative system the desired end
    /// state ("absent") already holds, so this is not an error.
    AlreadyAbsent,
    /// The identifier could not be resolved remotely — the item does not
    /// exist or was deleted outside the tool.
    BenignMissing(Diagnostic),
    Failure(Diagnostic),
}

impl DeleteOutcome {
    /// Whether the desired end state ("absent") holds after this outcome.
    pub fn is_complete(&self) -> bool {
        !matches!(self, Self::Failure(_))
    }
}

/// Classify the result of a delete call on a datastore item.
pub fn classify_delete(err: Option<&ApiError>, id: &str, item_kind: &str) -> DeleteOutcome {
    let err = match err {
        None => return DeleteOutcome::Success,
        Some(ApiError::ResourceDoesNotExist) => return DeleteOutcome::AlreadyAbsent,
        Some(err) => err,
    };

    let message = format_err_chain(err);
    if message.contains(PARSE_FAILURE_MARKER) {
        DeleteOutcome::BenignMissing(Diagnostic::warning(
            format!("Datastore {item_kind} does not exist"),
            format!(
                "Could not delete datastore {item_kind} '{id}', it does not exist \
                 or has been deleted outside of loam."
            ),
        ))
    } else {
        DeleteOutcome::Failure(Diagnostic::error(
            format!("Error deleting datastore {item_kind}"),
            format!("Could not delete datastore {item_kind} '{id}', unexpected error: {message}"),
        ))
    }
}
