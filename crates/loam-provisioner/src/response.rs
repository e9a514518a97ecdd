use loam_core::Diagnostics;

use crate::error::ProvisionerError;
use crate::outcome::{DeleteOutcome, ReadOutcome};
use crate::reconcile::ReplacementDecision;

/// Plan-time response for a single reconciled attribute.
///
/// Owned by the orchestration; decision units return immutable records that
/// are applied here.
#[derive(Debug, Default)]
pub struct PlanResponse {
    pub requires_replace: bool,
    pub plan_value: Option<i64>,
    pub diagnostics: Diagnostics,
}

impl PlanResponse {
    /// Fail the evaluation if any Error-severity diagnostic was recorded.
    pub fn check(&self) -> Result<(), ProvisionerError> {
        check(&self.diagnostics)
    }
}

/// Response for one read (refresh) operation.
#[derive(Debug, Default)]
pub struct ReadResponse {
    pub remove_from_state: bool,
    pub diagnostics: Diagnostics,
}

impl ReadResponse {
    pub fn check(&self) -> Result<(), ProvisionerError> {
        check(&self.diagnostics)
    }
}

/// Response for one delete operation.
#[derive(Debug, Default)]
pub struct DeleteResponse {
    pub diagnostics: Diagnostics,
}

impl DeleteResponse {
    pub fn check(&self) -> Result<(), ProvisionerError> {
        check(&self.diagnostics)
    }
}

fn check(diagnostics: &Diagnostics) -> Result<(), ProvisionerError> {
    match diagnostics.first_error() {
        Some(diagnostic) => Err(ProvisionerError::Aborted(diagnostic.to_string())),
        None => Ok(()),
    }
}

impl ReplacementDecision {
    /// Copy this decision into the plan response.
    ///
    /// `requires_replace` is only ever raised, and the plan value is only
    /// overwritten when the decision resolved one.
    pub fn apply(&self, resp: &mut PlanResponse) {
        if self.force_replace {
            resp.requires_replace = true;
        }
        if let Some(value) = self.resolved_plan_value {
            resp.plan_value = Some(value);
        }
        resp.diagnostics.extend(self.diagnostics.iter().cloned());
    }
}

impl ReadOutcome {
    /// Copy this outcome into the read response.
    ///
    /// Returns true if the outcome was handled here and the caller should
    /// stop normal read processing.
    pub fn apply(&self, resp: &mut ReadResponse) -> bool {
        match self {
            Self::Proceed => false,
            Self::RemoveFromState(diagnostic) => {
                resp.diagnostics.push(diagnostic.clone());
                resp.remove_from_state = true;
                true
            }
            Self::AuthFailure(diagnostic) => {
                resp.diagnostics.push(diagnostic.clone());
                true
            }
        }
    }
}

impl DeleteOutcome {
    /// Copy this outcome into the delete response.
    ///
    /// Returns true when the item is gone (success, already absent, or
    /// benign missing) and its state entry can be dropped.
    pub fn apply(&self, resp: &mut DeleteResponse) -> bool {
        match self {
            Self::Success | Self::AlreadyAbsent => true,
            Self::BenignMissing(diagnostic) => {
                resp.diagnostics.push(diagnostic.clone());
                true
            }
            Self::Failure(diagnostic) => {
                resp.diagnostics.push(diagnostic.clone());
                false
            }
        }
    }
}
