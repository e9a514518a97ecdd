//! loam-provisioner
//!
//! Drift reconciliation and operation-outcome classification for datastore
//! resources, plus the lifecycle driver that applies those decisions to
//! tracked state.
//!
//! Public API:
//! - `reconcile()` — compare the recorded size baseline against the observed
//!   size and decide whether drift forces replacement
//! - `classify_read()` / `classify_delete()` — turn a remote call result into
//!   a disposition: proceed, remove from tracked state, or hard failure
//! - `plan_size()` / `record_applied()` / `refresh()` / `destroy()` — drive
//!   one resource operation end to end, applying the decision to state and
//!   responses

pub mod addr;
pub mod error;
pub mod lifecycle;
pub mod outcome;
pub mod reconcile;
pub mod resource;
pub mod response;
pub mod state;

pub use crate::addr::ResourceAddr;
pub use crate::error::ProvisionerError;
pub use crate::lifecycle::{destroy, plan_size, record_applied, refresh};
pub use crate::outcome::{classify_delete, classify_read, DeleteOutcome, ReadOutcome};
pub use crate::reconcile::{reconcile, ReplacementDecision, ORIGINAL_SIZE_KEY};
pub use crate::resource::{DatastoreResource, VolumeResource};
pub use crate::response::{DeleteResponse, PlanResponse, ReadResponse};
pub use crate::state::{TrackedResource, TrackedState};
