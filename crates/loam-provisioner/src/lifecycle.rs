use crate::addr::ResourceAddr;
use crate::outcome::{classify_delete, classify_read};
use crate::reconcile::reconcile;
use crate::resource::DatastoreResource;
use crate::response::{DeleteResponse, PlanResponse, ReadResponse};
use crate::state::{TrackedResource, TrackedState};

/// Plan-time size check for one resource.
///
/// Runs the reconciler against the tracked baseline and applies the
/// decision. Callers surface the response diagnostics and honor
/// `requires_replace`/`plan_value` when building the final plan.
pub fn plan_size(
    state: &TrackedState,
    addr: &ResourceAddr,
    observed: i64,
    overwrite: bool,
) -> PlanResponse {
    let baseline = state.get(addr).and_then(TrackedResource::baseline);
    let decision = reconcile(baseline, observed, overwrite, &addr.resource_kind);

    let mut resp = PlanResponse::default();
    decision.apply(&mut resp);

    if resp.requires_replace {
        tracing::warn!(addr = %addr, observed, "size drift detected, forcing replacement");
    }

    resp
}

/// Record a successful apply for one resource.
///
/// Tracks the applied properties and pins `size` as the baseline that
/// future drift checks compare against. This is the only place the
/// baseline is written.
pub fn record_applied(
    state: &mut TrackedState,
    resource: &dyn DatastoreResource,
    size: i64,
    properties: serde_json::Value,
) {
    let addr = resource.addr();
    let entry = state
        .resources
        .entry(addr.clone())
        .or_insert_with(|| TrackedResource::new(resource.kind(), resource.id()));
    entry.properties = properties;
    entry.set_baseline(size);
    tracing::debug!(addr = %addr, size, "recorded applied state");
}

/// Refresh one resource from the datastore.
///
/// On success the tracked properties are updated in place. The size
/// baseline is left alone: it belongs to the last apply, and overwriting it
/// with the live size would make baseline and observed equal at plan time,
/// hiding every out-of-band resize. A vanished resource is dropped from
/// state so the next apply recreates it; an authentication failure leaves
/// state untouched and surfaces a hard error.
pub async fn refresh(
    resource: &dyn DatastoreResource,
    state: &mut TrackedState,
    not_found_message: &str,
) -> ReadResponse {
    let addr = resource.addr();
    let mut resp = ReadResponse::default();

    match resource.read().await {
        Ok(properties) => {
            let entry = state
                .resources
                .entry(addr.clone())
                .or_insert_with(|| TrackedResource::new(resource.kind(), resource.id()));
            entry.properties = properties;
            tracing::debug!(addr = %addr, "refreshed resource");
        }
        Err(err) => {
            let outcome = classify_read(Some(&err), not_found_message);
            outcome.apply(&mut resp);
            if resp.remove_from_state {
                tracing::warn!(addr = %addr, error = %err, "resource gone, dropping from state");
                state.remove(&addr);
            } else {
                tracing::error!(addr = %addr, error = %err, "refresh aborted");
            }
        }
    }

    resp
}

/// Delete one resource from the datastore and reconcile tracked state.
///
/// The state entry is removed whenever the item ends up absent (including
/// "already gone" and benign-missing outcomes) and kept on failure so a
/// later destroy can retry.
pub async fn destroy(resource: &dyn DatastoreResource, state: &mut TrackedState) -> DeleteResponse {
    let addr = resource.addr();
    let mut resp = DeleteResponse::default();

    let result = resource.delete().await;
    let outcome = classify_delete(result.as_ref().err(), resource.id(), resource.kind());

    if outcome.apply(&mut resp) {
        state.remove(&addr);
        tracing::info!(addr = %addr, "resource destroyed");
    } else {
        tracing::warn!(addr = %addr, "delete failed, keeping state entry");
    }

    resp
}
