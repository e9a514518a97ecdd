use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::addr::ResourceAddr;
use crate::error::ProvisionerError;
use crate::reconcile::ORIGINAL_SIZE_KEY;

/// Tracked state: the engine's record of the resources it manages.
///
/// Removing a resource from here means the engine will attempt to recreate
/// it on the next apply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackedState {
    pub resources: HashMap<ResourceAddr, TrackedResource>,
}

impl TrackedState {
    pub fn get(&self, addr: &ResourceAddr) -> Option<&TrackedResource> {
        self.resources.get(addr)
    }

    pub fn insert(&mut self, addr: ResourceAddr, resource: TrackedResource) {
        self.resources.insert(addr, resource);
    }

    pub fn remove(&mut self, addr: &ResourceAddr) -> Option<TrackedResource> {
        self.resources.remove(addr)
    }

    pub fn contains(&self, addr: &ResourceAddr) -> bool {
        self.resources.contains_key(addr)
    }

    /// Serialize to a pretty JSON snapshot. Storing the snapshot (disk,
    /// object store, ...) is the host engine's business, not ours.
    pub fn to_json(&self) -> Result<Vec<u8>, ProvisionerError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Restore from a snapshot produced by `to_json`.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ProvisionerError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// State for a single managed datastore resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedResource {
    pub resource_kind: String,
    pub id: String,
    /// Latest properties observed from the datastore.
    pub properties: serde_json::Value,
    /// Private attributes invisible to the user's configuration. The size
    /// baseline lives here under `original_state_size`.
    pub private: HashMap<String, Vec<u8>>,
}

impl TrackedResource {
    pub fn new(resource_kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_kind: resource_kind.into(),
            id: id.into(),
            properties: serde_json::Value::Null,
            private: HashMap::new(),
        }
    }

    /// The serialized size recorded at the last successful apply, if any.
    pub fn baseline(&self) -> Option<&[u8]> {
        self.private.get(ORIGINAL_SIZE_KEY).map(Vec::as_slice)
    }

    /// Record `size` as the new baseline for future drift checks.
    pub fn set_baseline(&mut self, size: i64) {
        self.private
            .insert(ORIGINAL_SIZE_KEY.to_string(), size.to_string().into_bytes());
    }
}
