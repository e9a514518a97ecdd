use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProvisionerError;

/// Composite key for addressing a resource in tracked state.
///
/// Serializes as `kind.name` so state maps keyed by address round-trip
/// through JSON. Kinds never contain a dot; names may.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ResourceAddr {
    pub resource_kind: String,
    pub resource_name: String,
}

impl ResourceAddr {
    pub fn new(resource_kind: impl Into<String>, resource_name: impl Into<String>) -> Self {
        Self {
            resource_kind: resource_kind.into(),
            resource_name: resource_name.into(),
        }
    }
}

impl fmt::Display for ResourceAddr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.resource_kind, self.resource_name)
    }
}

impl From<ResourceAddr> for String {
    fn from(addr: ResourceAddr) -> Self {
        addr.to_string()
    }
}

impl TryFrom<String> for ResourceAddr {
    type Error = ProvisionerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let (kind, name) = value
            .split_once('.')
            .ok_or_else(|| ProvisionerError::State(format!("malformed resource address: {value}")))?;
        Ok(Self::new(kind, name))
    }
}
