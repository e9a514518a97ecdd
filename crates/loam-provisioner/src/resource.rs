use loam_api::{ApiError, BoxFuture, DatastoreClient};

use crate::addr::ResourceAddr;

/// Trait implemented by each managed datastore resource.
///
/// Each resource type (virtual disk, ISO file, snippet, etc.) implements
/// this trait to describe, read, and delete itself against the remote
/// datastore. Methods return boxed futures for dyn compatibility.
pub trait DatastoreResource: Send + Sync {
    /// The resource kind identifier (e.g. "disk", "file").
    fn kind(&self) -> &str;

    /// The volume identifier of this resource on the datastore.
    fn id(&self) -> &str;

    fn addr(&self) -> ResourceAddr {
        ResourceAddr::new(self.kind(), self.id())
    }

    /// Fetch the current properties of this resource from the datastore.
    /// The reported size, if any, lives under the `size` key.
    fn read(&self) -> BoxFuture<'_, Result<serde_json::Value, ApiError>>;

    /// Delete this resource from the datastore.
    fn delete(&self) -> BoxFuture<'_, Result<(), ApiError>>;
}

/// A datastore item addressed by volume identifier, backed by a remote
/// client. The common case for disks and files that need no per-kind
/// read/delete logic.
pub struct VolumeResource<'a> {
    kind: &'a str,
    volume_id: &'a str,
    client: &'a dyn DatastoreClient,
}

impl<'a> VolumeResource<'a> {
    pub fn new(kind: &'a str, volume_id: &'a str, client: &'a dyn DatastoreClient) -> Self {
        Self {
            kind,
            volume_id,
            client,
        }
    }
}

impl DatastoreResource for VolumeResource<'_> {
    fn kind(&self) -> &str {
        self.kind
    }

    fn id(&self) -> &str {
        self.volume_id
    }

    fn read(&self) -> BoxFuture<'_, Result<serde_json::Value, ApiError>> {
        self.client.read_item(self.volume_id)
    }

    fn delete(&self) -> BoxFuture<'_, Result<(), ApiError>> {
        self.client.delete_item(self.volume_id)
    }
}
