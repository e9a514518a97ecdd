use std::future::Future;
use std::pin::Pin;

use crate::error::ApiError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read/delete surface of the remote datastore API.
///
/// Methods return boxed futures for dyn compatibility. Retry, if any,
/// belongs to the implementation behind this trait — callers classify each
/// result exactly once.
pub trait DatastoreClient: Send + Sync {
    /// Fetch the current properties of a datastore item.
    fn read_item(
        &self,
        volume_id: &str,
    ) -> BoxFuture<'_, Result<serde_json::Value, ApiError>>;

    /// Delete a datastore item by volume identifier.
    fn delete_item(&self, volume_id: &str) -> BoxFuture<'_, Result<(), ApiError>>;
}
