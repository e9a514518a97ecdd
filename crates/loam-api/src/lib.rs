//! loam-api
//!
//! Client surface for the remote datastore API. The engine only sees this
//! error type and the `DatastoreClient` trait; the concrete network client
//! lives outside this repository.

pub mod client;
pub mod error;

pub use crate::client::{BoxFuture, DatastoreClient};
pub use crate::error::{format_err_chain, ApiError};
