//! loam-core
//!
//! Severity-tagged diagnostics and the append-only diagnostics sink.
//! No I/O and no async — this is the shared vocabulary of the loam engine.

pub mod diagnostics;

pub use crate::diagnostics::{Diagnostic, Diagnostics, Severity};
