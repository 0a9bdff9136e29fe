//! Core types for recording step-by-step sorting traces.
//!
//! This crate defines the contract every instrumented sorting algorithm
//! shares:
//!
//! - [`Snapshot`]: an owned copy of the working sequence at one instant
//! - [`Trace`]: snapshots in the order they were recorded
//! - [`Counters`]: comparison and swap counts for a single invocation
//! - [`Recorder`]: the invocation-scoped sink algorithms record into
//! - [`Error`]: the failure taxonomy shared by the sorters and their callers
//!
//! The [`order`] module provides comparisons that fail instead of silently
//! misordering elements that have no defined ordering (such as `NaN`).

mod error;
mod recorder;
mod snapshot;

pub mod order;

pub use error::{Error, ErrorKind};
pub use recorder::{Counters, Recorder};
pub use snapshot::{Snapshot, Trace};
