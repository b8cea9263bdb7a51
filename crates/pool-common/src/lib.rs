//! Shared types for the instance pool loader.
//!
//! This crate holds everything that describes the pool itself:
//! - `PoolEntry` and `Action`, the record appended by cooperating instances
//! - `PoolError`, the error type used across the loader
//! - Well-known pool and error-log locations

pub mod entry;
pub mod error;
pub mod paths;

pub use entry::{Action, PoolEntry};
pub use error::{PoolError, Result};
pub use paths::{
    ERROR_LOG_FILENAME, POOL_DIR, POOL_FILENAME, PROJECT_MARKER_DIR, UNKNOWN_INSTANCE,
};
