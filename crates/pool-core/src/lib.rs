//! Instance Pool Loader Core Library
//!
//! Reads the append-only instance pool at session start and renders a short
//! summary of recent, relevant activity:
//! - Pool file resolution and tolerant JSONL reading
//! - Recency/relevance selection
//! - Compact, verbose and JSON renderers
//! - Configuration, diagnostic logging and the failure log
//!
//! The binary entry point is in `main.rs`.

pub mod config;
pub mod errlog;
pub mod logging;
pub mod pool;
pub mod render;
pub mod run;
pub mod select;

pub use config::{ConfigOverrides, LoaderConfig, OutputMode};
pub use run::{catch_panic, now_epoch_secs, run};
