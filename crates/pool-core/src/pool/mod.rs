//! Access to the instance pool file.
//!
//! - `path`: choose between the project-local and home-directory pool
//! - `reader`: decode the JSONL file, tolerating malformed lines

pub mod path;
pub mod reader;

pub use path::resolve_pool_path;
pub use reader::{read_entries, read_entries_with_stats, ReadStats};
