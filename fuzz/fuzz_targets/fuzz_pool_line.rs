//! Fuzz target for pool line decoding and rendering.
//!
//! Arbitrary bytes must either decode into an entry or be rejected; neither
//! decoding nor rendering a decoded entry may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pool_common::PoolEntry;
use pool_core::render::{render_compact, render_verbose, RenderContext};

fuzz_target!(|data: &[u8]| {
    if let Ok(entry) = PoolEntry::from_json_line(data) {
        let ctx = RenderContext {
            instance: "A",
            now: 1_700_000_000.0,
            codebase: "fuzz",
        };
        let entries = [entry];
        let _ = render_compact(&entries, &ctx);
        let _ = render_verbose(&entries, &ctx);
    }
});
