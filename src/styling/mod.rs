//! Styling for terminal output.
//!
//! This module uses:
//! - anstream for auto-detecting color support
//! - color-print for markup-style message formatting
//!
//! ## stdout vs stderr principle
//!
//! - **stdout**: Primary data output (the resolved web URL)
//! - **stderr**: Status messages (errors, hints, warnings, success notes)
//!
//! This separation allows piping (`repolink | pbcopy`) without status messages
//! interfering. Use `println!` for primary output, `eprintln!` for status messages.

mod constants;

// Re-exports from anstream (auto-detecting output)
pub use anstream::{eprintln, println};

pub use constants::*;

/// Log level filter matching a verbosity count.
/// 0 = normal, 1 = verbose (-v), 2 = debug (-vv), 3+ = trace (-vvv)
pub fn level_for_verbosity(level: u8) -> log::LevelFilter {
    match level {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
