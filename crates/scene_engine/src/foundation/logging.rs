//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

use env_logger::Env;

/// Initialize the logging system
///
/// Honors `RUST_LOG`; falls back to `info` when it is unset.
///
/// # Panics
/// Panics if a global logger has already been installed. Use [`try_init`]
/// where that can happen (tests, embedding applications).
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}

/// Initialize the logging system, ignoring an already-installed logger
///
/// Returns `true` if this call installed the logger.
pub fn try_init() -> bool {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .is_test(cfg!(test))
        .try_init()
        .is_ok()
}
