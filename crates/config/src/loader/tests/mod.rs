//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests that touch process environment use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
