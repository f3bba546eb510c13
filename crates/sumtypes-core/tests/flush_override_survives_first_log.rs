//! Own process: logging state is global and initialized once.

use sumtypes_core::env::{FLUSH_EPRINT_VAR, LOG_LEVEL_VAR};
use sumtypes_core::kinfo;
use sumtypes_core::kprint::{flush_enabled, log_level, set_flush_enabled, LogLevel};

#[test]
fn test_flush_override_survives_first_log() {
    std::env::set_var(FLUSH_EPRINT_VAR, "0");
    std::env::set_var(LOG_LEVEL_VAR, "warn");

    set_flush_enabled(true);
    kinfo!("first log line triggers lazy init");

    assert!(flush_enabled());
    assert_eq!(log_level(), LogLevel::Warn);
}
