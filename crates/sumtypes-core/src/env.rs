//! Environment configuration
//!
//! The crate has no config file; the few knobs it has are read from the
//! environment once, the first time something is logged.
//!
//! | Variable                 | Effect                                   |
//! |--------------------------|------------------------------------------|
//! | `SUMTYPES_LOG_LEVEL`     | `off`, `error`, `warn`, `info`, `debug`, `trace` or `0`-`5` |
//! | `SUMTYPES_FLUSH_EPRINT`  | flush stderr after every log line        |

use std::str::FromStr;

/// Log level variable name
pub const LOG_LEVEL_VAR: &str = "SUMTYPES_LOG_LEVEL";

/// Flush-after-print variable name
pub const FLUSH_EPRINT_VAR: &str = "SUMTYPES_FLUSH_EPRINT";

/// Get environment variable parsed as type T, or return default
///
/// ```ignore
/// let level: LogLevel = env_get(LOG_LEVEL_VAR, LogLevel::Info);
/// ```
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env_get_opt(key).unwrap_or(default)
}

/// Get environment variable as boolean
///
/// Accepts "1", "true", "yes", "on" (case-insensitive) as true.
/// Anything else is false; unset returns the default.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

/// Get environment variable as optional value
///
/// `None` when unset or when it fails to parse.
#[inline]
pub fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
