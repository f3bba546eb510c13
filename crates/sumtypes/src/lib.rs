//! # sumtypes - Discriminated unions for Rust
//!
//! Closed sum types whose variants are visited exhaustively through
//! combinators rather than by pattern matching on public variants.
//!
//! ## Types
//!
//! - **`Either2` / `Either3` / `Either4`**: exactly one of 2, 3 or 4 unrelated types
//! - **`Optional<T>`**: a present `T` or absent
//! - **`Outcome<T, E>`**: success `T` or failure `E`, with `is_success()`
//! - **`UnitOutcome<E>`**: `Outcome<(), E>` with the canonical `OK` success
//!
//! ## Quick Start
//!
//! ```
//! use sumtypes::{Inject, Outcome, UnitOutcome};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct NotFound;
//!
//! fn divide(i: i32, j: i32) -> Outcome<i32, NotFound> {
//!     if j == 0 {
//!         return Outcome::inject(NotFound);
//!     }
//!     Outcome::inject(i / j)
//! }
//!
//! assert_eq!(divide(10, 2).fold(|n| n, |_| -1), 5);
//! assert_eq!(divide(10, 0).fold(|n| n, |_| -1), -1);
//!
//! let saved: UnitOutcome<NotFound> = UnitOutcome::OK;
//! let same = saved.clone().inspect(|()| {}, |_| unreachable!());
//! assert_eq!(same, saved);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      User Code                              │
//! │        construct: first/second/.., inject, some/none        │
//! │        consume:   fold, map, inspect                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   sumtypes-core                             │
//! │   pub struct { repr: private enum }  +  exhaustive match    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

// Re-export core types
pub use sumtypes_core::{
    Either2,
    Either3,
    Either4,
    Optional,
    Outcome,
    UnitOutcome,
    Inject,
    Position,
    At0,
    At1,
    At2,
    At3,
    SumError,
    SumResult,
};

// Re-export kprint macros for debug logging
pub use sumtypes_core::{kprintln, kerror, kwarn, kinfo, kdebug, ktrace};
pub use sumtypes_core::kprint::{LogLevel, init as init_logging, set_log_level, set_flush_enabled};

// Re-export env utilities
pub use sumtypes_core::{env_get, env_get_bool, env_get_opt};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_surface() {
        let e: Either2<u8, &str> = Either2::inject("x");
        assert_eq!(e.fold(|_| 0, |s| s.len()), 1);

        let o: Optional<u8> = 3u8.into();
        assert!(o.is_some());

        let err = Outcome::<u8, u8>::try_success(None).unwrap_err();
        assert!(matches!(err, SumError::InvalidArgument { .. }));
    }
}
