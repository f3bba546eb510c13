//! # sumtypes-core
//!
//! Closed sum types with exhaustive combinators.
//!
//! Every type here is exactly one of a fixed set of variants. Payloads are
//! reached through three combinators and nothing else:
//!
//! - `fold` - collapse every variant to one result type
//! - `map` - transform the active payload, keeping its variant
//! - `inspect` - observe the active payload and get the same value back
//!
//! ## Modules
//!
//! - `either` - `Either2`, `Either3`, `Either4`
//! - `optional` - `Optional<T>`, present or absent
//! - `outcome` - `Outcome<T, E>` and `UnitOutcome<E>`
//! - `position` - `Inject` and position markers for bare-value construction
//! - `error` - Error types
//! - `kprint` - Kernel-style debug printing macros
//! - `env` - Environment variable utilities
//!
//! ## Quick Start
//!
//! ```
//! use sumtypes_core::{Either3, Inject, Optional, Outcome};
//!
//! let e: Either3<i32, String, bool> = Either3::inject(String::from("hi"));
//! let width = e.fold(|n| n as usize, |s| s.len(), |_| 1);
//! assert_eq!(width, 2);
//!
//! let name: Optional<&str> = Optional::none();
//! assert_eq!(name.fold(|n| n.len(), || 0), 0);
//!
//! let parsed: Outcome<u16, String> = Outcome::success(8080);
//! assert!(parsed.is_success());
//! ```

pub mod either;
pub mod optional;
pub mod outcome;
pub mod position;
pub mod error;
pub mod kprint;
pub mod env;

// Re-exports for convenience
pub use either::{Either2, Either3, Either4};
pub use optional::Optional;
pub use outcome::{Outcome, UnitOutcome};
pub use position::{At0, At1, At2, At3, Inject, Position};
pub use error::{SumError, SumResult};
pub use env::{env_get, env_get_bool, env_get_opt};
