//! Bare-value construction
//!
//! A union over `T0, T1, ...` implements `Inject<Ti, Ati>` once per position.
//! `inject(value)` then picks the position from the static type of `value`:
//!
//! ```
//! use sumtypes_core::{Either3, Inject};
//!
//! let e: Either3<i32, String, bool> = Either3::inject(true);
//! assert_eq!(e.fold(|_| 0, |_| 1, |_| 2), 2);
//! ```
//!
//! When two positions carry the same type the position marker can't be
//! inferred and the call fails to compile. Use the named constructor
//! (`first`, `second`, ...) for those unions:
//!
//! ```compile_fail
//! use sumtypes_core::{Either2, Inject};
//!
//! let e: Either2<i32, i32> = Either2::inject(1);
//! ```

/// Zero-sized marker for a position inside a union
pub trait Position {
    /// Zero-based position index
    const INDEX: usize;
}

/// First position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct At0;

/// Second position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct At1;

/// Third position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct At2;

/// Fourth position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct At3;

impl Position for At0 {
    const INDEX: usize = 0;
}

impl Position for At1 {
    const INDEX: usize = 1;
}

impl Position for At2 {
    const INDEX: usize = 2;
}

impl Position for At3 {
    const INDEX: usize = 3;
}

/// Build a union from a bare payload; `P` is the inferred position marker.
pub trait Inject<T, P: Position>: Sized {
    fn inject(value: T) -> Self;
}
