//! Success-or-failure values
//!
//! `Outcome<T, E>` is the two-slot union with success/failure naming and an
//! `is_success` query. `UnitOutcome<E>` fixes the success payload to `()`,
//! for operations that either succeed with nothing to report or fail with `E`.

use core::fmt;

use crate::error::{require, SumResult};
use crate::kprint::{trace_dispatch, trace_inject};
use crate::position::{At0, At1, Inject};

/// A success carrying `T` or a failure carrying `E`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome<T, E> {
    repr: Repr<T, E>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Repr<T, E> {
    Success(T),
    Failure(E),
}

/// Outcome with no success payload.
///
/// ```
/// use sumtypes_core::UnitOutcome;
///
/// fn check(n: i32) -> UnitOutcome<&'static str> {
///     if n < 0 { UnitOutcome::failure("negative") } else { UnitOutcome::OK }
/// }
///
/// assert!(check(1).is_success());
/// assert_eq!(check(-1).fold(|()| "", |e| e), "negative");
/// ```
pub type UnitOutcome<E> = Outcome<(), E>;

impl<T, E> Outcome<T, E> {
    const NAME: &'static str = "Outcome";

    #[inline]
    pub const fn success(value: T) -> Self {
        Outcome { repr: Repr::Success(value) }
    }

    #[inline]
    pub const fn failure(error: E) -> Self {
        Outcome { repr: Repr::Failure(error) }
    }

    /// Success from a payload that may be missing; `None` is an
    /// `InvalidArgument`.
    #[inline]
    pub fn try_success(value: Option<T>) -> SumResult<Self> {
        require(value, Self::NAME, "success").map(Self::success)
    }

    /// Failure from an error that may be missing; `None` is an
    /// `InvalidArgument`.
    #[inline]
    pub fn try_failure(error: Option<E>) -> SumResult<Self> {
        require(error, Self::NAME, "failure").map(Self::failure)
    }

    /// Which side is active. Payloads are still only reachable through the
    /// combinators.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.repr, Repr::Success(_))
    }

    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Collapse both sides to `R`. Exactly one function runs.
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self.repr {
            Repr::Success(value) => {
                trace_dispatch(Self::NAME, "fold", "success");
                on_success(value)
            }
            Repr::Failure(error) => {
                trace_dispatch(Self::NAME, "fold", "failure");
                on_failure(error)
            }
        }
    }

    /// Transform whichever side is active; a success stays a success.
    #[inline]
    pub fn map<U, G, S, F>(self, on_success: S, on_failure: F) -> Outcome<U, G>
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> G,
    {
        let repr = match self.repr {
            Repr::Success(value) => {
                trace_dispatch(Self::NAME, "map", "success");
                Repr::Success(on_success(value))
            }
            Repr::Failure(error) => {
                trace_dispatch(Self::NAME, "map", "failure");
                Repr::Failure(on_failure(error))
            }
        };
        Outcome { repr }
    }

    /// Observe the active side and return `self` unchanged.
    #[inline]
    pub fn inspect<S, F>(self, on_success: S, on_failure: F) -> Self
    where
        S: FnOnce(&T),
        F: FnOnce(&E),
    {
        match &self.repr {
            Repr::Success(value) => {
                trace_dispatch(Self::NAME, "inspect", "success");
                on_success(value)
            }
            Repr::Failure(error) => {
                trace_dispatch(Self::NAME, "inspect", "failure");
                on_failure(error)
            }
        }
        self
    }

    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        let repr = match &self.repr {
            Repr::Success(value) => Repr::Success(value),
            Repr::Failure(error) => Repr::Failure(error),
        };
        Outcome { repr }
    }
}

impl<E> Outcome<(), E> {
    /// The canonical success of a [`UnitOutcome`].
    pub const OK: Self = Outcome { repr: Repr::Success(()) };

    #[inline]
    pub const fn ok() -> Self {
        Self::OK
    }
}

impl<T, E> Inject<T, At0> for Outcome<T, E> {
    #[inline]
    fn inject(value: T) -> Self {
        trace_inject::<At0>(Self::NAME);
        Outcome::success(value)
    }
}

impl<T, E> Inject<E, At1> for Outcome<T, E> {
    #[inline]
    fn inject(error: E) -> Self {
        trace_inject::<At1>(Self::NAME);
        Outcome::failure(error)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(error),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Success(value) => f.debug_tuple("Outcome::Success").field(value).finish(),
            Repr::Failure(error) => f.debug_tuple("Outcome::Failure").field(error).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SumError;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct DivError;

    fn divide(i: i32, j: i32) -> Outcome<i32, DivError> {
        if j == 0 {
            Outcome::inject(DivError)
        } else {
            Outcome::inject(i / j)
        }
    }

    #[test]
    fn test_division_scenario() {
        assert_eq!(divide(10, 2).fold(|n| n, |_| -1), 5);
        assert_eq!(divide(10, 0).fold(|n| n, |_| -1), -1);
    }

    #[test]
    fn test_duality() {
        let cases = [divide(4, 2), divide(4, 0)];
        for o in cases {
            let took_success = o.clone().fold(|_| true, |_| false);
            assert_eq!(o.is_success(), took_success);
            assert_eq!(o.is_failure(), !took_success);
        }
    }

    #[test]
    fn test_map_keeps_side() {
        let o: Outcome<i32, DivError> = Outcome::success(3);
        let m = o.map(|n| n.to_string(), |_| "div");
        assert_eq!(m, Outcome::success("3".to_string()));

        let m = divide(1, 0).map(|n| n * 2, |_| "div by zero");
        assert!(m.is_failure());
        assert_eq!(m.fold(|_| "", |e| e), "div by zero");
    }

    #[test]
    fn test_inspect_runs_one_action() {
        let success_hits = Cell::new(0);
        let failure_hits = Cell::new(0);
        let o = divide(9, 3);
        let back = o.clone().inspect(
            |n| {
                assert_eq!(*n, 3);
                success_hits.set(success_hits.get() + 1);
            },
            |_| failure_hits.set(failure_hits.get() + 1),
        );
        assert_eq!(back, o);
        assert_eq!((success_hits.get(), failure_hits.get()), (1, 0));
    }

    #[test]
    fn test_unit_outcome_chaining() {
        let a = Cell::new(false);
        let b = Cell::new(false);
        let result = UnitOutcome::<String>::OK.inspect(|_| a.set(true), |_| b.set(true));
        assert_eq!(result, UnitOutcome::ok());
        assert!(a.get());
        assert!(!b.get());
    }

    #[test]
    fn test_unit_outcome_failure() {
        let o: UnitOutcome<&str> = UnitOutcome::failure("user not found");
        assert!(!o.is_success());
        assert_eq!(o.map(|()| 0, str::len).fold(|n| n, |n| n), 14);
    }

    #[test]
    fn test_try_constructors() {
        assert_eq!(
            Outcome::<i32, String>::try_failure(None),
            Err(SumError::InvalidArgument { union: "Outcome", variant: "failure" })
        );
        assert_eq!(
            Outcome::<i32, String>::try_success(None).unwrap_err().variant(),
            "success"
        );
        assert_eq!(Outcome::<i32, String>::try_success(Some(1)), Ok(Outcome::success(1)));
    }

    #[test]
    fn test_from_std_result() {
        let parsed: Outcome<i32, _> = "12".parse::<i32>().into();
        assert_eq!(parsed.fold(|n| n, |_| 0), 12);

        let parsed: Outcome<i32, _> = "twelve".parse::<i32>().into();
        assert!(parsed.is_failure());
    }

    #[test]
    fn test_as_ref_and_debug() {
        let o: Outcome<Vec<u8>, String> = Outcome::failure("boom".into());
        assert_eq!(o.as_ref().fold(|v| v.len(), |e| e.len()), 4);
        assert_eq!(format!("{:?}", o), "Outcome::Failure(\"boom\")");
        assert_eq!(format!("{:?}", UnitOutcome::<u8>::OK), "Outcome::Success(())");
    }
}
