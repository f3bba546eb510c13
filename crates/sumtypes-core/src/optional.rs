//! Present-or-absent values

use core::fmt;

use crate::error::{require, SumResult};
use crate::kprint::trace_dispatch;

/// Either a present `T` or nothing.
///
/// A present value always carries a payload. The absent state has its own
/// constructor, [`Optional::none`], and is never produced by the payload
/// constructors.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    repr: Repr<T>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Repr<T> {
    Some(T),
    None,
}

impl<T> Optional<T> {
    const NAME: &'static str = "Optional";

    /// The absent value, usable wherever an `Optional<T>` is expected.
    pub const NONE: Self = Optional { repr: Repr::None };

    /// Present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Optional { repr: Repr::Some(value) }
    }

    /// Present value from a payload that may be missing.
    ///
    /// `None` is rejected with `SumError::InvalidArgument`; use
    /// [`Optional::none`] to build the absent value on purpose.
    #[inline]
    pub fn try_some(value: Option<T>) -> SumResult<Self> {
        require(value, Self::NAME, "some").map(Self::some)
    }

    /// Absent value for any `T`.
    #[inline]
    pub const fn none() -> Self {
        Self::NONE
    }

    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self.repr, Repr::Some(_))
    }

    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Collapse to `R`: `present` gets the payload, `absent` supplies the
    /// fallback. Only one of them runs.
    #[inline]
    pub fn fold<R, F, D>(self, present: F, absent: D) -> R
    where
        F: FnOnce(T) -> R,
        D: FnOnce() -> R,
    {
        match self.repr {
            Repr::Some(value) => {
                trace_dispatch(Self::NAME, "fold", "some");
                present(value)
            }
            Repr::None => {
                trace_dispatch(Self::NAME, "fold", "none");
                absent()
            }
        }
    }

    /// Transform a present payload; absence passes through.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Some(value) => {
                trace_dispatch(Self::NAME, "map", "some");
                Optional::some(f(value))
            }
            Repr::None => {
                trace_dispatch(Self::NAME, "map", "none");
                Optional::none()
            }
        }
    }

    /// Run `present` or `absent` for its effect and return `self`.
    #[inline]
    pub fn inspect<F, D>(self, present: F, absent: D) -> Self
    where
        F: FnOnce(&T),
        D: FnOnce(),
    {
        match &self.repr {
            Repr::Some(value) => {
                trace_dispatch(Self::NAME, "inspect", "some");
                present(value)
            }
            Repr::None => {
                trace_dispatch(Self::NAME, "inspect", "none");
                absent()
            }
        }
        self
    }

    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        match &self.repr {
            Repr::Some(value) => Optional::some(value),
            Repr::None => Optional::none(),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::none()
    }
}

/// Bare-value construction: `let o: Optional<String> = "x".to_string().into();`
impl<T> From<T> for Optional<T> {
    #[inline]
    fn from(value: T) -> Self {
        Optional::some(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Some(value) => f.debug_tuple("Optional::Some").field(value).finish(),
            Repr::None => write!(f, "Optional::None"),
        }
    }
}
