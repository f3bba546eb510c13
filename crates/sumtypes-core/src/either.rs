//! N-way closed unions: `Either2`, `Either3`, `Either4`
//!
//! Each union wraps a private enum, so a payload can only be reached through
//! `fold`, `map`, `inspect` (or the borrowing `as_ref`). All three arities are
//! generated by the `either!` macro below; they differ only in width.
//!
//! | Combinator | Shape                          | Returns                  |
//! |------------|--------------------------------|--------------------------|
//! | `fold`     | one `FnOnce(Ti) -> R` per slot | `R`                      |
//! | `map`      | one `FnOnce(Ti) -> Ui` per slot| same position, new types |
//! | `inspect`  | one `FnOnce(&Ti)` per slot     | `self`, untouched        |

use core::fmt;

use crate::error::{require, SumResult};
use crate::kprint::{trace_dispatch, trace_inject};
use crate::position::{At0, At1, At2, At3, Inject};

macro_rules! inject_impl {
    ($name:ident, $repr:ident, $variant:ident, $T:ident, $at:ident, [$($All:ident),+]) => {
        impl<$($All),+> Inject<$T, $at> for $name<$($All),+> {
            #[inline]
            fn inject(value: $T) -> Self {
                trace_inject::<$at>(stringify!($name));
                $name { repr: $repr::$variant(value) }
            }
        }
    };
}

macro_rules! either {
    (
        $(#[$meta:meta])*
        $name:ident $all:tt => $repr:ident {
            $( $variant:ident($ctor:ident, $try_ctor:ident, $T:ident, $U:ident, $F:ident, $f:ident, $at:ident) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name<$($T),+> {
            repr: $repr<$($T),+>,
        }

        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        enum $repr<$($T),+> {
            $( $variant($T), )+
        }

        impl<$($T),+> $name<$($T),+> {
            const NAME: &'static str = stringify!($name);

            $(
                #[doc = concat!("Build the `", stringify!($ctor), "` variant.")]
                #[inline]
                pub const fn $ctor(value: $T) -> Self {
                    $name { repr: $repr::$variant(value) }
                }

                #[doc = concat!("Build the `", stringify!($ctor), "` variant from a payload that may be missing.")]
                ///
                /// Fails with `SumError::InvalidArgument` on `None`.
                #[inline]
                pub fn $try_ctor(value: Option<$T>) -> SumResult<Self> {
                    require(value, Self::NAME, stringify!($ctor)).map(Self::$ctor)
                }
            )+

            /// Collapse to a single type. Exactly one function runs, with the
            /// active payload.
            #[inline]
            pub fn fold<R, $($F),+>(self, $($f: $F),+) -> R
            where
                $( $F: FnOnce($T) -> R, )+
            {
                match self.repr {
                    $(
                        $repr::$variant(value) => {
                            trace_dispatch(Self::NAME, "fold", stringify!($ctor));
                            $f(value)
                        }
                    )+
                }
            }

            /// Transform the active payload, keeping its position.
            #[inline]
            pub fn map<$($U,)+ $($F),+>(self, $($f: $F),+) -> $name<$($U),+>
            where
                $( $F: FnOnce($T) -> $U, )+
            {
                let repr = match self.repr {
                    $(
                        $repr::$variant(value) => {
                            trace_dispatch(Self::NAME, "map", stringify!($ctor));
                            $repr::$variant($f(value))
                        }
                    )+
                };
                $name { repr }
            }

            /// Run the action for the active payload and hand back `self`.
            #[inline]
            pub fn inspect<$($F),+>(self, $($f: $F),+) -> Self
            where
                $( $F: FnOnce(&$T), )+
            {
                match &self.repr {
                    $(
                        $repr::$variant(value) => {
                            trace_dispatch(Self::NAME, "inspect", stringify!($ctor));
                            $f(value)
                        }
                    )+
                }
                self
            }

            /// Borrow the payload without consuming the union.
            #[inline]
            pub fn as_ref(&self) -> $name<$(&$T),+> {
                let repr = match &self.repr {
                    $( $repr::$variant(value) => $repr::$variant(value), )+
                };
                $name { repr }
            }
        }

        $( inject_impl!($name, $repr, $variant, $T, $at, $all); )+

        impl<$($T: fmt::Debug),+> fmt::Debug for $name<$($T),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match &self.repr {
                    $(
                        $repr::$variant(value) => f
                            .debug_tuple(concat!(stringify!($name), "::", stringify!($variant)))
                            .field(value)
                            .finish(),
                    )+
                }
            }
        }
    };
}

either! {
    /// Exactly one of `T0` or `T1`.
    Either2 [T0, T1] => Repr2 {
        First(first, try_first, T0, U0, F0, f0, At0),
        Second(second, try_second, T1, U1, F1, f1, At1),
    }
}

either! {
    /// Exactly one of `T0`, `T1` or `T2`.
    Either3 [T0, T1, T2] => Repr3 {
        First(first, try_first, T0, U0, F0, f0, At0),
        Second(second, try_second, T1, U1, F1, f1, At1),
        Third(third, try_third, T2, U2, F2, f2, At2),
    }
}

either! {
    /// Exactly one of `T0`, `T1`, `T2` or `T3`.
    Either4 [T0, T1, T2, T3] => Repr4 {
        First(first, try_first, T0, U0, F0, f0, At0),
        Second(second, try_second, T1, U1, F1, f1, At1),
        Third(third, try_third, T2, U2, F2, f2, At2),
        Fourth(fourth, try_fourth, T3, U3, F3, f3, At3),
    }
}
