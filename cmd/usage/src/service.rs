//! Demo services returning application outcomes

use sumtypes::{kdebug, Outcome, UnitOutcome};

use crate::errors::catalog::{generic, users};
use crate::errors::ErrorResult;

/// Success `T`, or every error that stopped it.
pub type AppOutcome<T> = Outcome<T, Vec<ErrorResult>>;

/// Success with nothing to report, or the single error that stopped it.
pub type AppUnitOutcome = UnitOutcome<ErrorResult>;

/// Anything that can stand in as the failure list of an `AppOutcome`.
pub trait IntoErrors {
    fn into_errors(self) -> Vec<ErrorResult>;
}

impl IntoErrors for ErrorResult {
    fn into_errors(self) -> Vec<ErrorResult> {
        vec![self]
    }
}

impl IntoErrors for Vec<ErrorResult> {
    fn into_errors(self) -> Vec<ErrorResult> {
        self
    }
}

impl IntoErrors for &[ErrorResult] {
    fn into_errors(self) -> Vec<ErrorResult> {
        self.to_vec()
    }
}

impl<const N: usize> IntoErrors for [ErrorResult; N] {
    fn into_errors(self) -> Vec<ErrorResult> {
        self.into()
    }
}

/// Failed `AppOutcome` from one error or several.
pub fn fail<T>(errors: impl IntoErrors) -> AppOutcome<T> {
    Outcome::failure(errors.into_errors())
}

#[derive(Debug, Default)]
pub struct Service;

impl Service {
    pub fn divide(&self, i: i32, j: i32) -> AppOutcome<i32> {
        if j == 0 {
            kdebug!("divide({}, {}): division by zero", i, j);
            return fail(generic::EXPLOSION);
        }
        Outcome::success(i / j)
    }

    /// Looks up a user; `j == 0` stands in for "no such user".
    pub fn get_user(&self, i: i32, j: i32) -> AppUnitOutcome {
        if j == 0 {
            kdebug!("get_user({}, {}): not found", i, j);
            return UnitOutcome::failure(users::USER_NOT_FOUND);
        }
        UnitOutcome::OK
    }
}
