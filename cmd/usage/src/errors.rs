//! Application error taxonomy used by the demo services

use std::fmt;

/// Broad class of an application error, mapped onto an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HttpErrorType {
    Unexpected = 0,
    Validation = 1,
    NotFound = 2,
    Conflict = 3,
    Authentication = 4,
    Authorization = 5,
    Timeout = 6,
    InternalServerError = 7,
}

impl HttpErrorType {
    pub const fn status_code(self) -> u16 {
        match self {
            HttpErrorType::Validation => 400,
            HttpErrorType::Authentication => 401,
            HttpErrorType::Authorization => 403,
            HttpErrorType::NotFound => 404,
            HttpErrorType::Timeout => 408,
            HttpErrorType::Conflict => 409,
            HttpErrorType::Unexpected | HttpErrorType::InternalServerError => 500,
        }
    }
}

impl From<u8> for HttpErrorType {
    fn from(v: u8) -> Self {
        match v {
            1 => HttpErrorType::Validation,
            2 => HttpErrorType::NotFound,
            3 => HttpErrorType::Conflict,
            4 => HttpErrorType::Authentication,
            5 => HttpErrorType::Authorization,
            6 => HttpErrorType::Timeout,
            7 => HttpErrorType::InternalServerError,
            _ => HttpErrorType::Unexpected, // Default for invalid values
        }
    }
}

impl From<HttpErrorType> for u8 {
    fn from(t: HttpErrorType) -> u8 {
        t as u8
    }
}

/// One reportable error: what happened, a stable code, and its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorResult {
    pub title: &'static str,
    pub description: &'static str,
    pub error_code: &'static str,
    pub error_type: HttpErrorType,
}

impl fmt::Display for ErrorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, HTTP {}): {}",
            self.title,
            self.error_code,
            self.error_type.status_code(),
            self.description
        )
    }
}

/// Known errors, grouped by area. Codes are `<Area>.<Title>`.
pub mod catalog {
    use super::{ErrorResult, HttpErrorType};

    pub mod generic {
        use super::*;

        pub const EXPLOSION: ErrorResult = ErrorResult {
            title: "Explosion",
            description: "Something went badly wrong",
            error_code: "Generic.Explosion",
            error_type: HttpErrorType::InternalServerError,
        };
    }

    pub mod users {
        use super::*;

        pub const USER_NOT_FOUND: ErrorResult = ErrorResult {
            title: "UserNotFound",
            description: "Unable to find user",
            error_code: "Users.UserNotFound",
            error_type: HttpErrorType::NotFound,
        };
    }
}
