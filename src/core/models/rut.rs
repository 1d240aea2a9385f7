//! Parsed national identity number
//!
//! [`Rut`] is the typed counterpart of
//! [`is_valid_national_id`](crate::core::services::is_valid_national_id):
//! parsing succeeds exactly when that predicate returns `true`, and the
//! error says which rule failed.
//!
//! # Examples
//!
//! ```
//! use tourgate::core::models::{Rut, RutError};
//!
//! let rut = Rut::parse("12345678-5").unwrap();
//! assert_eq!(rut.to_string(), "12.345.678-5");
//! assert_eq!(rut.canonical(), "12345678-5");
//!
//! assert!(matches!(
//!     Rut::parse("12345678-4"),
//!     Err(RutError::CheckDigitMismatch { expected: '5', found: '4' })
//! ));
//! ```

use thiserror::Error;

use crate::core::services::national_id::{
    compute_check_digit, group_thousands, normalize_national_id, split_national_id,
};

/// Reasons a RUT fails to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RutError {
    /// Nothing left after removing separators and whitespace
    #[error("empty RUT")]
    Empty,

    /// Fewer than two characters (no room for body and check character)
    #[error("RUT too short: {0}")]
    TooShort(String),

    /// The body contains something other than decimal digits
    #[error("RUT body must contain only digits: {0}")]
    NonDigitBody(String),

    /// The check character does not match the body
    #[error("wrong check digit: expected {expected}, found {found}")]
    CheckDigitMismatch {
        /// Check character computed from the body
        expected: char,
        /// Check character supplied
        found: char,
    },
}

/// A checksum-verified Chilean RUT
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rut {
    body: String,
    check: char,
}

impl Rut {
    /// Parse and verify a raw identifier
    pub fn parse(raw: &str) -> Result<Self, RutError> {
        let normalized = normalize_national_id(raw);
        match normalized.chars().count() {
            0 => return Err(RutError::Empty),
            1 => return Err(RutError::TooShort(normalized)),
            _ => {},
        }

        let (body, check) =
            split_national_id(raw).ok_or_else(|| RutError::NonDigitBody(normalized.clone()))?;
        let expected = compute_check_digit(&body).ok_or(RutError::NonDigitBody(normalized))?;

        if expected != check {
            return Err(RutError::CheckDigitMismatch {
                expected,
                found: check,
            });
        }

        Ok(Self { body, check })
    }

    /// Digit body (without separators)
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Check character (`0`-`9` or `K`)
    #[must_use]
    pub const fn check_digit(&self) -> char {
        self.check
    }

    /// Unpunctuated form with a single hyphen: `12345678-5`
    #[must_use]
    pub fn canonical(&self) -> String {
        format!("{}-{}", self.body, self.check)
    }
}

impl std::fmt::Display for Rut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", group_thousands(&self.body), self.check)
    }
}

impl std::str::FromStr for Rut {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
