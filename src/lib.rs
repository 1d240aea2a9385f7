//! tourgate - pre-submission validation gate for tourism package bookings
//!
//! This library validates traveler data before a reservation request is
//! sent: the Chilean national identity number (RUT) checksum, name, email,
//! phone and birth date fields, and per-package seat and passenger rules.
//!
//! All validators are pure and total: malformed input yields `false`, never
//! a panic.
//!
//! ```
//! use tourgate::core::services::{is_valid_national_id, is_valid_email};
//!
//! assert!(is_valid_national_id(Some("12.345.678-5")));
//! assert!(is_valid_email(None));
//! ```

// Deny all clippy warnings in this crate
#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
