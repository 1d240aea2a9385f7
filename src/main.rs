//! tourgate - pre-submission validation gate for tourism package bookings
//!
//! Validates traveler data (RUT, name, email, phone, birth date) and
//! booking forms from the command line.

// Deny all clippy warnings in this crate
#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

use std::process::ExitCode;

/// Exit status for usage, I/O and configuration errors
const ERROR_EXIT: u8 = 2;

/// Main entry point for the tourgate CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(ERROR_EXIT)
        },
    }
}
