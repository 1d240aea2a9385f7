//! JSON booking files
//!
//! Reads a [`BookingForm`] from disk. The file mirrors the model with
//! snake_case keys:
//!
//! ```json
//! {
//!   "account_phone": "+56 2 2345 6789",
//!   "packages": [
//!     {
//!       "package_id": 3,
//!       "package_name": "Torres del Paine",
//!       "available_seats": 4,
//!       "passengers": 1,
//!       "travelers": [
//!         { "full_name": "María José", "national_id": "12.345.678-5" }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::BookingForm;

/// Errors that can occur when loading a booking file
#[derive(Debug, Error)]
pub enum BookingFileError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not a valid booking document
    #[error("invalid booking file {path}: {source}")]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

/// Parse a booking form from a JSON string
///
/// # Errors
///
/// Returns the JSON error if `content` is not a booking document.
pub fn parse_booking(content: &str) -> Result<BookingForm, serde_json::Error> {
    serde_json::from_str(content)
}

/// Load a booking form from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_booking(path: &Path) -> Result<BookingForm, BookingFileError> {
    let content = fs::read_to_string(path).map_err(|source| BookingFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let form = parse_booking(&content).map_err(|source| BookingFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("loaded {} package(s) from {}", form.packages.len(), path.display());
    Ok(form)
}
