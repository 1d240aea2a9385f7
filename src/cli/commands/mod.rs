//! Command implementations
//!
//! Each command returns whether its check passed; the caller maps that to
//! the exit status.

mod booking;
mod check_digit;
mod config;
mod field;
mod rut;

pub use booking::booking;
pub use check_digit::check_digit;
pub use config::config;
pub use field::field;
pub use rut::rut;

use anyhow::Context;
use chrono::{Local, NaiveDate};

/// Resolve the date used as "today" for birth date checks
///
/// Accepts `yyyy-mm-dd` or `dd/mm/yyyy`; defaults to the local date.
fn resolve_today(arg: Option<&str>) -> anyhow::Result<NaiveDate> {
    let Some(raw) = arg else {
        return Ok(Local::now().date_naive());
    };

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .with_context(|| format!("invalid --today date: {raw} (use yyyy-mm-dd or dd/mm/yyyy)"))
}
