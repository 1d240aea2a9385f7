//! Validate a booking file

use std::path::Path;

use tourgate::adapters::{LogNotifier, load_booking};
use tourgate::core::models::Policy;
use tourgate::core::services::Gate;
use tourgate::output::{BookingResult, OutputMode};

use super::resolve_today;

/// Check every package and traveler in a booking file
pub fn booking(
    file: &Path,
    policy: Policy,
    today: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<bool> {
    let today = resolve_today(today)?;
    let form = load_booking(file)?;

    let gate = Gate::new(LogNotifier, policy);
    log::debug!("require_phone={}", gate.policy().require_phone);
    let report = gate.check_booking(&form, today);
    let passed = report.passed;

    BookingResult::new(report, form.packages.len()).render(mode);

    Ok(passed)
}
