//! Compute a RUT check digit

use tourgate::core::services::{compute_check_digit, format_national_id};
use tourgate::output::{CheckDigitResult, OutputMode};

/// Compute the check digit for a body, printing the complete RUT
pub fn check_digit(body: &str, mode: OutputMode) -> anyhow::Result<bool> {
    let digits: String = body.chars().filter(|c| !matches!(c, '.' | '-')).collect();
    let digits = digits.trim();

    let check = compute_check_digit(digits);
    let formatted = check.and_then(|c| format_national_id(&format!("{digits}{c}")));

    let result = CheckDigitResult {
        body: body.to_string(),
        check_digit: check,
        formatted,
    };
    result.render(mode);

    Ok(check.is_some())
}
