//! National identity number (RUT) checksum
//!
//! A RUT is a run of decimal digits (the body) followed by one check
//! character. The check character is a modulo-11 digest of the body with
//! weights cycling `2, 3, 4, 5, 6, 7` from the least significant digit:
//!
//! ```text
//! 12.345.678-5
//! body:    1 2 3 4 5 6 7 8
//! weights: 3 2 7 6 5 4 3 2   (right to left: 2,3,4,5,6,7,2,3)
//! sum = 138, 138 mod 11 = 6, 11 - 6 = 5  ->  '5'
//! ```
//!
//! A computed value of 11 maps to `'0'` and 10 maps to `'K'`.
//!
//! Every function here is total: malformed input yields `false` or `None`,
//! never a panic.

/// Multipliers applied from the rightmost body digit, repeating
const WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];

const MODULUS: u32 = 11;

/// Strip `.` and `-` separators, trim surrounding whitespace and uppercase
///
/// # Examples
///
/// ```
/// use tourgate::core::services::normalize_national_id;
///
/// assert_eq!(normalize_national_id(" 12.345.678-k "), "12345678K");
/// ```
#[must_use]
pub fn normalize_national_id(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !matches!(c, '.' | '-')).collect();
    stripped.trim().to_uppercase()
}

/// Compute the expected check character for a digit body
///
/// Returns `None` when `body` is empty or contains anything other than
/// ASCII digits.
///
/// # Examples
///
/// ```
/// use tourgate::core::services::compute_check_digit;
///
/// assert_eq!(compute_check_digit("12345678"), Some('5'));
/// assert_eq!(compute_check_digit("6"), Some('K'));
/// assert_eq!(compute_check_digit("0"), Some('0'));
/// assert_eq!(compute_check_digit("12a"), None);
/// ```
#[must_use]
pub fn compute_check_digit(body: &str) -> Option<char> {
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Reducing on every step keeps arbitrarily long bodies from overflowing
    let remainder = body
        .bytes()
        .rev()
        .zip(WEIGHTS.iter().cycle())
        .fold(0, |acc, (digit, weight)| (acc + u32::from(digit - b'0') * weight) % MODULUS);

    match MODULUS - remainder {
        11 => Some('0'),
        10 => Some('K'),
        n => char::from_digit(n, 10),
    }
}

/// Split a raw identifier into its normalized body and check character
///
/// Only the structural rules are applied here (length, digit body); the
/// checksum itself is not verified.
#[must_use]
pub fn split_national_id(raw: &str) -> Option<(String, char)> {
    let mut normalized = normalize_national_id(raw);
    if normalized.chars().count() < 2 {
        return None;
    }

    let check = normalized.pop()?;
    if !normalized.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some((normalized, check))
}

/// Check whether `raw` is a well-formed RUT with a matching check character
///
/// Separators (`.` and `-`) may appear anywhere and the check character is
/// case-insensitive. Absent input is invalid.
///
/// # Examples
///
/// ```
/// use tourgate::core::services::is_valid_national_id;
///
/// assert!(is_valid_national_id(Some("12.345.678-5")));
/// assert!(is_valid_national_id(Some("6-k")));
/// assert!(!is_valid_national_id(Some("12345678-4")));
/// assert!(!is_valid_national_id(None));
/// ```
#[must_use]
pub fn is_valid_national_id(raw: Option<&str>) -> bool {
    raw.and_then(split_national_id)
        .is_some_and(|(body, check)| compute_check_digit(&body) == Some(check))
}

/// Render a valid RUT in display form (`12.345.678-5`)
///
/// Returns `None` when `raw` does not validate.
#[must_use]
pub fn format_national_id(raw: &str) -> Option<String> {
    let (body, check) = split_national_id(raw)?;
    if compute_check_digit(&body) != Some(check) {
        return None;
    }
    Some(format!("{}-{check}", group_thousands(&body)))
}

/// Insert a `.` between every group of three digits, counting from the right
pub(crate) fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}
