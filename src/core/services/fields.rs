//! Traveler field validators
//!
//! Pure predicates over raw form input. Optional fields (email, phone,
//! birth date) treat absent input as valid; required fields (name) treat
//! it as invalid.
//!
//! Input is absent when it is `None` or contains only whitespace.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use super::national_id::is_valid_national_id;
use crate::core::models::Field;

/// Letters (including the accented set used in Spanish names), whitespace,
/// hyphens and apostrophes; 2 to 200 characters
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-zÁÉÍÓÚáéíóúÑñÜü\s'-]{2,200}$")
        .expect("name pattern must be a valid regex")
});

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must be a valid regex")
});

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9\s+()-]{8,20}$").expect("phone pattern must be a valid regex")
});

/// `dd/mm/yyyy`, ASCII digits only
static BIRTH_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$")
        .expect("birth date pattern must be a valid regex")
});

/// Trim `value`, returning `None` when nothing remains
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Full name: required, 2 to 200 letters, spaces, hyphens or apostrophes
#[must_use]
pub fn is_valid_name(value: Option<&str>) -> bool {
    non_blank(value).is_some_and(|name| NAME_REGEX.is_match(name))
}

/// Email: optional, `local@domain.tld` shaped
#[must_use]
pub fn is_valid_email(value: Option<&str>) -> bool {
    non_blank(value).is_none_or(|email| EMAIL_REGEX.is_match(email))
}

/// Phone: optional, 8 to 20 characters of digits, spaces, `+`, `-`, `(` or `)`
#[must_use]
pub fn is_valid_phone(value: Option<&str>) -> bool {
    non_blank(value).is_none_or(|phone| PHONE_REGEX.is_match(phone))
}

/// Birth date: optional, a real `dd/mm/yyyy` date no later than today
///
/// "Today" is the local calendar date at the time of the call. Use
/// [`is_valid_birth_date_on`] to pin it.
#[must_use]
pub fn is_valid_birth_date(value: Option<&str>) -> bool {
    is_valid_birth_date_on(value, Local::now().date_naive())
}

/// Birth date validated against an explicit `today`
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tourgate::core::services::is_valid_birth_date_on;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert!(is_valid_birth_date_on(Some("29/02/2020"), today));
/// assert!(is_valid_birth_date_on(Some("15/06/2024"), today));
/// assert!(!is_valid_birth_date_on(Some("16/06/2024"), today));
/// assert!(!is_valid_birth_date_on(Some("29/02/2021"), today));
/// assert!(is_valid_birth_date_on(None, today));
/// ```
#[must_use]
pub fn is_valid_birth_date_on(value: Option<&str>, today: NaiveDate) -> bool {
    non_blank(value).is_none_or(|raw| parse_birth_date(raw).is_some_and(|date| date <= today))
}

/// Parse a `dd/mm/yyyy` string into a calendar date
///
/// Rejects impossible dates such as `31/04/2020` or `29/02/2021`. No
/// "not in the future" check is applied here.
///
/// Years `0000` to `0099` are read literally (`01/01/0050` is the year 50),
/// not shifted into the 1900s.
#[must_use]
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let caps = BIRTH_DATE_REGEX.captures(value.trim())?;
    let day = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let year = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Rewrite a `dd/mm/yyyy` date as ISO `yyyy-mm-dd`
#[must_use]
pub fn birth_date_to_iso(value: &str) -> Option<String> {
    parse_birth_date(value).map(|date| date.format("%Y-%m-%d").to_string())
}

/// Validate a single field value by kind
#[must_use]
pub fn validate_field(field: Field, value: Option<&str>, today: NaiveDate) -> bool {
    match field {
        Field::Name => is_valid_name(value),
        Field::NationalId => is_valid_national_id(value),
        Field::Email => is_valid_email(value),
        Field::Phone => is_valid_phone(value),
        Field::BirthDate => is_valid_birth_date_on(value, today),
    }
}
