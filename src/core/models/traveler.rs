//! Traveler form input and the normalized record sent on reservation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Field;

/// One traveler's form, exactly as entered
///
/// Every field is optional at this stage; missing keys deserialize to
/// `None`. Whether a field may be absent is decided by the validators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelerForm {
    /// Full name
    #[serde(default)]
    pub full_name: Option<String>,
    /// National identity number (RUT)
    #[serde(default)]
    pub national_id: Option<String>,
    /// Birth date as `dd/mm/yyyy`
    #[serde(default)]
    pub birth_date: Option<String>,
    /// Contact phone
    #[serde(default)]
    pub phone: Option<String>,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
}

impl TravelerForm {
    /// Raw value entered for `field`
    #[must_use]
    pub fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.full_name.as_deref(),
            Field::NationalId => self.national_id.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::BirthDate => self.birth_date.as_deref(),
        }
    }
}

/// A validated traveler, normalized for the reservation request
///
/// Strings are trimmed, blank optional fields become `None` and the birth
/// date is carried as a calendar date (ISO `yyyy-mm-dd` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelerRecord {
    /// Full name
    pub full_name: String,
    /// National identity number as entered (trimmed)
    pub national_id: String,
    /// Birth date
    pub birth_date: Option<NaiveDate>,
    /// Contact phone
    pub phone: Option<String>,
    /// Contact email
    pub email: Option<String>,
}
