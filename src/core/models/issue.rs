//! Validation issues raised by the booking gate

use serde::{Deserialize, Serialize};

use super::Field;

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A required field was left blank
    Missing,
    /// A field was filled in but fails validation
    Invalid,
    /// The booking contains no packages
    EmptyBooking,
    /// Passenger count is zero
    InvalidPassengerCount,
    /// More passengers requested than seats available
    NoSeats,
    /// Fewer traveler forms than passengers
    IncompleteTravelers,
}

/// A single problem found while checking a booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Package the issue belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<u64>,
    /// Traveler number within the package (1-based)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traveler: Option<usize>,
    /// Field the issue refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
    /// Issue category
    pub kind: IssueKind,
    /// Human-readable explanation
    pub message: String,
}

impl Issue {
    /// Issue about a single traveler field
    #[must_use]
    pub fn on_field(field: Field, kind: IssueKind) -> Self {
        Self {
            package_id: None,
            traveler: None,
            field: Some(field),
            kind,
            message: field_message(field, kind),
        }
    }

    /// Issue about a whole package or booking
    #[must_use]
    pub fn general(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            package_id: None,
            traveler: None,
            field: None,
            kind,
            message: message.into(),
        }
    }

    /// Attach the package this issue was found in
    #[must_use]
    pub fn in_package(mut self, package_id: u64) -> Self {
        self.package_id = Some(package_id);
        self
    }

    /// Attach the (1-based) traveler number
    #[must_use]
    pub fn for_traveler(mut self, traveler: usize) -> Self {
        self.traveler = Some(traveler);
        self
    }
}

fn field_message(field: Field, kind: IssueKind) -> String {
    match (field, kind) {
        (_, IssueKind::Missing) => format!("{} is required", field.label()),
        (Field::Name, _) => {
            "full name may only contain letters, spaces, hyphens and apostrophes".to_string()
        },
        (Field::NationalId, _) => {
            "RUT is not valid; check the format (e.g. 12.345.678-5) and the check digit"
                .to_string()
        },
        (Field::BirthDate, _) => "birth date is not a valid date or is in the future".to_string(),
        (Field::Email | Field::Phone, _) => format!("{} is not in a valid format", field.label()),
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.package_id, self.traveler) {
            (Some(package), Some(traveler)) => {
                write!(f, "package {package}, traveler {traveler}: {}", self.message)
            },
            (Some(package), None) => write!(f, "package {package}: {}", self.message),
            (None, Some(traveler)) => write!(f, "traveler {traveler}: {}", self.message),
            (None, None) => write!(f, "{}", self.message),
        }
    }
}
