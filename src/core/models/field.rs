//! Traveler form fields
//!
//! Identifies which input a validation result or issue refers to.

use serde::{Deserialize, Serialize};

/// A field of the per-traveler data-entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Full name
    Name,
    /// Chilean national identity number (RUT)
    NationalId,
    /// Contact email
    Email,
    /// Contact phone
    Phone,
    /// Birth date (`dd/mm/yyyy`)
    BirthDate,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::NationalId,
        Self::Email,
        Self::Phone,
        Self::BirthDate,
    ];

    /// Human-readable label used in messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "full name",
            Self::NationalId => "RUT",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::BirthDate => "birth date",
        }
    }

    /// Whether absent input fails validation for this field
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::NationalId)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::NationalId => write!(f, "national_id"),
            Self::Email => write!(f, "email"),
            Self::Phone => write!(f, "phone"),
            Self::BirthDate => write!(f, "birth_date"),
        }
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "name" | "full_name" => Ok(Self::Name),
            "rut" | "national_id" => Ok(Self::NationalId),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "birth_date" | "birthdate" => Ok(Self::BirthDate),
            _ => Err(format!(
                "Invalid field: {s}. Use: name, rut, email, phone, birth_date"
            )),
        }
    }
}
