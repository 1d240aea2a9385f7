//! Booking form and the gate's report
//!
//! A booking groups one entry per cart package. Each entry says how many
//! passengers travel and carries one traveler form per passenger.

use serde::{Deserialize, Serialize};

use super::{Issue, TravelerForm, TravelerRecord};

const fn default_passengers() -> u32 {
    1
}

/// One cart package with its traveler forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageBooking {
    /// Catalog package ID
    pub package_id: u64,
    /// Package display name
    #[serde(default)]
    pub package_name: String,
    /// Seats still available for this package
    pub available_seats: u32,
    /// Number of passengers requested
    #[serde(default = "default_passengers")]
    pub passengers: u32,
    /// Traveler forms, one per passenger
    #[serde(default)]
    pub travelers: Vec<TravelerForm>,
}

/// Everything submitted at checkout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    /// Packages in the cart
    #[serde(default)]
    pub packages: Vec<PackageBooking>,
    /// Phone of the signed-in account, used when no traveler phone is given
    #[serde(default)]
    pub account_phone: Option<String>,
}

/// Validated travelers for one package, ready to reserve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageReservation {
    /// Catalog package ID
    pub package_id: u64,
    /// Package display name
    pub package_name: String,
    /// Number of passengers
    pub passengers: u32,
    /// Normalized travelers
    pub travelers: Vec<TravelerRecord>,
}

/// Outcome of checking a booking form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingReport {
    /// Whether the booking may be submitted
    pub passed: bool,
    /// Problems found, in form order
    pub issues: Vec<Issue>,
    /// Packages that passed, normalized
    pub packages: Vec<PackageReservation>,
    /// Phone to attach to the reservation
    pub contact_phone: Option<String>,
}
