//! Domain models for tourgate
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Field`] - Which traveler input is being validated
//! - [`Rut`] - A checksum-verified national identity number
//! - [`TravelerForm`] / [`TravelerRecord`] - Raw and normalized traveler data
//! - [`BookingForm`] / [`BookingReport`] - Checkout input and gate outcome
//! - [`Issue`] - A problem found by the gate
//! - [`Notice`] - A message for the user
//! - [`Policy`] - Gate configuration

mod booking;
mod field;
mod issue;
mod notice;
mod policy;
mod rut;
mod traveler;

pub use booking::{BookingForm, BookingReport, PackageBooking, PackageReservation};
pub use field::Field;
pub use issue::{Issue, IssueKind};
pub use notice::{Notice, NoticeLevel};
pub use policy::Policy;
pub use rut::{Rut, RutError};
pub use traveler::{TravelerForm, TravelerRecord};
