//! Business logic services
//!
//! Pure validation logic that operates on raw input and domain models.
//! Only [`Gate`] talks to the outside world, and only through the
//! [`Notifier`](crate::core::ports::Notifier) port.
//!
//! - [`national_id`] - RUT checksum
//! - [`fields`] - Name, email, phone and birth date predicates
//! - [`booking`] - Traveler and package checks before reservation
//! - [`gate`] - Booking checks wired to a notifier

pub mod booking;
pub mod fields;
pub mod gate;
pub mod national_id;

pub use booking::{contact_phone, validate_booking, validate_traveler};
pub use fields::{
    birth_date_to_iso, is_valid_birth_date, is_valid_birth_date_on, is_valid_email,
    is_valid_name, is_valid_phone, non_blank, parse_birth_date, validate_field,
};
pub use gate::Gate;
pub use national_id::{
    compute_check_digit, format_national_id, is_valid_national_id, normalize_national_id,
    split_national_id,
};
