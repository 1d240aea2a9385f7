//! Core domain logic for tourgate
//!
//! This module contains pure business logic with no I/O dependencies.
//! The one external interaction (notifying the user) is abstracted
//! through a port trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Field, Rut, TravelerForm, BookingForm, Issue)
//! - `services/` - Validators and the booking gate
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
