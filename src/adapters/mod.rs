//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `logging/` - Notifier writing through the `log` facade
//! - `memory/` - Notifier collecting notices in memory
//! - `json/` - Booking form files

pub mod json;
pub mod logging;
pub mod memory;

pub use json::{BookingFileError, load_booking, parse_booking};
pub use logging::LogNotifier;
pub use memory::MemoryNotifier;
