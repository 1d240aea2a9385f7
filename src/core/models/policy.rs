//! Validation policy
//!
//! Knobs that change which fields the booking gate treats as required.

use serde::{Deserialize, Serialize};

/// Booking gate policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Reject travelers without a phone number
    ///
    /// The phone validator itself treats absent input as valid; this flag
    /// adds a presence check on top.
    #[serde(default)]
    pub require_phone: bool,
}
