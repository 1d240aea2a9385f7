//! Port traits (interfaces) for external dependencies
//!
//! The validators are pure; the only outward-facing capability the core
//! needs is a way to tell the user what failed. Implementations live in
//! the `adapters` module.

mod notifier;

#[cfg(test)]
pub use notifier::MockNotifier;
pub use notifier::Notifier;
