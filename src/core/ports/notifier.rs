//! Notification port
//!
//! Defines how the gate reports problems to the user.

use crate::core::models::Notice;

/// Notification capability (toast, alert, log line, ...)
///
/// Implementations decide how a notice is shown. They must not fail:
/// a notice that cannot be delivered is dropped.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Show a notice to the user
    fn notify(&self, notice: &Notice);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice);
    }
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice);
    }
}
