//! In-memory notifier
//!
//! Collects notices instead of showing them. Used by the CLI to render
//! notices alongside a result, and by tests to assert on them.

use std::sync::{Mutex, PoisonError};

use crate::core::models::Notice;
use crate::core::ports::Notifier;

/// Notifier that records every notice it receives
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    /// Create an empty notifier
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the notices received so far
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Remove and return the notices received so far
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of notices received
    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no notice has been received
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice.clone());
    }
}
