//! Log-backed notifier
//!
//! Forwards notices to the `log` facade. In the CLI these end up on
//! stderr through `env_logger`.

use log::Level;

use crate::core::models::{Notice, NoticeLevel};
use crate::core::ports::Notifier;

/// Notifier that writes each notice as a log record
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Log level used for a notice level
    #[must_use]
    pub const fn level_for(level: NoticeLevel) -> Level {
        match level {
            NoticeLevel::Info => Level::Info,
            NoticeLevel::Warning => Level::Warn,
            NoticeLevel::Error => Level::Error,
        }
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        log::log!(Self::level_for(notice.level), "{}: {}", notice.title, notice.message);
    }
}
