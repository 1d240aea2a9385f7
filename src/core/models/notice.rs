//! User-facing notices
//!
//! What the gate hands to a [`Notifier`](crate::core::ports::Notifier):
//! the toast/alert payload, independent of how it is shown.

use serde::{Deserialize, Serialize};

use super::Issue;

/// How prominently a notice should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Informational
    #[default]
    Info,
    /// Something worth a second look
    Warning,
    /// Blocks submission
    Error,
}

impl std::fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Short heading
    pub title: String,
    /// Body text
    pub message: String,
}

impl Notice {
    /// Build an error notice
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    /// Build an informational notice
    #[must_use]
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&Issue> for Notice {
    fn from(issue: &Issue) -> Self {
        Self::error(issue.to_string())
    }
}
