//! Admin views: local state over the API client.
//!
//! Each view owns its data and refreshes it from the backend after every
//! successful change. Actions return a [`Notice`] for the user; on failure the
//! view's data is left as it was.

pub mod attendance;
pub mod dashboard;
pub mod reports;
pub mod workers;

use std::fmt;

use crate::client::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message for the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Error notice with the backend's message, or `fallback` if it sent none.
    pub fn from_client_error(err: &ClientError, fallback: &str) -> Self {
        tracing::warn!(error = %err, "API request failed");
        Self::error(err.user_message(fallback))
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NoticeKind::Success => write!(f, "{}", self.message),
            NoticeKind::Error => write!(f, "error: {}", self.message),
        }
    }
}
