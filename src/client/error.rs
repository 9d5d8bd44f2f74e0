use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to the WageFlow API
#[derive(Error, Debug)]
pub enum ClientError {
    /// Request never produced a usable response
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Base URL could not be parsed
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// API answered with a non-success status
    #[error("API error ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Api {
        status: StatusCode,
        detail: Option<String>,
    },
}

impl ClientError {
    /// Message from the backend payload, if it sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// What a view shows: the backend's own words, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

/// Pulls `detail` (or `message`) out of an error body.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["detail", "message"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}
