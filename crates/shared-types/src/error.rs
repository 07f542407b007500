use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown when a login attempt does not match the credential table.
pub const INVALID_CREDENTIALS_MESSAGE: &str =
    "Invalid credentials. Please check your email and password.";

const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Submitted email/password did not match the entry for the selected role.
    InvalidCredentials,
    /// The deferred login could not be completed (transport failure).
    Internal,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::InvalidCredentials => write!(f, "InvalidCredentials"),
            AppErrorKind::Internal => write!(f, "Internal"),
        }
    }
}

/// Structured application error used across server and client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn invalid_credentials() -> Self {
        Self {
            kind: AppErrorKind::InvalidCredentials,
            message: INVALID_CREDENTIALS_MESSAGE.to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Internal,
            message: message.into(),
        }
    }

    /// Parse an AppError from a ServerFnError message string (client-side).
    ///
    /// `ServerFnError::to_string()` wraps the payload like:
    ///   `error running server function: {"kind":"InvalidCredentials",...} (details: None)`
    /// This method extracts the embedded JSON and parses it.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end > start {
            serde_json::from_str(error_message.get(start..=end)?).ok()
        } else {
            None
        }
    }

    /// Recover the AppError carried by a ServerFnError string, or wrap the
    /// raw text as an internal error when nothing structured is embedded.
    pub fn from_server_error_or_internal(error_message: &str) -> Self {
        Self::from_server_error(error_message)
            .unwrap_or_else(|| Self::internal(FALLBACK_MESSAGE))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
