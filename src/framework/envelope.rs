//! # Response Envelope
//!
//! Every operation answers with an [`Envelope`]: either a value or an error message. Because it is
//! a two-variant enum, an envelope with neither part set cannot be built.
//!
//! On the wire it is `{"value": ...}` or `{"error": "..."}`.

use crate::framework::error::FrameworkError;
use serde::{Deserialize, Serialize};

/// Message returned when the gateway gives up waiting for a reply.
pub const TIMEOUT_MESSAGE: &str = "Your request Timed out, please try again";

/// Uniform success-or-error result of an entity operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Envelope<T> {
    #[serde(rename = "value")]
    Success(T),
    #[serde(rename = "error")]
    Error(String),
}

impl<T> Envelope<T> {
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Collapses the envelope into a single value.
    pub fn fold<V>(self, on_success: impl FnOnce(T) -> V, on_error: impl FnOnce(String) -> V) -> V {
        match self {
            Self::Success(value) => on_success(value),
            Self::Error(message) => on_error(message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        match self {
            Self::Success(value) => Envelope::Success(f(value)),
            Self::Error(message) => Envelope::Error(message),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        self.fold(Ok, Err)
    }
}

impl<T> From<FrameworkError> for Envelope<T> {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::Timeout(_) => Self::error(TIMEOUT_MESSAGE),
            other => Self::error(format!("Unexpected error: {other}")),
        }
    }
}
