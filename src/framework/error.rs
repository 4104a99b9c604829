//! # Framework Errors
//!
//! Failures detected by the runtime itself, outside any entity's business logic. Workers never
//! produce these: only the caller side can tell that a reply did not arrive in time.

use std::time::Duration;

/// Errors that can occur within the actor runtime.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("no reply within {0:?}")]
    Timeout(Duration),
    #[error("Router closed")]
    RouterClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("unexpected reply {0}")]
    UnexpectedReply(String),
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}
