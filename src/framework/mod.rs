//! Generic entity-actor runtime.
//!
//! This module provides the building blocks for keeping many independent pieces of mutable
//! state behind message passing: one worker per entity, a router that creates workers on
//! demand, and a gateway that turns sends into bounded-wait calls.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that per-entity state implements to be driven by a worker
//! - [`EntityWorker`] - Serial processor owning one entity's state
//! - [`EntityRouter`] - Lazily maps entity ids to workers
//! - [`Gateway`] - Call/response façade with timeout and error translation
//! - [`Envelope`] - Success-or-error result of every call
//! - [`FrameworkError`] - Runtime failures (timeout, closed channels, unexpected replies)
//!
//! # Testing
//!
//! See [`mock`] module for a scripted router that exercises gateway failure paths.

pub mod entity;
pub mod envelope;
pub mod error;
pub mod gateway;
pub mod message;
pub mod mock;
pub mod router;
pub mod worker;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export core types for convenience
pub use entity::ActorEntity;
pub use envelope::{Envelope, TIMEOUT_MESSAGE};
pub use error::FrameworkError;
pub use gateway::Gateway;
pub use message::{EntityRequest, Response, RouterRequest};
pub use router::EntityRouter;
pub use worker::{EntityWorker, WorkerHandle};
