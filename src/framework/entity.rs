//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract between the generic runtime ([`EntityWorker`],
//! [`EntityRouter`], [`Gateway`]) and one kind of per-entity state, such as a restaurant table.
//!
//! The runtime owns the plumbing: mailboxes, lazy worker creation, reply channels and timeouts.
//! The entity owns the business logic: how a single command changes its state and what it
//! answers.
//!
//! We use associated types (`Id`, `Command`, `Reply`) to keep every message strongly typed.
//! A table worker only ever receives table commands, and the compiler enforces that.
//!
//! [`EntityWorker`]: crate::framework::EntityWorker
//! [`EntityRouter`]: crate::framework::EntityRouter
//! [`Gateway`]: crate::framework::Gateway

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// State that lives inside exactly one [`EntityWorker`](crate::framework::EntityWorker).
///
/// # Concurrency
/// `handle` takes `&mut self`. The worker calls it from its own task, one command at a time, so
/// implementations never need a `Mutex` around their state.
#[async_trait]
pub trait ActorEntity: Send + 'static {
    /// Identifier used by the router to find the worker (e.g., a table number).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + 'static;

    /// The closed set of operations this entity understands.
    type Command: Send + Debug + 'static;

    /// The answer produced for every command.
    type Reply: Send + Debug + 'static;

    /// Builds the empty initial state for a freshly referenced entity.
    fn from_id(id: Self::Id) -> Self;

    /// The id this state belongs to.
    fn id(&self) -> &Self::Id;

    /// Applies one command and produces its reply.
    async fn handle(&mut self, command: Self::Command) -> Self::Reply;

    /// Reply for a request that was addressed to `target` but reached this entity.
    ///
    /// Must not touch state.
    fn misrouted(&self, target: &Self::Id) -> Self::Reply;
}
