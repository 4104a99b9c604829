//! # Generic Messages
//!
//! Message types exchanged between the [`Gateway`](crate::framework::Gateway), the
//! [`EntityRouter`](crate::framework::EntityRouter) and each
//! [`EntityWorker`](crate::framework::EntityWorker).

use crate::framework::entity::ActorEntity;
use tokio::sync::oneshot;

/// Type alias for the one-shot reply channel created per call.
pub type Response<T> = oneshot::Sender<T>;

/// A single command addressed to one entity.
///
/// `respond_to` belongs to the original caller. The router moves the whole request into the
/// worker's mailbox unchanged, so the worker answers the caller directly and the router stays an
/// invisible hop.
#[derive(Debug)]
pub struct EntityRequest<T: ActorEntity> {
    pub entity_id: T::Id,
    pub command: T::Command,
    pub respond_to: Response<T::Reply>,
}

/// Everything the router's mailbox accepts.
#[derive(Debug)]
pub enum RouterRequest<T: ActorEntity> {
    /// Forward to the worker for `entity_id`, creating it on first reference.
    Route(EntityRequest<T>),
    /// Report the ids of every entity that has a worker.
    ListEntities { respond_to: Response<Vec<T::Id>> },
}
