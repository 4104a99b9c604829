//! # Entity Worker
//!
//! The `EntityWorker` is the "server" half for a single entity. It owns that entity's state and
//! the receiving end of its mailbox, and processes requests strictly one at a time.

use crate::framework::entity::ActorEntity;
use crate::framework::message::EntityRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Serial processor owning one entity's mutable state.
///
/// **Concurrency Model**:
/// Thousands of workers may run at once, each in its own Tokio task. Within a worker the loop
/// awaits one request, applies it to completion and sends the reply before taking the next
/// one, so the state needs no lock. Requests to different entities run in parallel.
pub struct EntityWorker<T: ActorEntity> {
    receiver: mpsc::UnboundedReceiver<EntityRequest<T>>,
    entity: T,
}

/// Sending side of a worker's mailbox. Cheap to clone.
pub struct WorkerHandle<T: ActorEntity> {
    sender: mpsc::UnboundedSender<EntityRequest<T>>,
}

impl<T: ActorEntity> Clone for WorkerHandle<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> WorkerHandle<T> {
    /// Enqueues a request without waiting. Gives the request back if the worker is gone.
    pub fn forward(&self, request: EntityRequest<T>) -> Result<(), EntityRequest<T>> {
        self.sender.send(request).map_err(|e| e.0)
    }
}

impl<T: ActorEntity> EntityWorker<T> {
    /// Creates a worker with the empty initial state for `id`.
    pub fn new(id: T::Id) -> (Self, WorkerHandle<T>) {
        Self::with_state(T::from_id(id))
    }

    /// Creates a worker around existing state.
    ///
    /// The mailbox is unbounded: the router must never stall on one busy entity.
    pub fn with_state(entity: T) -> (Self, WorkerHandle<T>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { receiver, entity }, WorkerHandle { sender })
    }

    /// Runs the worker's event loop until every handle is dropped.
    pub async fn run(mut self) {
        let entity_id = self.entity.id().clone();
        debug!(%entity_id, "Worker started");

        while let Some(request) = self.receiver.recv().await {
            let EntityRequest {
                entity_id: target,
                command,
                respond_to,
            } = request;

            let reply = if target != entity_id {
                warn!(%entity_id, %target, ?command, "Request routed to the wrong worker");
                self.entity.misrouted(&target)
            } else {
                self.entity.handle(command).await
            };

            // The caller may have timed out already; a late reply is simply discarded.
            let _ = respond_to.send(reply);
        }

        info!(%entity_id, "Worker shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::test_support::{Counter, CounterCommand, CounterReply};
    use tokio::sync::oneshot;

    async fn send(
        handle: &WorkerHandle<Counter>,
        entity_id: u32,
        command: CounterCommand,
    ) -> CounterReply {
        let (respond_to, response) = oneshot::channel();
        handle
            .forward(EntityRequest {
                entity_id,
                command,
                respond_to,
            })
            .unwrap();
        response.await.unwrap()
    }

    #[tokio::test]
    async fn test_worker_applies_commands_in_order() {
        let (worker, handle) = EntityWorker::<Counter>::new(1);
        let task = tokio::spawn(worker.run());

        for _ in 0..5 {
            send(&handle, 1, CounterCommand::Increment).await;
        }
        assert_eq!(send(&handle, 1, CounterCommand::Get).await, CounterReply::Value(5));

        drop(handle);
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_worker_rejects_other_entity_without_mutation() {
        let (worker, handle) = EntityWorker::<Counter>::new(1);
        tokio::spawn(worker.run());

        let reply = send(&handle, 2, CounterCommand::Increment).await;
        assert_eq!(reply, CounterReply::Misrouted(2));
        assert_eq!(send(&handle, 1, CounterCommand::Get).await, CounterReply::Value(0));
    }

    #[tokio::test]
    async fn test_worker_survives_abandoned_reply() {
        let (worker, handle) = EntityWorker::<Counter>::new(1);
        tokio::spawn(worker.run());

        let (respond_to, response) = oneshot::channel();
        drop(response);
        handle
            .forward(EntityRequest {
                entity_id: 1,
                command: CounterCommand::Increment,
                respond_to,
            })
            .unwrap();

        assert_eq!(send(&handle, 1, CounterCommand::Get).await, CounterReply::Value(1));
    }
}
