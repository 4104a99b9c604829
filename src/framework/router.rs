//! # Entity Router
//!
//! The `EntityRouter` maps entity ids to workers. It spawns a worker the first time an id is
//! referenced and forwards every request to it.
//!
//! The id → worker map is plain owned state inside the router task. Only the router's own
//! sequential loop touches it, so no lock is involved.

use crate::framework::entity::ActorEntity;
use crate::framework::message::{EntityRequest, RouterRequest};
use crate::framework::worker::{EntityWorker, WorkerHandle};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

struct WorkerSlot<T: ActorEntity> {
    handle: WorkerHandle<T>,
    task: JoinHandle<()>,
}

/// Supervisor that lazily creates one [`EntityWorker`] per entity id.
///
/// Workers live until the router shuts down. When the last router handle is dropped, the
/// router closes every worker mailbox, waits for the workers to drain, and exits.
pub struct EntityRouter<T: ActorEntity> {
    receiver: mpsc::Receiver<RouterRequest<T>>,
    workers: HashMap<T::Id, WorkerSlot<T>>,
}

impl<T: ActorEntity> EntityRouter<T> {
    /// Creates a router and the sender used to reach it.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the router's own mailbox. When it is full, callers wait
    ///   (within their timeout) until there is space.
    pub fn new(buffer_size: usize) -> (Self, mpsc::Sender<RouterRequest<T>>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let router = Self {
            receiver,
            workers: HashMap::new(),
        };
        (router, sender)
    }

    /// Runs the router's event loop until every sender is dropped.
    pub async fn run(mut self) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Router started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RouterRequest::Route(request) => self.route(entity_type, request),
                RouterRequest::ListEntities { respond_to } => {
                    let ids = self.workers.keys().cloned().collect();
                    let _ = respond_to.send(ids);
                }
            }
        }

        let size = self.workers.len();
        let tasks: Vec<_> = self.workers.drain().map(|(_, slot)| slot.task).collect();
        for task in tasks {
            if let Err(e) = task.await {
                error!(entity_type, error = %e, "Worker task failed");
            }
        }
        info!(entity_type, size, "Router shutdown");
    }

    fn route(&mut self, entity_type: &str, request: EntityRequest<T>) {
        let slot = self
            .workers
            .entry(request.entity_id.clone())
            .or_insert_with_key(|id| {
                let (worker, handle) = EntityWorker::new(id.clone());
                let task = tokio::spawn(worker.run());
                info!(entity_type, entity_id = %id, "Worker created");
                WorkerSlot { handle, task }
            });

        debug!(entity_type, entity_id = %request.entity_id, command = ?request.command, "Forward");
        if let Err(request) = slot.handle.forward(request) {
            // Dropping the request drops its reply channel; the caller sees the failure.
            error!(entity_type, entity_id = %request.entity_id, "Worker is gone, request dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::test_support::{Counter, CounterCommand, CounterReply};
    use tokio::sync::oneshot;

    async fn route(
        router: &mpsc::Sender<RouterRequest<Counter>>,
        entity_id: u32,
        command: CounterCommand,
    ) -> CounterReply {
        let (respond_to, response) = oneshot::channel();
        router
            .send(RouterRequest::Route(EntityRequest {
                entity_id,
                command,
                respond_to,
            }))
            .await
            .unwrap();
        response.await.unwrap()
    }

    async fn list(router: &mpsc::Sender<RouterRequest<Counter>>) -> Vec<u32> {
        let (respond_to, response) = oneshot::channel();
        router
            .send(RouterRequest::ListEntities { respond_to })
            .await
            .unwrap();
        let mut ids = response.await.unwrap();
        ids.sort_unstable();
        ids
    }

    #[tokio::test]
    async fn test_router_creates_workers_lazily() {
        let (router, sender) = EntityRouter::<Counter>::new(8);
        let task = tokio::spawn(router.run());

        assert!(list(&sender).await.is_empty());

        route(&sender, 3, CounterCommand::Increment).await;
        route(&sender, 3, CounterCommand::Increment).await;
        route(&sender, 9, CounterCommand::Increment).await;

        assert_eq!(list(&sender).await, vec![3, 9]);
        assert_eq!(route(&sender, 3, CounterCommand::Get).await, CounterReply::Value(2));
        assert_eq!(route(&sender, 9, CounterCommand::Get).await, CounterReply::Value(1));

        drop(sender);
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_slow_entity_does_not_block_others() {
        let (router, sender) = EntityRouter::<Counter>::new(8);
        tokio::spawn(router.run());

        let slow_sender = sender.clone();
        let slow = tokio::spawn(async move {
            route(
                &slow_sender,
                1,
                CounterCommand::Stall(std::time::Duration::from_millis(300)),
            )
            .await
        });

        let started = std::time::Instant::now();
        assert_eq!(route(&sender, 2, CounterCommand::Increment).await, CounterReply::Value(1));
        assert!(started.elapsed() < std::time::Duration::from_millis(250));

        assert_eq!(slow.await.unwrap(), CounterReply::Value(0));
    }
}
