//! # Request Gateway
//!
//! The caller-facing half of the runtime. A [`Gateway`] turns a message send into an awaitable
//! call. It creates a one-shot reply channel per call, hands the request to the router, and
//! waits for the reply under a timer.
//!
//! Whichever comes first, the reply or the timer, decides the outcome. When the timer wins, the
//! receiver is dropped together with the timed-out future, so a reply that arrives later is
//! discarded by the worker's `send`.

use crate::framework::entity::ActorEntity;
use crate::framework::envelope::Envelope;
use crate::framework::error::FrameworkError;
use crate::framework::message::{EntityRequest, RouterRequest};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{error, warn};

/// A cloneable, bounded-wait client for an [`EntityRouter`](crate::framework::EntityRouter).
pub struct Gateway<T: ActorEntity> {
    router: mpsc::Sender<RouterRequest<T>>,
    timeout: Duration,
}

impl<T: ActorEntity> Clone for Gateway<T> {
    fn clone(&self) -> Self {
        Self {
            router: self.router.clone(),
            timeout: self.timeout,
        }
    }
}

impl<T: ActorEntity> Gateway<T> {
    pub fn new(router: mpsc::Sender<RouterRequest<T>>, timeout: Duration) -> Self {
        Self { router, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends `command` to `entity_id` and returns the reply as the envelope the caller expects.
    ///
    /// Timeouts, closed channels and reply variants that do not fit `Envelope<R>` all come back
    /// as error envelopes.
    pub async fn call<R>(&self, entity_id: T::Id, command: T::Command) -> Envelope<R>
    where
        Envelope<R>: TryFrom<T::Reply, Error = T::Reply>,
    {
        match self.ask(entity_id.clone(), command).await {
            Ok(reply) => Envelope::try_from(reply).unwrap_or_else(|other| {
                error!(%entity_id, reply = ?other, "Reply does not match the expected payload");
                FrameworkError::UnexpectedReply(format!("{other:?}")).into()
            }),
            Err(e @ FrameworkError::Timeout(_)) => {
                warn!(%entity_id, timeout = ?self.timeout, "Timeout when asking");
                e.into()
            }
            Err(e) => {
                error!(%entity_id, error = %e, "Unexpected error");
                e.into()
            }
        }
    }

    /// Sends `command` and waits for the raw reply, bounded by the gateway timeout.
    pub async fn ask(
        &self,
        entity_id: T::Id,
        command: T::Command,
    ) -> Result<T::Reply, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        let request = RouterRequest::Route(EntityRequest {
            entity_id,
            command,
            respond_to,
        });
        self.exchange(request, response).await
    }

    /// Lists the ids of every entity that currently has a worker.
    pub async fn entity_ids(&self) -> Result<Vec<T::Id>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.exchange(RouterRequest::ListEntities { respond_to }, response)
            .await
    }

    async fn exchange<V>(
        &self,
        request: RouterRequest<T>,
        response: oneshot::Receiver<V>,
    ) -> Result<V, FrameworkError> {
        let round_trip = async {
            self.router
                .send(request)
                .await
                .map_err(|_| FrameworkError::RouterClosed)?;
            response.await.map_err(|_| FrameworkError::ActorDropped)
        };

        tokio::time::timeout(self.timeout, round_trip)
            .await
            .map_err(|_| FrameworkError::Timeout(self.timeout))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::envelope::TIMEOUT_MESSAGE;
    use crate::framework::router::EntityRouter;
    use crate::framework::test_support::{Counter, CounterCommand};

    fn start(timeout: Duration) -> Gateway<Counter> {
        let (router, sender) = EntityRouter::<Counter>::new(8);
        tokio::spawn(router.run());
        Gateway::new(sender, timeout)
    }

    #[tokio::test]
    async fn test_call_returns_typed_envelope() {
        let gateway = start(Duration::from_secs(1));

        let first: Envelope<u64> = gateway.call(1, CounterCommand::Increment).await;
        let label: Envelope<String> = gateway.call(1, CounterCommand::Label).await;

        assert_eq!(first, Envelope::success(1));
        assert_eq!(label, Envelope::success("counter-1".to_string()));
    }

    #[tokio::test]
    async fn test_type_mismatch_becomes_error_envelope() {
        let gateway = start(Duration::from_secs(1));

        let wrong: Envelope<String> = gateway.call(1, CounterCommand::Get).await;

        match wrong {
            Envelope::Error(message) => {
                assert!(message.starts_with("Unexpected error: "), "{message}")
            }
            other => panic!("expected an error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_slow_reply_times_out() {
        let gateway = start(Duration::from_millis(50));

        let reply: Envelope<u64> = gateway
            .call(1, CounterCommand::Stall(Duration::from_millis(500)))
            .await;
        assert_eq!(reply, Envelope::error(TIMEOUT_MESSAGE));

        // The late reply is discarded and the worker keeps serving.
        let gateway = Gateway::new(gateway.router.clone(), Duration::from_secs(2));
        let after: Envelope<u64> = gateway.call(1, CounterCommand::Increment).await;
        assert_eq!(after, Envelope::success(1));
    }

    #[tokio::test]
    async fn test_closed_router_is_unexpected() {
        let (router, sender) = EntityRouter::<Counter>::new(8);
        drop(router);
        let gateway = Gateway::new(sender, Duration::from_secs(1));

        let reply: Envelope<u64> = gateway.call(1, CounterCommand::Get).await;
        assert_eq!(reply, Envelope::error("Unexpected error: Router closed"));
    }
}
