//! # Mock Router & Testing Guide
//!
//! [`MockRouter<T>`] stands in for a real [`EntityRouter`](crate::framework::EntityRouter). It
//! accepts the same `RouterRequest<T>` messages, but it answers from a queue of scripted
//! expectations instead of spawning workers. This makes the failure modes of the
//! [`Gateway`] deterministic. Those failures are hard to provoke with real workers: a worker
//! that never answers, a dropped reply channel, or a reply of the wrong shape.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockRouter | Real router + workers |
//! |---------|------------|------------------------|
//! | **State** | None (scripted replies) | Real per-entity state |
//! | **Use Case** | Gateway/client error paths | Business logic, full system |
//! | **Timeouts** | `never_reply()` | Requires a stalled worker |
//!
//! ## Example
//!
//! ```ignore
//! let mut mock = MockRouter::<Table>::new();
//! mock.expect_route(TableId(1)).never_reply();
//!
//! let client = TableClient::new(mock.gateway(Duration::from_millis(20)));
//! let reply = client.fetch_all(TableId(1)).await;
//! assert_eq!(reply, Envelope::error(TIMEOUT_MESSAGE));
//! mock.verify();
//! ```

use crate::framework::entity::ActorEntity;
use crate::framework::gateway::Gateway;
use crate::framework::message::{Response, RouterRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Outcome<T: ActorEntity> {
    Reply(T::Reply),
    NeverReply,
    DropReply,
}

struct Expectation<T: ActorEntity> {
    entity_id: T::Id,
    outcome: Outcome<T>,
}

/// A scripted router with expectation tracking.
///
/// Requests are matched against expectations in FIFO order. A request for an id other than the
/// next expected one, or one that arrives when the queue is empty, fails the mock. The failure
/// is reported by [`MockRouter::verify`].
pub struct MockRouter<T: ActorEntity> {
    sender: mpsc::Sender<RouterRequest<T>>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    failures: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockRouter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockRouter<T> {
    /// Creates a mock router with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RouterRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::<Expectation<T>>::new()));
        let failures = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let failures_clone = failures.clone();

        let handle = tokio::spawn(async move {
            // Reply channels for `never_reply` stay open until the mock is dropped.
            let mut parked: Vec<Response<T::Reply>> = Vec::new();

            while let Some(request) = receiver.recv().await {
                let request = match request {
                    RouterRequest::Route(request) => request,
                    RouterRequest::ListEntities { .. } => {
                        failures_clone
                            .lock()
                            .unwrap()
                            .push("unexpected ListEntities request".to_string());
                        continue;
                    }
                };

                let expectation = expectations_clone.lock().unwrap().pop_front();
                match expectation {
                    Some(exp) if exp.entity_id == request.entity_id => match exp.outcome {
                        Outcome::Reply(reply) => {
                            let _ = request.respond_to.send(reply);
                        }
                        Outcome::NeverReply => parked.push(request.respond_to),
                        Outcome::DropReply => drop(request.respond_to),
                    },
                    Some(exp) => failures_clone.lock().unwrap().push(format!(
                        "expected request for {}, got {}",
                        exp.entity_id, request.entity_id
                    )),
                    None => failures_clone.lock().unwrap().push(format!(
                        "unexpected request for {}: {:?}",
                        request.entity_id, request.command
                    )),
                }
            }
        });

        Self {
            sender,
            expectations,
            failures,
            _handle: handle,
        }
    }

    /// Returns a gateway wired to this mock.
    pub fn gateway(&self, timeout: Duration) -> Gateway<T> {
        Gateway::new(self.sender.clone(), timeout)
    }

    /// Expects a routed request for `entity_id`.
    pub fn expect_route(&mut self, entity_id: T::Id) -> RouteExpectationBuilder<T> {
        RouteExpectationBuilder {
            entity_id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met and nothing unexpected arrived.
    pub fn verify(&self) {
        let failures = self.failures.lock().unwrap();
        if !failures.is_empty() {
            panic!("Mock router received unexpected requests: {failures:?}");
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for routed-request expectations.
pub struct RouteExpectationBuilder<T: ActorEntity> {
    entity_id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> RouteExpectationBuilder<T> {
    /// Answers with `reply`, as a worker would.
    pub fn reply(self, reply: T::Reply) {
        self.push(Outcome::Reply(reply));
    }

    /// Keeps the reply channel open without answering, so the caller times out.
    pub fn never_reply(self) {
        self.push(Outcome::NeverReply);
    }

    /// Drops the reply channel, as a crashed worker would.
    pub fn drop_reply(self) {
        self.push(Outcome::DropReply);
    }

    fn push(self, outcome: Outcome<T>) {
        self.expectations.lock().unwrap().push_back(Expectation {
            entity_id: self.entity_id,
            outcome,
        });
    }
}
