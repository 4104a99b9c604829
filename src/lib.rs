//! # Table Actors
//!
//! > **Per-table actors behind a bounded-wait gateway.**
//!
//! Each restaurant table is an isolated piece of mutable state owned by its own Tokio task. A
//! router creates the task the first time a table is referenced, and callers reach it through a
//! gateway that always answers within a timeout.
//!
//! ## Core Concepts
//!
//! ### Generics: `EntityWorker<T: ActorEntity>`
//! The worker loop, the router and the gateway are written once, for any
//! [`ActorEntity`](framework::ActorEntity). [`Table`](table_actor::Table) is the only entity in
//! this crate; the framework tests drive a small counter entity instead.
//!
//! ### Envelopes instead of panics
//! Every call resolves to an [`Envelope`](framework::Envelope): a value or an error message.
//! Timeouts, dead channels and mistyped replies become error envelopes in the gateway.
//!
//! ### Concurrency Model
//! Each worker handles one message at a time, so a table never needs a lock. Different tables
//! run in parallel. The router only forwards; worker mailboxes are unbounded, so a busy table
//! never stalls the router.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Key items**: [`EntityWorker`](framework::EntityWorker),
//!   [`EntityRouter`](framework::EntityRouter), [`Gateway`](framework::Gateway),
//!   [`MockRouter`](framework::mock::MockRouter).
//!
//! ### 2. The Domain ([`model`], [`table_actor`])
//! - [`OrderItem`](model::OrderItem) values and the [`Table`](table_actor::Table) entity.
//!
//! ### 3. The Interface ([`clients`], [`server`])
//! - [`TableClient`](clients::TableClient) wraps the gateway with one method per operation.
//! - [`server`] exposes it over HTTP.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`], [`load`])
//! - [`RestaurantSystem`](lifecycle::RestaurantSystem) starts and stops the router.
//! - [`LoadGenerator`](load::LoadGenerator) runs simulated diners against the tables.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --port 8080
//! curl -X POST localhost:8080/table/1 -H 'content-type: application/json' \
//!      -d '{"id":"1","name":"Pizza","quantity":1}'
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod load;
pub mod model;
pub mod server;
pub mod table_actor;
