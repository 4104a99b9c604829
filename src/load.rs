//! # Load Generator
//!
//! Simulated diners that exercise the tables through a [`TableClient`]. Each diner loops over a
//! fixed scenario on a random table until it is stopped:
//!
//! 1. order 2-4 items with random ids and names,
//! 2. read the whole table back,
//! 3. read one item, delete one item,
//! 4. clear the table,
//! 5. pause for 100-1000 ms.
//!
//! Diners share the table range, so they regularly collide on a table. A diner that sees an
//! error envelope or an unexpected result logs it at `warn` and carries on.

use crate::clients::TableClient;
use crate::framework::Envelope;
use crate::model::{NewOrderItem, TableId};
use rand::distr::Alphanumeric;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

/// Diners pick tables from `0..TABLE_COUNT`.
pub const TABLE_COUNT: i64 = 200;

/// Most diners that may run at once.
pub const MAX_DINERS: usize = 1000;

/// Starts and stops simulated diners. Cloning shares the same set of diners.
#[derive(Clone)]
pub struct LoadGenerator {
    client: TableClient,
    diners: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl LoadGenerator {
    pub fn new(client: TableClient) -> Self {
        Self {
            client,
            diners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Spawns up to `count` more diners next to the ones already running, never exceeding
    /// [`MAX_DINERS`] in total. Returns how many were started.
    pub async fn start(&self, count: usize) -> usize {
        let mut diners = self.diners.lock().await;
        let first = diners.len();
        let started = count.min(MAX_DINERS.saturating_sub(first));
        for index in first..first + started {
            diners.push(tokio::spawn(dine(self.client.clone(), index)));
        }
        if started < count {
            warn!(requested = count, started, limit = MAX_DINERS, "Mock client limit reached");
        }
        info!(started, running = diners.len(), "Mock clients started");
        started
    }

    /// Aborts every running diner.
    pub async fn stop(&self) {
        let mut diners = self.diners.lock().await;
        let stopped = diners.len();
        for diner in diners.drain(..) {
            diner.abort();
        }
        info!(stopped, "Mock clients stopped");
    }

    pub async fn running(&self) -> usize {
        self.diners
            .lock()
            .await
            .iter()
            .filter(|diner| !diner.is_finished())
            .count()
    }
}

async fn dine(client: TableClient, diner: usize) {
    loop {
        scenario(&client, diner).await;
        tokio::time::sleep(random_pause()).await;
    }
}

async fn scenario(client: &TableClient, diner: usize) {
    let table_id = TableId(rand::rng().random_range(0..TABLE_COUNT));
    let orders = random_orders();
    info!(diner, %table_id, items = orders.len(), "Starting scenario");

    for order in &orders {
        check(diner, table_id, "create", client.create(table_id, order.clone()).await);
    }

    if let Some(items) = check(diner, table_id, "fetch_all", client.fetch_all(table_id).await) {
        if items.len() != orders.len() {
            warn!(
                diner,
                %table_id,
                expected = orders.len(),
                found = items.len(),
                "Table holds a different number of items"
            );
        }
    }

    let (wanted, doomed) = {
        let mut rng = rand::rng();
        (orders.choose(&mut rng).cloned(), orders.choose(&mut rng).cloned())
    };
    if let Some(order) = wanted {
        let reply = client.fetch_one(table_id, order.id.clone()).await;
        if let Some(item) = check(diner, table_id, "fetch_one", reply) {
            if item.id != order.id {
                warn!(
                    diner,
                    %table_id,
                    expected = %order.id,
                    found = %item.id,
                    "Fetched the wrong item"
                );
            }
        }
    }
    if let Some(order) = doomed {
        check(diner, table_id, "delete", client.delete(table_id, order.id).await);
    }

    check(diner, table_id, "clear", client.clear(table_id).await);
}

fn check<T>(diner: usize, table_id: TableId, operation: &str, reply: Envelope<T>) -> Option<T> {
    reply
        .into_result()
        .map_err(|error| warn!(diner, %table_id, operation, %error, "Request failed"))
        .ok()
}

fn random_orders() -> Vec<NewOrderItem> {
    let mut rng = rand::rng();
    let count = rng.random_range(2..=4);
    (0..count)
        .map(|_| {
            let name: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(8)
                .map(char::from)
                .collect();
            NewOrderItem::new(Uuid::new_v4().to_string(), name, 1)
        })
        .collect()
}

fn random_pause() -> Duration {
    Duration::from_millis(rand::rng().random_range(100..=1000))
}
