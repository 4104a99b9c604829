use crate::clients::TableClient;
use crate::framework::FrameworkError;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Runtime settings of the actor system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemConfig {
    /// How long a caller waits for a worker's reply.
    pub ask_timeout: Duration,
    /// Capacity of the router's mailbox. Worker mailboxes are unbounded.
    pub mailbox_capacity: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            ask_timeout: Duration::from_millis(1000),
            mailbox_capacity: 256,
        }
    }
}

/// Orchestrator for the table actors.
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new(SystemConfig::default());
///
/// let item = system
///     .table_client
///     .create(TableId(1), NewOrderItem::new("1", "Pizza", 1))
///     .await;
///
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    /// Client for interacting with the tables. Clone it freely.
    pub table_client: TableClient,

    router_handle: JoinHandle<()>,
}

impl RestaurantSystem {
    /// Spawns the table router. Table workers are created on first use.
    pub fn new(config: SystemConfig) -> Self {
        let (router, table_client) =
            crate::table_actor::new(config.mailbox_capacity, config.ask_timeout);
        let router_handle = tokio::spawn(router.run());
        info!(
            ask_timeout = ?config.ask_timeout,
            mailbox_capacity = config.mailbox_capacity,
            "Restaurant system started"
        );

        Self {
            table_client,
            router_handle,
        }
    }

    /// Gracefully shuts down the router and every table worker.
    ///
    /// The router exits once the last [`TableClient`] clone is dropped, so clones handed out
    /// elsewhere must be dropped before this resolves. It then closes each worker mailbox and
    /// waits for the workers to drain what they already accepted.
    pub async fn shutdown(self) -> Result<(), FrameworkError> {
        info!("Shutting down system...");
        drop(self.table_client);

        if let Err(e) = self.router_handle.await {
            error!(error = ?e, "Router task failed");
            return Err(FrameworkError::TaskFailed(e.to_string()));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
