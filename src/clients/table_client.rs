use crate::framework::{Envelope, FrameworkError, Gateway};
use crate::model::{NewOrderItem, OrderItem, TableId};
use crate::table_actor::{Table, TableCommand};
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for interacting with table workers.
///
/// Every method is a bounded-wait call: it resolves to an [`Envelope`] within the gateway's
/// timeout, whatever happens to the worker.
#[derive(Clone)]
pub struct TableClient {
    gateway: Gateway<Table>,
}

impl TableClient {
    pub fn new(gateway: Gateway<Table>) -> Self {
        Self { gateway }
    }

    pub fn timeout(&self) -> Duration {
        self.gateway.timeout()
    }

    /// All items at the table, oldest first. Referencing an unseen table registers it.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self, table_id: TableId) -> Envelope<Vec<OrderItem>> {
        debug!("Sending request");
        self.gateway.call(table_id, TableCommand::GetAllItems).await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, table_id: TableId, item: NewOrderItem) -> Envelope<OrderItem> {
        debug!("Sending request");
        self.gateway.call(table_id, TableCommand::AddItem(item)).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_one(&self, table_id: TableId, item_id: String) -> Envelope<OrderItem> {
        debug!("Sending request");
        self.gateway
            .call(table_id, TableCommand::GetItem(item_id))
            .await
    }

    /// Removes one item. A missing item is still a success.
    #[instrument(skip(self))]
    pub async fn delete(&self, table_id: TableId, item_id: String) -> Envelope<String> {
        debug!("Sending request");
        self.gateway
            .call(table_id, TableCommand::DeleteItem(item_id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, table_id: TableId) -> Envelope<String> {
        debug!("Sending request");
        self.gateway.call(table_id, TableCommand::ClearTable).await
    }

    /// Ids of every table that has a worker, in ascending order.
    #[instrument(skip(self))]
    pub async fn known_tables(&self) -> Result<Vec<TableId>, FrameworkError> {
        debug!("Sending request");
        let mut ids = self.gateway.entity_ids().await?;
        ids.sort_unstable();
        Ok(ids)
    }
}
