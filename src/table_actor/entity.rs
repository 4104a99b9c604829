//! ActorEntity implementation for a restaurant table.
//!
//! A [`Table`] holds the open order of one table. The generic
//! [`EntityWorker`](crate::framework::EntityWorker) drives it one command at a time, so every
//! method here has exclusive access to the item map.

use super::error::TableError;
use super::message::{TableCommand, TableReply};
use crate::framework::ActorEntity;
use crate::model::{NewOrderItem, OrderItem, TableId};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Table {
    id: TableId,
    items: HashMap<String, OrderItem>,
    last_created_at: Option<DateTime<Utc>>,
}

impl Table {
    /// Creates a table that already holds `items`.
    pub fn with_items(id: TableId, items: impl IntoIterator<Item = OrderItem>) -> Self {
        let items: HashMap<_, _> = items
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();
        let last_created_at = items.values().map(|item| item.created_at).max();
        Self {
            id,
            items,
            last_created_at,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn add_item(&mut self, request: NewOrderItem) -> TableReply {
        if let Some(existing) = self.items.get(&request.id) {
            if existing.is_same_order_as(&request) {
                info!(table_id = %self.id, item_id = %request.id, "Order already received");
                return TableReply::Item(existing.clone());
            }
            warn!(table_id = %self.id, item_id = %request.id, "ID matches a different OrderItem");
            return TableReply::Rejected(TableError::IdConflict);
        }

        let item = OrderItem::from_request(&request, self.next_timestamp());
        info!(table_id = %self.id, ?request, size = self.items.len() + 1, "Order received");
        self.items.insert(item.id.clone(), item.clone());
        TableReply::Item(item)
    }

    fn delete_item(&mut self, item_id: String) -> TableReply {
        match self.items.remove(&item_id) {
            Some(_) => {
                info!(table_id = %self.id, %item_id, size = self.items.len(), "Deleted item");
                TableReply::Message(format!("Item {item_id} deleted successfully"))
            }
            None => {
                info!(table_id = %self.id, %item_id, "Item not found");
                TableReply::Message(format!("Item {item_id} not found"))
            }
        }
    }

    fn get_item(&self, item_id: String) -> TableReply {
        match self.items.get(&item_id) {
            Some(item) => {
                info!(table_id = %self.id, %item_id, "Retrieve item");
                TableReply::Item(item.clone())
            }
            None => {
                info!(table_id = %self.id, %item_id, "OrderItem not found");
                TableReply::Rejected(TableError::ItemNotFound(item_id))
            }
        }
    }

    fn all_items(&self) -> TableReply {
        let mut items: Vec<OrderItem> = self.items.values().cloned().collect();
        items.sort_by_key(|item| item.created_at);
        info!(table_id = %self.id, size = items.len(), "Retrieve all items");
        TableReply::Items(items)
    }

    fn clear(&mut self) -> TableReply {
        let removed = self.items.len();
        self.items.clear();
        info!(table_id = %self.id, removed, "Table cleared");
        TableReply::Message("Table cleared".to_string())
    }

    /// Creation timestamps are strictly increasing within a table, so listing by `created_at`
    /// reproduces arrival order even when two orders land within the clock's resolution.
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_created_at {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_created_at = Some(stamp);
        stamp
    }
}

#[async_trait]
impl ActorEntity for Table {
    type Id = TableId;
    type Command = TableCommand;
    type Reply = TableReply;

    fn from_id(id: TableId) -> Self {
        Self::with_items(id, [])
    }

    fn id(&self) -> &TableId {
        &self.id
    }

    async fn handle(&mut self, command: TableCommand) -> TableReply {
        match command {
            TableCommand::AddItem(request) => self.add_item(request),
            TableCommand::DeleteItem(item_id) => self.delete_item(item_id),
            TableCommand::GetItem(item_id) => self.get_item(item_id),
            TableCommand::GetAllItems => self.all_items(),
            TableCommand::ClearTable => self.clear(),
        }
    }

    fn misrouted(&self, target: &TableId) -> TableReply {
        warn!(table_id = %self.id, %target, "Message sent to the wrong table");
        TableReply::Rejected(TableError::WrongTable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::from_id(TableId(1))
    }

    fn seeded() -> Table {
        Table::with_items(
            TableId(1),
            [OrderItem::new("1", "Pizza", 1), OrderItem::new("2", "Pasta", 1)],
        )
    }

    #[tokio::test]
    async fn test_add_then_get() {
        let mut table = table();

        let created = table
            .handle(TableCommand::AddItem(NewOrderItem::new("1", "Pizza", 1)))
            .await;
        let TableReply::Item(created) = created else {
            panic!("expected an item, got {created:?}");
        };
        assert_eq!(
            (created.id.as_str(), created.name.as_str(), created.quantity),
            ("1", "Pizza", 1)
        );
        assert!((5..=15).contains(&created.preparation_time));

        let fetched = table.handle(TableCommand::GetItem("1".into())).await;
        assert_eq!(fetched, TableReply::Item(created));
    }

    #[tokio::test]
    async fn test_add_same_order_is_idempotent() {
        let mut table = table();
        let request = NewOrderItem::new("1", "Pizza", 1);

        let first = table.handle(TableCommand::AddItem(request.clone())).await;
        let second = table.handle(TableCommand::AddItem(request)).await;

        assert_eq!(first, second);
        assert_eq!(table.len(), 1);
    }

    #[tokio::test]
    async fn test_add_conflicting_order_keeps_original() {
        let mut table = seeded();
        let before = table.handle(TableCommand::GetItem("1".into())).await;

        let reply = table
            .handle(TableCommand::AddItem(NewOrderItem::new("1", "Ramen", 1)))
            .await;

        assert_eq!(reply, TableReply::Rejected(TableError::IdConflict));
        assert_eq!(table.len(), 2);
        assert_eq!(table.handle(TableCommand::GetItem("1".into())).await, before);
    }

    #[tokio::test]
    async fn test_get_missing_item() {
        let mut table = table();
        let reply = table.handle(TableCommand::GetItem("42".into())).await;
        assert_eq!(
            reply,
            TableReply::Rejected(TableError::ItemNotFound("42".into()))
        );
        assert_eq!(
            TableError::ItemNotFound("42".into()).to_string(),
            "OrderItem with ID 42 not found"
        );
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let mut table = seeded();

        let deleted = table.handle(TableCommand::DeleteItem("1".into())).await;
        let again = table.handle(TableCommand::DeleteItem("1".into())).await;

        assert_eq!(deleted, TableReply::Message("Item 1 deleted successfully".into()));
        assert_eq!(again, TableReply::Message("Item 1 not found".into()));
        assert_eq!(table.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_empty_and_full() {
        let mut full = seeded();
        let mut empty = table();

        for table in [&mut full, &mut empty] {
            let reply = table.handle(TableCommand::ClearTable).await;
            assert_eq!(reply, TableReply::Message("Table cleared".into()));
            assert!(table.is_empty());
        }
    }

    #[tokio::test]
    async fn test_all_items_in_creation_order() {
        let mut table = table();
        for id in ["c", "a", "b", "z", "m"] {
            table
                .handle(TableCommand::AddItem(NewOrderItem::new(id, "Dish", 1)))
                .await;
        }

        let TableReply::Items(items) = table.handle(TableCommand::GetAllItems).await else {
            panic!("expected items");
        };
        let ids: Vec<_> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b", "z", "m"]);
        assert!(items.windows(2).all(|w| w[0].created_at < w[1].created_at));
    }

    #[tokio::test]
    async fn test_misrouted_does_not_touch_state() {
        let table = seeded();
        assert_eq!(
            table.misrouted(&TableId(2)),
            TableReply::Rejected(TableError::WrongTable)
        );
        assert_eq!(table.len(), 2);
    }
}
