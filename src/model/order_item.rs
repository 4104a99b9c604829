use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest preparation time assigned to a new item, in minutes.
pub const MIN_PREPARATION_TIME: u64 = 5;
/// Longest preparation time assigned to a new item, in minutes.
pub const MAX_PREPARATION_TIME: u64 = 15;

/// Represents one ordered unit at a table.
///
/// # Actor Framework
/// Items live inside a [`Table`](crate::table_actor::Table), which is driven by an
/// [`EntityWorker`](crate::framework::EntityWorker). Once stored, an item never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub quantity: i32,
    /// Minutes, drawn from `[MIN_PREPARATION_TIME, MAX_PREPARATION_TIME]` at creation.
    pub preparation_time: u64,
    pub created_at: DateTime<Utc>,
}

impl OrderItem {
    /// Creates a new OrderItem stamped with the current time.
    ///
    /// # Arguments
    /// * `id` - Identifier, unique within one table
    /// * `name` - Dish name
    /// * `quantity` - Number of portions
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            preparation_time: random_preparation_time(),
            created_at: Utc::now(),
        }
    }

    /// Materializes a request into a stored item created at `created_at`.
    pub fn from_request(request: &NewOrderItem, created_at: DateTime<Utc>) -> Self {
        Self {
            id: request.id.clone(),
            name: request.name.clone(),
            quantity: request.quantity,
            preparation_time: random_preparation_time(),
            created_at,
        }
    }

    /// Two orders are the same when id, name and quantity match.
    pub fn is_same_order_as(&self, request: &NewOrderItem) -> bool {
        self.id == request.id && self.name == request.name && self.quantity == request.quantity
    }
}

pub fn random_preparation_time() -> u64 {
    rand::rng().random_range(MIN_PREPARATION_TIME..=MAX_PREPARATION_TIME)
}

/// Payload for ordering a new item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub id: String,
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

impl NewOrderItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
        }
    }

    /// Checks the payload rules the table assumes: non-blank id and name, positive quantity.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if self.id.trim().is_empty() {
            errors.push(ValidationError::BlankId);
        }
        if self.name.trim().is_empty() {
            errors.push(ValidationError::BlankName);
        }
        if self.quantity <= 0 {
            errors.push(ValidationError::NonPositiveQuantity(self.quantity));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A rule broken by a [`NewOrderItem`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("id: must not be blank")]
    BlankId,
    #[error("name: must not be blank")]
    BlankName,
    #[error("quantity: must be greater than 0 (got {0})")]
    NonPositiveQuantity(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preparation_time_in_range() {
        for _ in 0..200 {
            let item = OrderItem::new("1", "Pizza", 1);
            assert!((MIN_PREPARATION_TIME..=MAX_PREPARATION_TIME).contains(&item.preparation_time));
        }
    }

    #[test]
    fn test_same_order_ignores_generated_fields() {
        let item = OrderItem::new("1", "Pizza", 2);
        assert!(item.is_same_order_as(&NewOrderItem::new("1", "Pizza", 2)));
        assert!(!item.is_same_order_as(&NewOrderItem::new("1", "Ramen", 2)));
        assert!(!item.is_same_order_as(&NewOrderItem::new("1", "Pizza", 3)));
    }

    #[test]
    fn test_validate_collects_every_violation() {
        assert_eq!(NewOrderItem::new("a", "Pizza", 1).validate(), Ok(()));

        let errors = NewOrderItem::new(" ", "", 0).validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::BlankId,
                ValidationError::BlankName,
                ValidationError::NonPositiveQuantity(0)
            ]
        );
    }

    #[test]
    fn test_json_shape() {
        let request: NewOrderItem = serde_json::from_str(r#"{"id":"1","name":"Pizza"}"#).unwrap();
        assert_eq!(request.quantity, 1);

        let item = OrderItem::from_request(&request, Utc::now());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["preparationTime"], item.preparation_time);
        assert!(json["createdAt"].is_string());
    }
}
