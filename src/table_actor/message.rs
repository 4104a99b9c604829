//! Commands a table understands and the replies it produces.
//!
//! The gateway retypes a [`TableReply`] into the [`Envelope`] the caller asked for through the
//! `TryFrom` impls below. A reply of the wrong shape is handed back unchanged, and the gateway
//! reports it as an unexpected error.

use super::error::TableError;
use crate::framework::Envelope;
use crate::model::{NewOrderItem, OrderItem};

#[derive(Debug, Clone)]
pub enum TableCommand {
    AddItem(NewOrderItem),
    DeleteItem(String),
    GetItem(String),
    GetAllItems,
    ClearTable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableReply {
    Item(OrderItem),
    Items(Vec<OrderItem>),
    Message(String),
    Rejected(TableError),
}

macro_rules! reply_envelope {
    ($payload:ty => $variant:ident) => {
        impl TryFrom<TableReply> for Envelope<$payload> {
            type Error = TableReply;

            fn try_from(reply: TableReply) -> Result<Self, TableReply> {
                match reply {
                    TableReply::$variant(value) => Ok(Envelope::success(value)),
                    TableReply::Rejected(error) => Ok(Envelope::error(error.to_string())),
                    other => Err(other),
                }
            }
        }
    };
}

reply_envelope!(OrderItem => Item);
reply_envelope!(Vec<OrderItem> => Items);
reply_envelope!(String => Message);
