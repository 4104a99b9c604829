//! Table-specific entity logic and wiring.

pub mod entity;
pub mod error;
pub mod message;

pub use entity::Table;
pub use error::*;
pub use message::{TableCommand, TableReply};

use crate::clients::TableClient;
use crate::framework::{EntityRouter, Gateway};
use std::time::Duration;

/// Creates the table router and a client bound to it.
///
/// The router is not started; the caller spawns [`EntityRouter::run`].
pub fn new(mailbox_capacity: usize, ask_timeout: Duration) -> (EntityRouter<Table>, TableClient) {
    let (router, sender) = EntityRouter::new(mailbox_capacity);
    let client = TableClient::new(Gateway::new(sender, ask_timeout));
    (router, client)
}
