//! Pure data structures carried by table messages.

pub mod order_item;
pub mod table;

pub use order_item::*;
pub use table::*;
