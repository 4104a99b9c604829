//! Type-safe wrappers around [`Gateway`](crate::framework::Gateway).

pub mod table_client;

pub use table_client::*;
