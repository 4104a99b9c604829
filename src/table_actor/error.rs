//! Error types for the Table actor.

use thiserror::Error;

/// Errors a table worker reports for a single request.
///
/// None of these ever escape the worker as a panic; they travel back in the reply.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    /// The id is already used by an item with a different name or quantity.
    #[error("ID matches a different OrderItem")]
    IdConflict,

    /// The requested item is not at this table.
    #[error("OrderItem with ID {0} not found")]
    ItemNotFound(String),

    /// The request was addressed to another table.
    #[error("Message sent to the wrong table")]
    WrongTable,
}
