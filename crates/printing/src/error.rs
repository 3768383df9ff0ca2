//! Print pipeline error types.

use catalog::RepositoryError;
use common::{ItemId, OrderId};
use thiserror::Error;

use crate::printers::PrinterError;

/// Errors that can occur while building or printing a receipt.
#[derive(Debug, Error)]
pub enum PrintError {
    /// No order exists with the given ID.
    #[error("Order not found: {order_id}")]
    OrderNotFound { order_id: OrderId },

    /// A detail line points at an item that no longer exists.
    #[error("Line {line} references item {item_id}, which no longer exists")]
    DanglingItemReference { item_id: ItemId, line: usize },

    /// A detail line has a zero quantity.
    #[error("Invalid quantity {quantity} on line {line} for item {item_id} (must be > 0)")]
    InvalidQuantity {
        item_id: ItemId,
        line: usize,
        quantity: u32,
    },

    /// A line price or the running total does not fit the amount type.
    #[error("Receipt amount overflowed at line {line}")]
    AmountOverflow { line: usize },

    /// The printer sink rejected the receipt.
    #[error("Print failed: {0}")]
    PrintFailed(#[source] PrinterError),

    /// The backing store failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl PrintError {
    /// Stable identifier for the error kind, safe to branch on.
    pub fn code(&self) -> &'static str {
        match self {
            PrintError::OrderNotFound { .. } => "ORDER_NOT_FOUND",
            PrintError::DanglingItemReference { .. } => "DANGLING_ITEM_REFERENCE",
            PrintError::InvalidQuantity { .. } => "INVALID_QUANTITY",
            PrintError::AmountOverflow { .. } => "AMOUNT_OVERFLOW",
            PrintError::PrintFailed(_) => "PRINT_FAILED",
            PrintError::Repository(_) => "REPOSITORY",
        }
    }
}

/// Convenience type alias for print pipeline results.
pub type Result<T> = std::result::Result<T, PrintError>;
