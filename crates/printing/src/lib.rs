//! Order-to-receipt pipeline.
//!
//! An [`Order`] is an order-type tag plus an ordered list of [`Detail`] lines
//! that reference catalog items by ID. At print time:
//! 1. `ReceiptAggregator` resolves each referenced item's current name and
//!    price and computes the per-line extended price and the running total
//! 2. `PrintDispatcher` hands the finished [`Receipt`] to a [`PrinterSink`]
//!
//! Receipts are never persisted; they live only for the duration of a print
//! call. A line whose item has been deleted fails the whole receipt rather than
//! being skipped.

pub mod dispatcher;
pub mod error;
pub mod order;
pub mod printers;
pub mod receipt;

pub use dispatcher::{PrintDispatcher, RetryPolicy};
pub use error::{PrintError, Result};
pub use order::{
    Detail, InMemoryOrderRepository, Order, OrderRepository, OrderRepositoryExt, OrderType,
};
pub use printers::{InMemoryPrinter, LogPrinter, PrinterError, PrinterSink, SpoolPrinter};
pub use receipt::{Receipt, ReceiptAggregator, ReceiptLine};
