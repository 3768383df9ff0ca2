//! Printer sinks that accept finished receipts.

pub mod log;
pub mod memory;
pub mod spool;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::receipt::Receipt;

pub use log::LogPrinter;
pub use memory::InMemoryPrinter;
pub use spool::SpoolPrinter;

/// Errors reported by a printer sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrinterError {
    /// The printer is not reachable.
    #[error("Printer offline: {0}")]
    Offline(String),

    /// Writing to the printer failed.
    #[error("Printer I/O error: {0}")]
    Io(String),
}

/// Opaque receipt printer.
///
/// The pipeline only needs to hand over a finished receipt; how it reaches
/// paper is up to the implementation.
#[async_trait]
pub trait PrinterSink: Send + Sync {
    /// Sends a receipt to the printer.
    async fn send(&self, receipt: &Receipt) -> Result<(), PrinterError>;
}

#[async_trait]
impl<P: PrinterSink + ?Sized> PrinterSink for Arc<P> {
    async fn send(&self, receipt: &Receipt) -> Result<(), PrinterError> {
        (**self).send(receipt).await
    }
}
