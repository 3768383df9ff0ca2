//! Printer that writes receipts to the log.

use async_trait::async_trait;

use super::{PrinterError, PrinterSink};
use crate::receipt::Receipt;

/// Emits each receipt as a structured log event.
///
/// Used when no printer device is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPrinter;

#[async_trait]
impl PrinterSink for LogPrinter {
    async fn send(&self, receipt: &Receipt) -> Result<(), PrinterError> {
        tracing::info!(
            order_type = %receipt.order_type(),
            total_price = %receipt.total_price(),
            receipt = %receipt.render_text(),
            "receipt printed to log"
        );
        Ok(())
    }
}
