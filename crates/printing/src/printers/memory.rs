//! In-memory printer for tests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{PrinterError, PrinterSink};
use crate::receipt::Receipt;

#[derive(Debug, Default)]
struct InMemoryPrinterState {
    printed: Vec<Receipt>,
    attempts: u32,
    fail_on_send: bool,
    failures_remaining: u32,
}

/// Records every receipt it is sent.
///
/// Can be told to fail every send, or only the next few, to exercise error
/// and retry paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPrinter {
    state: Arc<RwLock<InMemoryPrinterState>>,
}

impl InMemoryPrinter {
    /// Creates a new in-memory printer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the printer to fail every send.
    pub async fn set_fail_on_send(&self, fail: bool) {
        self.state.write().await.fail_on_send = fail;
    }

    /// Configures the printer to fail the next `count` sends.
    pub async fn fail_next_sends(&self, count: u32) {
        self.state.write().await.failures_remaining = count;
    }

    /// Returns the receipts printed so far, oldest first.
    pub async fn printed(&self) -> Vec<Receipt> {
        self.state.read().await.printed.clone()
    }

    /// Returns the number of successfully printed receipts.
    pub async fn print_count(&self) -> usize {
        self.state.read().await.printed.len()
    }

    /// Returns the number of send calls, successful or not.
    pub async fn attempt_count(&self) -> u32 {
        self.state.read().await.attempts
    }
}

#[async_trait]
impl PrinterSink for InMemoryPrinter {
    async fn send(&self, receipt: &Receipt) -> Result<(), PrinterError> {
        let mut state = self.state.write().await;
        state.attempts += 1;

        if state.fail_on_send {
            return Err(PrinterError::Offline("paper out".to_string()));
        }
        if state.failures_remaining > 0 {
            state.failures_remaining -= 1;
            return Err(PrinterError::Io("transient write error".to_string()));
        }

        state.printed.push(receipt.clone());
        Ok(())
    }
}
