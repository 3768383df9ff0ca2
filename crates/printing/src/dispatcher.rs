//! Print dispatcher: builds a receipt and hands it to the printer.

use std::time::Duration;

use catalog::ItemRepository;
use common::OrderId;

use crate::error::{PrintError, Result};
use crate::order::{Order, OrderRepository, OrderRepositoryExt};
use crate::printers::PrinterSink;
use crate::receipt::{Receipt, ReceiptAggregator};

/// How many times a receipt is sent before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Duration,
}

impl RetryPolicy {
    /// Creates a policy. `max_attempts` is clamped to at least one.
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// A single attempt with no retry.
    pub fn none() -> Self {
        Self::new(1, Duration::ZERO)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn backoff(&self) -> Duration {
        self.backoff
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// Sends receipts for orders to a printer sink.
///
/// The dispatcher owns no business rules. It sequences aggregation and
/// sending, and reports failures. The receipt is built once; retries re-send
/// the identical receipt.
pub struct PrintDispatcher<R: ItemRepository, P: PrinterSink> {
    aggregator: ReceiptAggregator<R>,
    printer: P,
    retry: RetryPolicy,
}

impl<R: ItemRepository, P: PrinterSink> PrintDispatcher<R, P> {
    /// Creates a dispatcher that sends each receipt once.
    pub fn new(items: R, printer: P) -> Self {
        Self {
            aggregator: ReceiptAggregator::new(items),
            printer,
            retry: RetryPolicy::none(),
        }
    }

    /// Replaces the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn aggregator(&self) -> &ReceiptAggregator<R> {
        &self.aggregator
    }

    pub fn printer(&self) -> &P {
        &self.printer
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Builds the receipt for `order` without printing it.
    pub async fn preview(&self, order: &Order) -> Result<Receipt> {
        self.aggregator.build_receipt(order).await
    }

    /// Builds the receipt for `order` and prints it.
    ///
    /// Returns the printed receipt. A printer failure on the last allowed
    /// attempt is returned as `PrintFailed` carrying the printer's error.
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id()))]
    pub async fn print(&self, order: &Order) -> Result<Receipt> {
        let receipt = self.aggregator.build_receipt(order).await.inspect_err(|err| {
            metrics::counter!("print_failures_total", "stage" => "build").increment(1);
            tracing::warn!(code = err.code(), error = %err, "receipt could not be built");
        })?;

        tracing::info!(
            order_type = %receipt.order_type(),
            total_price = %receipt.total_price(),
            "printing receipt"
        );

        self.send_with_retry(&receipt).await?;

        metrics::counter!("receipts_printed_total").increment(1);
        metrics::histogram!("receipt_total_amount").record(receipt.total_price().amount() as f64);
        Ok(receipt)
    }

    /// Loads an order from `orders` and prints it.
    ///
    /// Fails with `OrderNotFound` before anything is built when the order is
    /// absent.
    pub async fn print_order<O>(&self, orders: &O, order_id: OrderId) -> Result<Receipt>
    where
        O: OrderRepository + ?Sized,
    {
        let order = orders.require(order_id).await?;
        self.print(&order).await
    }

    /// Loads an order from `orders` and builds its receipt without printing.
    pub async fn preview_order<O>(&self, orders: &O, order_id: OrderId) -> Result<Receipt>
    where
        O: OrderRepository + ?Sized,
    {
        let order = orders.require(order_id).await?;
        self.preview(&order).await
    }

    async fn send_with_retry(&self, receipt: &Receipt) -> Result<()> {
        let mut attempt = 1;
        loop {
            metrics::counter!("print_attempts_total").increment(1);
            match self.printer.send(receipt).await {
                Ok(()) => return Ok(()),
                Err(err) if attempt < self.retry.max_attempts => {
                    tracing::warn!(attempt, error = %err, "print attempt failed, retrying");
                    tokio::time::sleep(self.retry.backoff).await;
                    attempt += 1;
                }
                Err(err) => {
                    metrics::counter!("print_failures_total", "stage" => "send").increment(1);
                    tracing::error!(attempt, error = %err, "print failed");
                    return Err(PrintError::PrintFailed(err));
                }
            }
        }
    }
}
