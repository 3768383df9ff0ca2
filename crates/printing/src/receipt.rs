//! Receipt documents and the aggregation that builds them.

use catalog::ItemRepository;
use chrono::{DateTime, Utc};
use common::Money;
use serde::Serialize;

use crate::error::{PrintError, Result};
use crate::order::{Order, OrderType};

/// One printed line: item name, quantity and extended price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: u32,
    /// `quantity * unit price` at the time the receipt was built.
    pub price: Money,
}

/// A printable receipt.
///
/// Only `ReceiptAggregator` can build one, which keeps `total_price` equal to
/// the sum of the line prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    order_type: OrderType,
    lines: Vec<ReceiptLine>,
    total_price: Money,
    issued_at: DateTime<Utc>,
}

impl Receipt {
    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    pub fn total_price(&self) -> Money {
        self.total_price
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Renders the receipt as plain text, one line per item.
    pub fn render_text(&self) -> String {
        let mut rows = Vec::with_capacity(self.lines.len() + 3);
        rows.push(format!("[{}]", self.order_type));
        rows.extend(
            self.lines
                .iter()
                .map(|line| format!("{} x{}  {}", line.name, line.quantity, line.price)),
        );
        rows.push(format!("TOTAL  {}", self.total_price));
        rows.push(self.issued_at.format("%Y-%m-%d %H:%M:%S").to_string());
        rows.join("\n")
    }
}

/// Builds receipts from orders using live catalog data.
///
/// Each referenced item is read when the receipt is built, not when the order
/// was placed, so a price edit made before printing shows up on the receipt.
/// Reads are not isolated from concurrent catalog writes: every item is read
/// once, and whatever version the store holds at that moment is used.
pub struct ReceiptAggregator<R: ItemRepository> {
    items: R,
}

impl<R: ItemRepository> ReceiptAggregator<R> {
    /// Creates an aggregator reading from the given item repository.
    pub fn new(items: R) -> Self {
        Self { items }
    }

    /// Returns a reference to the item repository.
    pub fn items(&self) -> &R {
        &self.items
    }

    /// Builds the receipt for `order` in a single pass over its details.
    ///
    /// Fails without producing a partial receipt if any line has a zero
    /// quantity, references a missing item, or overflows the amount type.
    #[tracing::instrument(
        skip(self, order),
        fields(order_id = %order.id(), lines = order.details().len())
    )]
    pub async fn build_receipt(&self, order: &Order) -> Result<Receipt> {
        let mut lines = Vec::with_capacity(order.details().len());
        let mut total_price = Money::zero();

        for (line, detail) in order.details().iter().enumerate() {
            if detail.quantity == 0 {
                return Err(PrintError::InvalidQuantity {
                    item_id: detail.item_id,
                    line,
                    quantity: detail.quantity,
                });
            }

            let item = self.items.find_by_id(detail.item_id).await?.ok_or_else(|| {
                tracing::error!(item_id = %detail.item_id, line, "order references a deleted item");
                PrintError::DanglingItemReference {
                    item_id: detail.item_id,
                    line,
                }
            })?;

            let price = item
                .price()
                .checked_mul(detail.quantity)
                .ok_or(PrintError::AmountOverflow { line })?;
            total_price = total_price
                .checked_add(price)
                .ok_or(PrintError::AmountOverflow { line })?;

            lines.push(ReceiptLine {
                name: item.kor_name().to_string(),
                quantity: detail.quantity,
                price,
            });
        }

        Ok(Receipt {
            order_type: order.order_type(),
            lines,
            total_price,
            issued_at: Utc::now(),
        })
    }
}
