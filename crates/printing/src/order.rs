//! Order aggregate and order storage.

use std::sync::Arc;

use async_trait::async_trait;
use catalog::RepositoryError;
use common::{ItemId, OrderId};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::PrintError;

/// Fulfillment channel of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Eaten at the counter.
    DineIn,
    /// Packed to go.
    TakeOut,
}

impl OrderType {
    /// Wire name of the order type.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::DineIn => "DINE_IN",
            OrderType::TakeOut => "TAKE_OUT",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order: an item reference and a quantity.
///
/// Only the item ID is held. Name and price are read from the catalog when the
/// receipt is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    pub item_id: ItemId,
    pub quantity: u32,
}

impl Detail {
    /// Creates a new detail line.
    pub fn new(item_id: ItemId, quantity: u32) -> Self {
        Self { item_id, quantity }
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    order_type: OrderType,
    details: Vec<Detail>,
}

impl Order {
    /// Creates an empty order with a fresh ID.
    pub fn new(order_type: OrderType) -> Self {
        Self::with_id(OrderId::new(), order_type)
    }

    /// Creates an empty order with a known ID.
    pub fn with_id(id: OrderId, order_type: OrderType) -> Self {
        Self {
            id,
            order_type,
            details: Vec::new(),
        }
    }

    /// Appends a detail line, builder style.
    pub fn with_detail(mut self, item_id: ItemId, quantity: u32) -> Self {
        self.add_detail(item_id, quantity);
        self
    }

    /// Appends a detail line. Line order is receipt order.
    pub fn add_detail(&mut self, item_id: ItemId, quantity: u32) {
        self.details.push(Detail::new(item_id, quantity));
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn details(&self) -> &[Detail] {
        &self.details
    }

    /// Returns true if the order has at least one line.
    pub fn has_details(&self) -> bool {
        !self.details.is_empty()
    }
}

/// Read/write access to placed orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Inserts the order, or replaces the stored order with the same ID.
    async fn save(&self, order: Order) -> Result<Order, RepositoryError>;

    /// Returns the order with the given ID, if any.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError>;

    /// Returns every stored order, oldest first.
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError>;
}

/// Convenience methods for order repositories.
#[async_trait]
pub trait OrderRepositoryExt: OrderRepository {
    /// Loads an order, failing with `OrderNotFound` when absent.
    async fn require(&self, order_id: OrderId) -> Result<Order, PrintError> {
        self.find_by_id(order_id)
            .await?
            .ok_or(PrintError::OrderNotFound { order_id })
    }
}

impl<T: OrderRepository + ?Sized> OrderRepositoryExt for T {}

/// In-memory order store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderRepository {
    /// Creates a new empty order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored orders.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: Order) -> Result<Order, RepositoryError> {
        let mut orders = self.orders.write().await;
        match orders.iter().position(|existing| existing.id == order.id) {
            Some(index) => orders[index] = order.clone(),
            None => orders.push(order.clone()),
        }
        Ok(order)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|order| order.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        Ok(self.orders.read().await.clone())
    }
}
