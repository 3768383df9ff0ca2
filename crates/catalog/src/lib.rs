//! Item catalog for the order-it POS backend.
//!
//! This crate owns everything about purchasable items:
//! - Item records and the closed set of menu categories
//! - Creation/update validation (required names, price bounds)
//! - The `ItemRepository` abstraction and an in-memory implementation
//! - `ItemService`, the validated CRUD surface used by the HTTP layer

pub mod error;
pub mod item;
pub mod memory;
pub mod repository;
pub mod service;

pub use common::{ItemId, Money};
pub use error::{CatalogError, Result, UnknownCategory};
pub use item::{Category, Item, ItemDraft, ItemRequest, ItemResponse, MAX_PRICE};
pub use memory::InMemoryItemRepository;
pub use repository::{ItemRepository, RepositoryError};
pub use service::{BatchFailure, BatchReport, ItemService};
