use std::sync::Arc;

use async_trait::async_trait;
use common::ItemId;
use thiserror::Error;

use crate::item::{Category, Item};

/// Errors raised by an item store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store could not be reached or refused the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence boundary for catalog items.
///
/// Implementations decide how rows are stored; the catalog only relies on
/// these operations. Listing order must be stable (insertion order for the
/// in-memory store).
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Returns every item.
    async fn find_all(&self) -> Result<Vec<Item>, RepositoryError>;

    /// Returns the items listed under `category`.
    async fn find_by_category(&self, category: Category) -> Result<Vec<Item>, RepositoryError>;

    /// Returns the item with the given ID, if any.
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, RepositoryError>;

    /// Returns true if an item with the given ID exists.
    async fn exists_by_id(&self, id: ItemId) -> Result<bool, RepositoryError>;

    /// Inserts the item, or replaces the stored item with the same ID.
    async fn save(&self, item: Item) -> Result<Item, RepositoryError>;

    /// Removes the item with the given ID. Unknown IDs are a no-op.
    async fn delete_by_id(&self, id: ItemId) -> Result<(), RepositoryError>;
}

#[async_trait]
impl<R: ItemRepository + ?Sized> ItemRepository for Arc<R> {
    async fn find_all(&self) -> Result<Vec<Item>, RepositoryError> {
        (**self).find_all().await
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Item>, RepositoryError> {
        (**self).find_by_category(category).await
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, RepositoryError> {
        (**self).find_by_id(id).await
    }

    async fn exists_by_id(&self, id: ItemId) -> Result<bool, RepositoryError> {
        (**self).exists_by_id(id).await
    }

    async fn save(&self, item: Item) -> Result<Item, RepositoryError> {
        (**self).save(item).await
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<(), RepositoryError> {
        (**self).delete_by_id(id).await
    }
}
