//! Item service providing the validated catalog API.

use common::ItemId;
use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::item::{Category, Item, ItemRequest, ItemResponse};
use crate::repository::ItemRepository;

/// Outcome of a best-effort batch creation.
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    /// Items that were created, in request order.
    pub created: Vec<ItemResponse>,
    /// Requests that were rejected, by position in the batch.
    pub failures: Vec<BatchFailure>,
}

/// A single rejected element of a batch.
#[derive(Debug, Serialize)]
pub struct BatchFailure {
    pub index: usize,
    pub code: &'static str,
    pub error: String,
}

/// Service for managing catalog items.
///
/// Every write runs validation before touching the repository, so a rejected
/// request never leaves a partial record behind.
pub struct ItemService<R: ItemRepository> {
    repository: R,
}

impl<R: ItemRepository> ItemService<R> {
    /// Creates a new item service over the given repository.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Lists every item.
    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<ItemResponse>> {
        let items = self.repository.find_all().await?;
        tracing::debug!(count = items.len(), "listed all items");
        Ok(items.into_iter().map(ItemResponse::from).collect())
    }

    /// Lists the items of a single category.
    #[tracing::instrument(skip(self))]
    pub async fn list_by_category(&self, category: Category) -> Result<Vec<ItemResponse>> {
        let items = self.repository.find_by_category(category).await?;
        Ok(items.into_iter().map(ItemResponse::from).collect())
    }

    /// Loads a single item.
    #[tracing::instrument(skip(self))]
    pub async fn get_item(&self, item_id: ItemId) -> Result<ItemResponse> {
        self.repository
            .find_by_id(item_id)
            .await?
            .map(ItemResponse::from)
            .ok_or(CatalogError::NotFound { item_id })
    }

    /// Validates and stores a new item.
    #[tracing::instrument(skip(self, request), fields(eng_name = ?request.eng_name))]
    pub async fn create_item(&self, request: ItemRequest) -> Result<ItemResponse> {
        let draft = validate(&request)?;
        let item = self.repository.save(Item::create(draft)).await?;

        metrics::counter!("items_created_total").increment(1);
        tracing::info!(item_id = %item.id(), price = %item.price(), "item created");
        Ok(item.into())
    }

    /// Creates each item in turn.
    ///
    /// Not transactional: a rejected element is recorded in the report and the
    /// remaining elements are still processed; earlier creations are kept.
    #[tracing::instrument(skip(self, requests), fields(batch_size = requests.len()))]
    pub async fn create_item_batch(&self, requests: Vec<ItemRequest>) -> BatchReport {
        let mut report = BatchReport::default();

        for (index, request) in requests.into_iter().enumerate() {
            match self.create_item(request).await {
                Ok(created) => report.created.push(created),
                Err(err) => report.failures.push(BatchFailure {
                    index,
                    code: err.code(),
                    error: err.to_string(),
                }),
            }
        }

        tracing::info!(
            created = report.created.len(),
            failed = report.failures.len(),
            "item batch finished"
        );
        report
    }

    /// Replaces every mutable field of an existing item.
    #[tracing::instrument(skip(self, request))]
    pub async fn update_item(&self, item_id: ItemId, request: ItemRequest) -> Result<ItemResponse> {
        let draft = validate(&request)?;

        let mut item = self
            .repository
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(%item_id, "update of unknown item");
                CatalogError::NotFound { item_id }
            })?;

        item.update(draft);
        let item = self.repository.save(item).await?;

        tracing::info!(%item_id, "item updated");
        Ok(item.into())
    }

    /// Removes an item.
    #[tracing::instrument(skip(self))]
    pub async fn delete_item(&self, item_id: ItemId) -> Result<()> {
        if !self.repository.exists_by_id(item_id).await? {
            tracing::warn!(%item_id, "delete of unknown item");
            return Err(CatalogError::NotFound { item_id });
        }

        self.repository.delete_by_id(item_id).await?;
        tracing::info!(%item_id, "item deleted");
        Ok(())
    }
}

fn validate(request: &ItemRequest) -> Result<crate::item::ItemDraft> {
    request.validate().inspect_err(|err| {
        metrics::counter!("item_validation_failures_total", "code" => err.code()).increment(1);
        tracing::warn!(code = err.code(), error = %err, "item rejected");
    })
}
