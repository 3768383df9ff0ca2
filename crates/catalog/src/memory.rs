use std::sync::Arc;

use async_trait::async_trait;
use common::ItemId;
use tokio::sync::RwLock;

use crate::item::{Category, Item};
use crate::repository::{ItemRepository, RepositoryError};

#[derive(Debug, Default)]
struct InMemoryItemState {
    items: Vec<Item>,
    unavailable: bool,
}

/// In-memory item store.
///
/// Items are kept in insertion order; `save` on an existing ID replaces the
/// entry in place. Clones share the same underlying table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemRepository {
    state: Arc<RwLock<InMemoryItemState>>,
}

impl InMemoryItemRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored items.
    pub async fn item_count(&self) -> usize {
        self.state.read().await.items.len()
    }

    /// Makes every subsequent operation fail with `Unavailable`.
    pub async fn set_unavailable(&self, unavailable: bool) {
        self.state.write().await.unavailable = unavailable;
    }
}

fn check_available(state: &InMemoryItemState) -> Result<(), RepositoryError> {
    if state.unavailable {
        return Err(RepositoryError::Unavailable(
            "in-memory store switched off".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn find_all(&self) -> Result<Vec<Item>, RepositoryError> {
        let state = self.state.read().await;
        check_available(&state)?;
        Ok(state.items.clone())
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Item>, RepositoryError> {
        let state = self.state.read().await;
        check_available(&state)?;
        Ok(state
            .items
            .iter()
            .filter(|item| item.category() == category)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, RepositoryError> {
        let state = self.state.read().await;
        check_available(&state)?;
        Ok(state.items.iter().find(|item| item.id() == id).cloned())
    }

    async fn exists_by_id(&self, id: ItemId) -> Result<bool, RepositoryError> {
        let state = self.state.read().await;
        check_available(&state)?;
        Ok(state.items.iter().any(|item| item.id() == id))
    }

    async fn save(&self, item: Item) -> Result<Item, RepositoryError> {
        let mut state = self.state.write().await;
        check_available(&state)?;
        match state.items.iter().position(|existing| existing.id() == item.id()) {
            Some(index) => state.items[index] = item.clone(),
            None => state.items.push(item.clone()),
        }
        Ok(item)
    }

    async fn delete_by_id(&self, id: ItemId) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        check_available(&state)?;
        state.items.retain(|item| item.id() != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemRequest;

    fn item(name: &str, category: Category) -> Item {
        Item::create(
            ItemRequest::new(name, name, 1000, category)
                .validate()
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_save_preserves_insertion_order() {
        let repo = InMemoryItemRepository::new();
        let a = repo.save(item("A", Category::Main)).await.unwrap();
        let b = repo.save(item("B", Category::Drink)).await.unwrap();
        let c = repo.save(item("C", Category::Main)).await.unwrap();

        let ids: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(Item::id)
            .collect();
        assert_eq!(ids, vec![a.id(), b.id(), c.id()]);
    }

    #[tokio::test]
    async fn test_save_replaces_in_place() {
        let repo = InMemoryItemRepository::new();
        let mut a = repo.save(item("A", Category::Main)).await.unwrap();
        repo.save(item("B", Category::Main)).await.unwrap();

        a.update(
            ItemRequest::new("A2", "A2", 5000, Category::Side)
                .validate()
                .unwrap(),
        );
        repo.save(a.clone()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], a);
    }

    #[tokio::test]
    async fn test_find_by_category() {
        let repo = InMemoryItemRepository::new();
        repo.save(item("A", Category::Main)).await.unwrap();
        repo.save(item("B", Category::Drink)).await.unwrap();
        repo.save(item("C", Category::Main)).await.unwrap();

        let mains = repo.find_by_category(Category::Main).await.unwrap();
        let names: Vec<_> = mains.iter().map(Item::eng_name).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert!(
            repo.find_by_category(Category::Dessert)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_delete_and_exists() {
        let repo = InMemoryItemRepository::new();
        let a = repo.save(item("A", Category::Main)).await.unwrap();
        assert!(repo.exists_by_id(a.id()).await.unwrap());

        repo.delete_by_id(a.id()).await.unwrap();
        assert!(!repo.exists_by_id(a.id()).await.unwrap());
        assert!(repo.find_by_id(a.id()).await.unwrap().is_none());
        assert_eq!(repo.item_count().await, 0);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails() {
        let repo = InMemoryItemRepository::new();
        repo.set_unavailable(true).await;
        assert!(matches!(
            repo.find_all().await,
            Err(RepositoryError::Unavailable(_))
        ));
        assert!(repo.save(item("A", Category::Main)).await.is_err());

        repo.set_unavailable(false).await;
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
