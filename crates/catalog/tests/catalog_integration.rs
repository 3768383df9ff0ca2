//! Integration tests for the item catalog.
//!
//! These exercise the public service API end to end against the in-memory
//! repository: validation gates, lookup failures and batch semantics.

use catalog::{
    CatalogError, Category, InMemoryItemRepository, ItemId, ItemRequest, ItemService, MAX_PRICE,
};

fn create_service() -> ItemService<InMemoryItemRepository> {
    ItemService::new(InMemoryItemRepository::new())
}

fn request(name: &str, price: i64, category: Category) -> ItemRequest {
    ItemRequest::new(name, format!("{name}-kr"), price, category)
}

mod validation {
    use super::*;

    #[tokio::test]
    async fn valid_items_are_listed_after_creation() {
        let service = create_service();

        for price in [1, 2500, MAX_PRICE] {
            let created = service
                .create_item(request("Item", price, Category::Side))
                .await
                .unwrap();
            let all = service.list_all().await.unwrap();
            assert!(all.contains(&created));
        }
        assert_eq!(service.list_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn out_of_range_prices_are_rejected_and_not_stored() {
        let service = create_service();

        for price in [0, -1, i64::MIN] {
            let err = service
                .create_item(request("Bad", price, Category::Main))
                .await
                .unwrap_err();
            assert!(matches!(err, CatalogError::InvalidPrice { .. }), "{price}");
        }

        for price in [MAX_PRICE + 1, i64::MAX] {
            let err = service
                .create_item(request("Bad", price, Category::Main))
                .await
                .unwrap_err();
            assert!(matches!(err, CatalogError::PriceTooHigh { .. }), "{price}");
        }

        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn image_path_is_not_checked() {
        let service = create_service();
        let created = service
            .create_item(request("Ramen", 5000, Category::Main).with_image_path("missing.png"))
            .await
            .unwrap();
        assert_eq!(created.image_path.as_deref(), Some("missing.png"));
    }

    #[tokio::test]
    async fn error_codes_are_stable() {
        let service = create_service();
        let mut missing = request("X", 1000, Category::Main);
        missing.category = None;

        let err = service.create_item(missing).await.unwrap_err();
        assert_eq!(err.code(), "MISSING_FIELD");
        assert!(err.is_validation());
    }
}

mod lifecycle {
    use super::*;

    #[tokio::test]
    async fn update_unknown_id_leaves_catalog_unchanged() {
        let service = create_service();
        service
            .create_item(request("Tteokbokki", 4000, Category::Main))
            .await
            .unwrap();
        let before = service.list_all().await.unwrap();

        let err = service
            .update_item(ItemId::new(), request("Other", 1000, Category::Side))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::NotFound { .. }));
        assert_eq!(service.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn rejected_update_keeps_previous_fields() {
        let service = create_service();
        let created = service
            .create_item(request("Tteokbokki", 4000, Category::Main))
            .await
            .unwrap();

        let err = service
            .update_item(created.id, request("Tteokbokki", 0, Category::Main))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::InvalidPrice { .. }));
        assert_eq!(service.get_item(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn update_moves_item_between_categories() {
        let service = create_service();
        let created = service
            .create_item(request("Hotteok", 1500, Category::Side))
            .await
            .unwrap();

        service
            .update_item(created.id, request("Hotteok", 1500, Category::Dessert))
            .await
            .unwrap();

        assert!(
            service
                .list_by_category(Category::Side)
                .await
                .unwrap()
                .is_empty()
        );
        assert_eq!(
            service
                .list_by_category(Category::Dessert)
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn delete_succeeds_once_then_reports_not_found() {
        let service = create_service();
        let created = service
            .create_item(request("Sundae", 6000, Category::Main))
            .await
            .unwrap();

        assert!(service.delete_item(created.id).await.is_ok());
        assert!(matches!(
            service.delete_item(created.id).await,
            Err(CatalogError::NotFound { .. })
        ));
        assert!(
            service
                .list_all()
                .await
                .unwrap()
                .iter()
                .all(|item| item.id != created.id)
        );
    }
}

mod batch {
    use super::*;

    #[tokio::test]
    async fn batch_keeps_valid_elements_around_an_invalid_one() {
        let service = create_service();

        let report = service
            .create_item_batch(vec![
                request("A", 1000, Category::Main),
                request("B", 0, Category::Main),
                request("C", 3000, Category::Drink),
            ])
            .await;

        let names: Vec<_> = report
            .created
            .iter()
            .map(|item| item.eng_name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].code, "INVALID_PRICE");
        assert_eq!(service.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn empty_batch_is_a_no_op() {
        let service = create_service();
        let report = service.create_item_batch(Vec::new()).await;
        assert!(report.created.is_empty());
        assert!(report.failures.is_empty());
    }
}
