//! Integration tests for the order-to-receipt pipeline.
//!
//! These wire the catalog service, the order store and the dispatcher together
//! the same way the HTTP layer does.

use catalog::{Category, InMemoryItemRepository, ItemId, ItemRequest, ItemService, Money};
use printing::{
    InMemoryOrderRepository, InMemoryPrinter, Order, OrderRepository, OrderRepositoryExt,
    OrderType, PrintDispatcher, PrintError,
};

struct Counter {
    items: ItemService<InMemoryItemRepository>,
    orders: InMemoryOrderRepository,
    dispatcher: PrintDispatcher<InMemoryItemRepository, InMemoryPrinter>,
}

fn counter() -> Counter {
    let repo = InMemoryItemRepository::new();
    Counter {
        items: ItemService::new(repo.clone()),
        orders: InMemoryOrderRepository::new(),
        dispatcher: PrintDispatcher::new(repo, InMemoryPrinter::new()),
    }
}

async fn add_item(counter: &Counter, name: &str, price: i64) -> ItemId {
    counter
        .items
        .create_item(ItemRequest::new(name, format!("{name}(kr)"), price, Category::Main))
        .await
        .unwrap()
        .id
}

fn line_sum(receipt: &printing::Receipt) -> i64 {
    receipt.lines().iter().map(|line| line.price.amount()).sum()
}

mod aggregation {
    use super::*;

    #[tokio::test]
    async fn two_line_order_totals_five_thousand() {
        let counter = counter();
        let a = add_item(&counter, "A", 1000).await;
        let b = add_item(&counter, "B", 3000).await;

        let order = Order::new(OrderType::DineIn)
            .with_detail(a, 2)
            .with_detail(b, 1);
        let receipt = counter.dispatcher.print(&order).await.unwrap();

        let lines: Vec<_> = receipt
            .lines()
            .iter()
            .map(|l| (l.name.as_str(), l.quantity, l.price.amount()))
            .collect();
        assert_eq!(lines, vec![("A(kr)", 2, 2000), ("B(kr)", 1, 3000)]);
        assert_eq!(receipt.total_price(), Money::new(5000));
    }

    #[tokio::test]
    async fn total_always_matches_line_sum() {
        let counter = counter();
        let mut ids = Vec::new();
        for (i, price) in [1, 999, 4500, 100_000, 7].into_iter().enumerate() {
            ids.push(add_item(&counter, &format!("item-{i}"), price).await);
        }

        for n in 0..ids.len() {
            let mut order = Order::new(OrderType::TakeOut);
            for (i, id) in ids.iter().enumerate().take(n + 1) {
                order.add_detail(*id, (i as u32 * 7 + n as u32) % 13 + 1);
            }
            let receipt = counter.dispatcher.preview(&order).await.unwrap();
            assert_eq!(receipt.total_price().amount(), line_sum(&receipt));
            assert_eq!(receipt.lines().len(), n + 1);
        }
    }

    #[tokio::test]
    async fn receipt_uses_price_at_print_time() {
        let counter = counter();
        let a = add_item(&counter, "A", 1000).await;
        let order = Order::new(OrderType::DineIn).with_detail(a, 3);

        counter
            .items
            .update_item(a, ItemRequest::new("A", "A-new", 1200, Category::Main))
            .await
            .unwrap();

        let receipt = counter.dispatcher.print(&order).await.unwrap();
        assert_eq!(receipt.lines()[0].name, "A-new");
        assert_eq!(receipt.total_price(), Money::new(3600));
    }

    #[tokio::test]
    async fn repeated_items_produce_separate_lines() {
        let counter = counter();
        let a = add_item(&counter, "A", 1500).await;
        let order = Order::new(OrderType::DineIn)
            .with_detail(a, 1)
            .with_detail(a, 2);

        let receipt = counter.dispatcher.preview(&order).await.unwrap();
        assert_eq!(receipt.lines().len(), 2);
        assert_eq!(receipt.total_price(), Money::new(4500));
    }
}

mod failures {
    use super::*;

    #[tokio::test]
    async fn deleted_item_makes_stored_order_dangling() {
        let counter = counter();
        let a = add_item(&counter, "A", 1000).await;
        let b = add_item(&counter, "B", 2000).await;
        let order = counter
            .orders
            .save(Order::new(OrderType::DineIn).with_detail(a, 1).with_detail(b, 1))
            .await
            .unwrap();

        counter.items.delete_item(b).await.unwrap();

        let stored = counter.orders.require(order.id()).await.unwrap();
        let err = counter.dispatcher.print(&stored).await.unwrap_err();
        assert!(matches!(
            err,
            PrintError::DanglingItemReference { item_id, line: 1 } if item_id == b
        ));
        assert_eq!(counter.dispatcher.printer().attempt_count().await, 0);
    }

    #[tokio::test]
    async fn printer_failure_is_reported_and_nothing_is_printed() {
        let counter = counter();
        let a = add_item(&counter, "A", 1000).await;
        counter.dispatcher.printer().set_fail_on_send(true).await;

        let err = counter
            .dispatcher
            .print(&Order::new(OrderType::TakeOut).with_detail(a, 1))
            .await
            .unwrap_err();

        assert!(matches!(err, PrintError::PrintFailed(_)));
        assert_eq!(counter.dispatcher.printer().print_count().await, 0);
    }

    #[tokio::test]
    async fn catalog_outage_surfaces_as_repository_error() {
        let counter = counter();
        let a = add_item(&counter, "A", 1000).await;
        counter.items.repository().set_unavailable(true).await;

        let err = counter
            .dispatcher
            .preview(&Order::new(OrderType::DineIn).with_detail(a, 1))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "REPOSITORY");
    }
}
