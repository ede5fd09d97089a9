mod common;

use common::{InMemoryInventory, movement, seed_product, services};
use inventory::abstract_trait::product::service::ProductQueryServiceTrait;
use inventory::abstract_trait::stock::service::{
    StockCommandServiceTrait, StockQueryServiceTrait,
};
use inventory::model::MovementType;
use shared::errors::{RepositoryError, ServiceError};

#[tokio::test]
async fn entrada_increases_balance_and_clears_low_stock() {
    let repo = InMemoryInventory::new();
    let svc = services(&repo);

    let id = seed_product(&svc.product_command, "Widget", 5).await;
    assert_eq!(repo.quantity_of(id).await, Some(0));

    // Freshly created with min_stock 5, the product starts below minimum.
    let low = svc.stock_query.find_low_stock().await.unwrap();
    assert!(low.data.iter().any(|p| p.id == id));

    svc.stock_command
        .record_movement(&movement(id, MovementType::Entrada, 10, Some(1)))
        .await
        .unwrap();

    assert_eq!(repo.quantity_of(id).await, Some(10));

    let low = svc.stock_query.find_low_stock().await.unwrap();
    assert!(low.data.iter().all(|p| p.id != id));
}

#[tokio::test]
async fn saida_reduces_balance_and_flags_low_stock() {
    let repo = InMemoryInventory::new();
    let svc = services(&repo);

    let id = seed_product(&svc.product_command, "Widget", 5).await;
    svc.stock_command
        .record_movement(&movement(id, MovementType::Entrada, 10, None))
        .await
        .unwrap();

    svc.stock_command
        .record_movement(&movement(id, MovementType::Saida, 8, None))
        .await
        .unwrap();

    assert_eq!(repo.quantity_of(id).await, Some(2));

    let low = svc.stock_query.find_low_stock().await.unwrap();
    assert!(low.data.iter().any(|p| p.id == id && p.quantity == 2));
}

#[tokio::test]
async fn saida_exceeding_balance_is_rejected_without_a_ledger_entry() {
    let repo = InMemoryInventory::new();
    let svc = services(&repo);

    let id = seed_product(&svc.product_command, "Widget", 5).await;
    svc.stock_command
        .record_movement(&movement(id, MovementType::Entrada, 2, None))
        .await
        .unwrap();
    let before = repo.movement_count().await;

    let result = svc
        .stock_command
        .record_movement(&movement(id, MovementType::Saida, 5, None))
        .await;

    match result {
        Err(ServiceError::Repo(RepositoryError::InsufficientStock { available })) => {
            assert_eq!(available, 2);
        }
        other => panic!("expected insufficient stock, got {other:?}"),
    }

    assert_eq!(repo.quantity_of(id).await, Some(2));
    assert_eq!(repo.movement_count().await, before);
}

#[tokio::test]
async fn non_positive_quantity_is_rejected_before_any_write() {
    let repo = InMemoryInventory::new();
    let svc = services(&repo);

    let id = seed_product(&svc.product_command, "Widget", 0).await;

    for quantity in [0, -3] {
        let result = svc
            .stock_command
            .record_movement(&movement(id, MovementType::Entrada, quantity, None))
            .await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    assert_eq!(repo.movement_count().await, 0);
    assert_eq!(repo.quantity_of(id).await, Some(0));
}

#[tokio::test]
async fn movement_against_unknown_product_is_not_found() {
    let repo = InMemoryInventory::new();
    let svc = services(&repo);

    let result = svc
        .stock_command
        .record_movement(&movement(999, MovementType::Entrada, 1, None))
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Repo(RepositoryError::NotFound))
    ));
    assert_eq!(repo.movement_count().await, 0);
}

#[tokio::test]
async fn concurrent_saidas_cannot_overdraw_the_balance() {
    let repo = InMemoryInventory::new();
    let svc = services(&repo);

    let id = seed_product(&svc.product_command, "Widget", 0).await;
    svc.stock_command
        .record_movement(&movement(id, MovementType::Entrada, 10, None))
        .await
        .unwrap();

    let first = svc.stock_command.clone();
    let second = svc.stock_command.clone();
    let req_a = movement(id, MovementType::Saida, 6, None);
    let req_b = movement(id, MovementType::Saida, 6, None);

    let (a, b) = tokio::join!(
        tokio::spawn(async move { first.record_movement(&req_a).await }),
        tokio::spawn(async move { second.record_movement(&req_b).await }),
    );
    let results = [a.unwrap(), b.unwrap()];

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one saída may win the race");

    assert!(results.iter().any(|r| matches!(
        r,
        Err(ServiceError::Repo(RepositoryError::InsufficientStock { available: 4 }))
    )));

    assert_eq!(repo.quantity_of(id).await, Some(4));
    assert_eq!(repo.signed_sum(id).await, 4);
}

#[tokio::test]
async fn movement_history_is_returned_in_insertion_order() {
    let repo = InMemoryInventory::new();
    let svc = services(&repo);

    let id = seed_product(&svc.product_command, "Widget", 0).await;
    svc.stock_command
        .record_movement(&movement(id, MovementType::Entrada, 10, Some(7)))
        .await
        .unwrap();
    svc.stock_command
        .record_movement(&movement(id, MovementType::Saida, 8, Some(7)))
        .await
        .unwrap();

    let history = svc.stock_query.find_movements(id).await.unwrap().data;

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].movement_type, "entrada");
    assert_eq!(history[0].quantity, 10);
    assert_eq!(history[1].movement_type, "saida");
    assert_eq!(history[1].quantity, 8);
    assert!(history[0].id < history[1].id);
}

#[tokio::test]
async fn entrada_then_saida_of_same_quantity_restores_balance() {
    let repo = InMemoryInventory::new();
    let svc = services(&repo);

    let id = seed_product(&svc.product_command, "Widget", 0).await;
    svc.stock_command
        .record_movement(&movement(id, MovementType::Entrada, 3, None))
        .await
        .unwrap();
    let before = repo.quantity_of(id).await.unwrap();

    svc.stock_command
        .record_movement(&movement(id, MovementType::Entrada, 7, None))
        .await
        .unwrap();
    svc.stock_command
        .record_movement(&movement(id, MovementType::Saida, 7, None))
        .await
        .unwrap();

    assert_eq!(repo.quantity_of(id).await, Some(before));
}

#[tokio::test]
async fn balance_always_equals_signed_ledger_sum() {
    let repo = InMemoryInventory::new();
    let svc = services(&repo);

    let id = seed_product(&svc.product_command, "Widget", 0).await;

    let steps = [
        (MovementType::Entrada, 10),
        (MovementType::Saida, 3),
        (MovementType::Entrada, 5),
        (MovementType::Saida, 100), // rejected, must not disturb the sum
        (MovementType::Saida, 12),
    ];

    for (movement_type, quantity) in steps {
        let _ = svc
            .stock_command
            .record_movement(&movement(id, movement_type, quantity, None))
            .await;

        let quantity_now = repo.quantity_of(id).await.unwrap();
        assert_eq!(quantity_now, repo.signed_sum(id).await);
        assert!(quantity_now >= 0);
    }

    assert_eq!(repo.quantity_of(id).await, Some(0));
}

#[tokio::test]
async fn reads_degrade_to_empty_when_storage_is_unavailable() {
    let repo = InMemoryInventory::new();
    let svc = services(&repo);

    let id = seed_product(&svc.product_command, "Widget", 5).await;
    repo.set_unavailable(true);

    let history = svc.stock_query.find_movements(id).await.unwrap();
    assert!(history.data.is_empty());

    let low = svc.stock_query.find_low_stock().await.unwrap();
    assert!(low.data.is_empty());

    let listing = svc
        .product_query
        .find_all(&inventory::domain::requests::FindAllProducts {
            page: 1,
            page_size: 10,
            search: String::new(),
        })
        .await
        .unwrap();
    assert!(listing.data.is_empty());

    // Mutations must fail loudly rather than silently no-op.
    let result = svc
        .stock_command
        .record_movement(&movement(id, MovementType::Entrada, 1, None))
        .await;
    assert!(matches!(
        result,
        Err(ServiceError::Repo(RepositoryError::Unavailable(_)))
    ));
}
