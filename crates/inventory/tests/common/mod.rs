#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use inventory::abstract_trait::product::repository::{
    ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
};
use inventory::abstract_trait::product::service::ProductCommandServiceTrait;
use inventory::abstract_trait::stock::repository::{
    StockCommandRepositoryTrait, StockQueryRepositoryTrait,
};
use inventory::domain::requests::{
    CreateProductRequest, FindAllProducts, RecordMovementRequest, UpdateProductRequest,
};
use inventory::model::{MovementType, Product, StockMovement};
use inventory::service::product::{ProductCommandService, ProductQueryService};
use inventory::service::stock::{StockCommandService, StockQueryService};
use shared::errors::RepositoryError;
use shared::utils::LedgerMetrics;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
struct MemStore {
    products: HashMap<i32, Product>,
    movements: Vec<StockMovement>,
    next_product_id: i32,
    next_movement_id: i32,
}

/// In-memory stand-in for the Postgres repositories. A single mutex over
/// the store plays the role of the per-product serialization the real
/// implementation gets from row locks.
#[derive(Default)]
pub struct InMemoryInventory {
    store: Mutex<MemStore>,
    unavailable: AtomicBool,
}

impl InMemoryInventory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn guard(&self) -> Result<(), RepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(RepositoryError::Unavailable("store offline".into()))
        } else {
            Ok(())
        }
    }

    pub async fn quantity_of(&self, product_id: i32) -> Option<i32> {
        self.store
            .lock()
            .await
            .products
            .get(&product_id)
            .map(|p| p.quantity)
    }

    pub async fn movement_count(&self) -> usize {
        self.store.lock().await.movements.len()
    }

    /// Signed sum of the ledger for one product: entrada adds, saida
    /// subtracts.
    pub async fn signed_sum(&self, product_id: i32) -> i32 {
        self.store
            .lock()
            .await
            .movements
            .iter()
            .filter(|m| m.product_id == product_id)
            .map(|m| {
                m.movement_type
                    .parse::<MovementType>()
                    .expect("ledger rows only hold valid movement types")
                    .sign()
                    * m.quantity
            })
            .sum()
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryInventory {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        self.guard()?;

        let store = self.store.lock().await;
        let term = req.search.trim().to_lowercase();

        let mut matches: Vec<Product> = store
            .products
            .values()
            .filter(|p| term.is_empty() || p.name.to_lowercase().contains(&term))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));

        let total = matches.len() as i64;
        let offset = ((req.page - 1).max(0) * req.page_size.max(1)) as usize;
        let page: Vec<Product> = matches
            .into_iter()
            .skip(offset)
            .take(req.page_size.max(1) as usize)
            .collect();

        Ok((page, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        self.guard()?;
        Ok(self.store.lock().await.products.get(&id).cloned())
    }

    async fn find_low_stock(&self) -> Result<Vec<Product>, RepositoryError> {
        self.guard()?;

        let store = self.store.lock().await;
        let mut low: Vec<Product> = store
            .products
            .values()
            .filter(|p| p.quantity < p.min_stock)
            .cloned()
            .collect();
        low.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(low)
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryInventory {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<Product, RepositoryError> {
        self.guard()?;

        let mut store = self.store.lock().await;
        store.next_product_id += 1;

        let now = Utc::now().naive_utc();
        let product = Product {
            product_id: store.next_product_id,
            name: req.name.trim().to_string(),
            description: req.description.clone(),
            quantity: 0,
            min_stock: req.min_stock,
            created_at: Some(now),
            updated_at: Some(now),
        };
        store.products.insert(product.product_id, product.clone());

        Ok(product)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        self.guard()?;

        let id = req
            .id
            .ok_or_else(|| RepositoryError::Custom("product id is required".into()))?;

        let mut store = self.store.lock().await;
        let product = store
            .products
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(name) = &req.name {
            product.name = name.trim().to_string();
        }
        if let Some(description) = &req.description {
            product.description = Some(description.clone());
        }
        if let Some(min_stock) = req.min_stock {
            product.min_stock = min_stock;
        }
        product.updated_at = Some(Utc::now().naive_utc());

        Ok(product.clone())
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        self.guard()?;

        let mut store = self.store.lock().await;

        let movement_count = store
            .movements
            .iter()
            .filter(|m| m.product_id == id)
            .count();
        if movement_count > 0 {
            return Err(RepositoryError::Conflict(format!(
                "product {id} has {movement_count} recorded movements"
            )));
        }

        store
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl StockQueryRepositoryTrait for InMemoryInventory {
    async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<StockMovement>, RepositoryError> {
        self.guard()?;

        // Movements are pushed in insertion order, which is also
        // created_at order.
        Ok(self
            .store
            .lock()
            .await
            .movements
            .iter()
            .filter(|m| m.product_id == product_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl StockCommandRepositoryTrait for InMemoryInventory {
    async fn record_movement(
        &self,
        req: &RecordMovementRequest,
    ) -> Result<StockMovement, RepositoryError> {
        self.guard()?;

        let mut store = self.store.lock().await;

        let current = store
            .products
            .get(&req.product_id)
            .map(|p| p.quantity)
            .ok_or(RepositoryError::NotFound)?;

        let new_quantity = match req.movement_type {
            MovementType::Entrada => current + req.quantity,
            MovementType::Saida => {
                if req.quantity > current {
                    return Err(RepositoryError::InsufficientStock { available: current });
                }
                current - req.quantity
            }
        };

        store.next_movement_id += 1;
        let movement = StockMovement {
            movement_id: store.next_movement_id,
            product_id: req.product_id,
            movement_type: req.movement_type.as_str().to_string(),
            quantity: req.quantity,
            user_id: req.user_id,
            created_at: Utc::now().naive_utc(),
        };

        if let Some(product) = store.products.get_mut(&req.product_id) {
            product.quantity = new_quantity;
            product.updated_at = Some(movement.created_at);
        }
        store.movements.push(movement.clone());

        Ok(movement)
    }
}

pub struct TestServices {
    pub product_query: ProductQueryService,
    pub product_command: ProductCommandService,
    pub stock_query: StockQueryService,
    pub stock_command: StockCommandService,
}

pub fn services(repo: &Arc<InMemoryInventory>) -> TestServices {
    let metrics = LedgerMetrics::new();

    TestServices {
        product_query: ProductQueryService::new(repo.clone()),
        product_command: ProductCommandService::new(repo.clone()),
        stock_query: StockQueryService::new(repo.clone(), repo.clone(), metrics.clone()),
        stock_command: StockCommandService::new(repo.clone(), metrics),
    }
}

pub async fn seed_product(
    commands: &ProductCommandService,
    name: &str,
    min_stock: i32,
) -> i32 {
    commands
        .create_product(&CreateProductRequest {
            name: name.into(),
            description: None,
            min_stock,
        })
        .await
        .expect("seed product")
        .data
        .id
}

pub fn movement(
    product_id: i32,
    movement_type: MovementType,
    quantity: i32,
    user_id: Option<i32>,
) -> RecordMovementRequest {
    RecordMovementRequest {
        product_id,
        movement_type,
        quantity,
        user_id,
    }
}
