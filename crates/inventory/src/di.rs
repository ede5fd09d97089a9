use crate::{
    abstract_trait::{
        product::{
            repository::{DynProductCommandRepository, DynProductQueryRepository},
            service::{DynProductCommandService, DynProductQueryService},
        },
        stock::{
            repository::{DynStockCommandRepository, DynStockQueryRepository},
            service::{DynStockCommandService, DynStockQueryService},
        },
    },
    repository::{
        product::{ProductCommandRepository, ProductQueryRepository},
        stock::{StockCommandRepository, StockQueryRepository},
    },
    service::{
        product::{ProductCommandService, ProductQueryService},
        stock::{StockCommandService, StockQueryService},
    },
};
use prometheus_client::registry::Registry;
use shared::{config::ConnectionPool, utils::LedgerMetrics};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub stock_query: DynStockQueryService,
    pub stock_command: DynStockCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .field("stock_query", &"StockQueryService")
            .field("stock_command", &"StockCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, registry: &mut Registry) -> Self {
        let product_query_repo: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repo: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(pool.clone()));
        let stock_query_repo: DynStockQueryRepository =
            Arc::new(StockQueryRepository::new(pool.clone()));
        let stock_command_repo: DynStockCommandRepository =
            Arc::new(StockCommandRepository::new(pool));

        let metrics = LedgerMetrics::new();
        metrics.register(registry);

        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(product_query_repo.clone()));

        let product_command: DynProductCommandService =
            Arc::new(ProductCommandService::new(product_command_repo));

        let stock_query: DynStockQueryService = Arc::new(StockQueryService::new(
            stock_query_repo,
            product_query_repo,
            metrics.clone(),
        ));

        let stock_command: DynStockCommandService =
            Arc::new(StockCommandService::new(stock_command_repo, metrics));

        Self {
            product_query,
            product_command,
            stock_query,
            stock_command,
        }
    }
}
