use crate::{
    abstract_trait::stock::{
        repository::DynStockCommandRepository, service::StockCommandServiceTrait,
    },
    domain::{
        requests::RecordMovementRequest,
        response::{api::ApiResponse, stock::StockMovementResponse},
    },
    model::MovementType,
};
use async_trait::async_trait;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{LedgerMetrics, MovementKind, MovementOutcome},
};
use tracing::{error, info, warn};

/// Serialization conflicts are transient; anything still failing after
/// this many attempts is surfaced to the caller.
const MAX_CONFLICT_RETRIES: u32 = 3;

#[derive(Clone)]
pub struct StockCommandService {
    command: DynStockCommandRepository,
    metrics: LedgerMetrics,
}

impl StockCommandService {
    pub fn new(command: DynStockCommandRepository, metrics: LedgerMetrics) -> Self {
        Self { command, metrics }
    }
}

#[async_trait]
impl StockCommandServiceTrait for StockCommandService {
    async fn record_movement(
        &self,
        req: &RecordMovementRequest,
    ) -> Result<ApiResponse<StockMovementResponse>, ServiceError> {
        if req.quantity <= 0 {
            return Err(ServiceError::Validation(vec![
                "quantity must be positive".to_string(),
            ]));
        }

        let kind = match req.movement_type {
            MovementType::Entrada => MovementKind::Entrada,
            MovementType::Saida => MovementKind::Saida,
        };

        info!(
            "📦 Recording {} of {} for product {}",
            req.movement_type, req.quantity, req.product_id
        );

        let mut attempt = 0;
        let movement = loop {
            match self.command.record_movement(req).await {
                Ok(movement) => break movement,
                Err(RepositoryError::Conflict(reason)) if attempt < MAX_CONFLICT_RETRIES => {
                    attempt += 1;
                    self.metrics.conflict_retries_total.inc();
                    warn!(
                        "⚠️ Movement conflict for product {} (attempt {attempt}): {reason}",
                        req.product_id
                    );
                }
                Err(RepositoryError::InsufficientStock { available }) => {
                    self.metrics.insufficient_stock_total.inc();
                    self.metrics
                        .record_movement(kind.clone(), MovementOutcome::Rejected);
                    error!(
                        "❌ Insufficient stock for product {}: {available} available, {} requested",
                        req.product_id, req.quantity
                    );
                    return Err(ServiceError::Repo(RepositoryError::InsufficientStock {
                        available,
                    }));
                }
                Err(err) => {
                    self.metrics
                        .record_movement(kind.clone(), MovementOutcome::Failed);
                    error!(
                        "❌ Failed to record movement for product {}: {err}",
                        req.product_id
                    );
                    return Err(ServiceError::Repo(err));
                }
            }
        };

        self.metrics.record_movement(kind, MovementOutcome::Recorded);
        info!(
            "✅ Recorded {} movement {} for product {}",
            req.movement_type, movement.movement_id, movement.product_id
        );

        Ok(ApiResponse {
            status: "success".into(),
            message: "Movement recorded successfully".into(),
            data: movement.into(),
        })
    }
}
