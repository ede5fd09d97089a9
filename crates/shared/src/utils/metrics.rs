use prometheus_client::metrics::{counter::Counter, family::Family, gauge::Gauge};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};

#[derive(Debug, Clone, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum MovementKind {
    Entrada,
    Saida,
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum MovementOutcome {
    Recorded,
    Rejected,
    Failed,
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct MovementLabels {
    pub kind: MovementKind,
    pub outcome: MovementOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct LedgerMetrics {
    pub movements_total: Family<MovementLabels, Counter>,
    pub insufficient_stock_total: Counter,
    pub conflict_retries_total: Counter,
    pub low_stock_products: Gauge,
}

impl LedgerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "stock_movements",
            "Stock movements by kind and outcome",
            self.movements_total.clone(),
        );

        registry.register(
            "insufficient_stock_rejections",
            "Outbound movements rejected because stock would go negative",
            self.insufficient_stock_total.clone(),
        );

        registry.register(
            "movement_conflict_retries",
            "Movement transactions retried after a serialization conflict",
            self.conflict_retries_total.clone(),
        );

        registry.register(
            "low_stock_products",
            "Products below their minimum stock at last query",
            self.low_stock_products.clone(),
        );
    }

    pub fn record_movement(&self, kind: MovementKind, outcome: MovementOutcome) {
        self.movements_total
            .get_or_create(&MovementLabels { kind, outcome })
            .inc();
    }
}
