use crate::{
    abstract_trait::stock::service::{DynStockCommandService, DynStockQueryService},
    domain::{
        requests::RecordMovementRequest,
        response::{api::ApiResponse, product::ProductResponse, stock::StockMovementResponse},
    },
    middleware::ValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/stock/movements",
    tag = "Stock",
    request_body = RecordMovementRequest,
    responses(
        (status = 201, description = "Movement recorded", body = ApiResponse<StockMovementResponse>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Insufficient stock"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn record_movement(
    Extension(service): Extension<DynStockCommandService>,
    ValidatedJson(body): ValidatedJson<RecordMovementRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.record_movement(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/stock/low",
    tag = "Stock",
    responses(
        (status = 200, description = "Products below minimum stock", body = ApiResponse<Vec<ProductResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_low_stock(
    Extension(service): Extension<DynStockQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_low_stock().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/movements",
    tag = "Stock",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Movement history, oldest first", body = ApiResponse<Vec<StockMovementResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_product_movements(
    Extension(service): Extension<DynStockQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_movements(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn stock_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/stock/movements", post(record_movement))
        .route("/api/stock/low", get(get_low_stock))
        .route("/api/products/{id}/movements", get(get_product_movements))
        .layer(Extension(app_state.di_container.stock_query.clone()))
        .layer(Extension(app_state.di_container.stock_command.clone()))
}
