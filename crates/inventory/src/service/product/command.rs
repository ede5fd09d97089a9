use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        response::{api::ApiResponse, product::ProductResponse},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandService {
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let mut errors = Vec::new();

        if req.name.trim().is_empty() {
            errors.push("name must not be empty".to_string());
        }
        if req.min_stock < 0 {
            errors.push("min_stock cannot be negative".to_string());
        }
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let created = self.command.create_product(req).await.map_err(|err| {
            error!("❌ Failed to create product '{}': {err}", req.name);
            ServiceError::Repo(err)
        })?;

        info!("✅ Created product {} '{}'", created.product_id, created.name);

        Ok(ApiResponse {
            status: "success".into(),
            message: "Product created successfully".into(),
            data: created.into(),
        })
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let mut errors = Vec::new();

        if req.id.is_none() {
            errors.push("product id is required".to_string());
        }
        if let Some(name) = &req.name {
            if name.trim().is_empty() {
                errors.push("name must not be empty".to_string());
            }
        }
        if let Some(min_stock) = req.min_stock {
            if min_stock < 0 {
                errors.push("min_stock cannot be negative".to_string());
            }
        }
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let updated = self.command.update_product(req).await.map_err(|err| {
            error!("❌ Failed to update product {:?}: {err}", req.id);
            ServiceError::Repo(err)
        })?;

        info!("🔄 Updated product {}", updated.product_id);

        Ok(ApiResponse {
            status: "success".into(),
            message: "Product updated successfully".into(),
            data: updated.into(),
        })
    }

    async fn delete_product(&self, id: i32) -> Result<ApiResponse<bool>, ServiceError> {
        self.command.delete_product(id).await.map_err(|err| {
            error!("❌ Failed to delete product {id}: {err}");
            ServiceError::Repo(err)
        })?;

        info!("🗑️ Deleted product {id}");

        Ok(ApiResponse {
            status: "success".into(),
            message: "Product deleted successfully".into(),
            data: true,
        })
    }
}
