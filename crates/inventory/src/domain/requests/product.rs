use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Parafuso M6")]
    pub name: String,

    #[schema(example = "Caixa com 100 unidades")]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Minimum stock cannot be negative"))]
    #[schema(example = 5)]
    pub min_stock: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    pub id: Option<i32>,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0, message = "Minimum stock cannot be negative"))]
    pub min_stock: Option<i32>,
}
