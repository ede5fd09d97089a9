mod product;
mod stock;

pub use self::product::{CreateProductRequest, FindAllProducts, UpdateProductRequest};
pub use self::stock::RecordMovementRequest;
