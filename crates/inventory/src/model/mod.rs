mod movement;
mod product;

pub use self::movement::{MovementType, StockMovement};
pub use self::product::Product;
