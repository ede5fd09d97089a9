mod command;
mod query;

pub use self::command::{DynStockCommandService, StockCommandServiceTrait};
pub use self::query::{DynStockQueryService, StockQueryServiceTrait};
