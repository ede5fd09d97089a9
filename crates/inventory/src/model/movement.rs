use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Direction of a stock movement. Stored unaccented; the accented
/// spelling `saída` is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    Entrada,
    #[serde(alias = "saída")]
    Saida,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Entrada => "entrada",
            MovementType::Saida => "saida",
        }
    }

    /// Signed multiplier applied to the movement quantity when summing
    /// the ledger.
    pub fn sign(&self) -> i32 {
        match self {
            MovementType::Entrada => 1,
            MovementType::Saida => -1,
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entrada" => Ok(MovementType::Entrada),
            "saida" | "saída" => Ok(MovementType::Saida),
            other => Err(format!("unknown movement type '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StockMovement {
    pub movement_id: i32,
    pub product_id: i32,
    pub movement_type: String,
    pub quantity: i32,
    pub user_id: Option<i32>,
    pub created_at: NaiveDateTime,
}
