use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct SavingsGoal {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
}
