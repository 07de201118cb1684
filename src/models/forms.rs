use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ExpenseInput {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct SavingsInput {
    pub title: String,
    pub target_amount: Decimal,
    // Defaults to zero when the client omits it
    pub current_amount: Option<Decimal>,
}

// Updates replace all three fields, so none may be omitted; otherwise a PUT
// without current_amount would silently reset saved progress to zero.
#[derive(Debug, Deserialize)]
pub struct SavingsUpdate {
    pub title: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
}
