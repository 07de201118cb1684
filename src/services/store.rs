use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::AppResult;
use crate::models::{Expense, ExpenseInput, SavingsGoal, SavingsInput, SavingsUpdate, User};

/// Persistence interface behind the request handlers.
///
/// The production implementation is [`MySqlStore`](crate::services::MySqlStore);
/// [`InMemoryStore`](crate::services::InMemoryStore) backs the integration
/// tests. Every read and mutation on user-owned rows is scoped by `user_id`,
/// so one user can never observe or affect another user's rows. Update and
/// delete report the number of rows affected; an ownership mismatch is a
/// zero-row no-op, not an error.
#[async_trait]
pub trait Store: Send + Sync {
    // Credential store
    async fn create_user(&self, username: &str, password_hash: &str) -> AppResult<()>;
    async fn find_user(&self, username: &str) -> AppResult<Option<User>>;
    async fn set_pro(&self, user_id: i64) -> AppResult<()>;

    // Expense ledger
    async fn list_expenses(&self, user_id: i64) -> AppResult<Vec<Expense>>;
    async fn create_expense(
        &self,
        user_id: i64,
        input: &ExpenseInput,
        date: NaiveDate,
    ) -> AppResult<()>;
    async fn update_expense(&self, user_id: i64, id: i64, input: &ExpenseInput) -> AppResult<u64>;
    async fn delete_expense(&self, user_id: i64, id: i64) -> AppResult<u64>;

    // Savings goals
    async fn list_savings(&self, user_id: i64) -> AppResult<Vec<SavingsGoal>>;
    async fn create_saving(&self, user_id: i64, input: &SavingsInput) -> AppResult<()>;
    async fn update_saving(&self, user_id: i64, id: i64, input: &SavingsUpdate) -> AppResult<u64>;
    async fn delete_saving(&self, user_id: i64, id: i64) -> AppResult<u64>;

    // No-op liveness probe used by the keep-alive task
    async fn ping(&self) -> AppResult<()>;
}
