use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::config::DatabaseConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{Expense, ExpenseInput, SavingsGoal, SavingsInput, SavingsUpdate, User};
use crate::services::Store;

/// MySQL-backed store. All statements are parameterized; each method is a
/// single statement, so consistency is whatever the server's per-statement
/// atomicity provides.
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url())
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id BIGINT AUTO_INCREMENT PRIMARY KEY,
                username VARCHAR(255) NOT NULL UNIQUE,
                password_hash VARCHAR(255) NOT NULL,
                is_pro BOOLEAN NOT NULL DEFAULT FALSE
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS expenses (
                id BIGINT AUTO_INCREMENT PRIMARY KEY,
                user_id BIGINT NOT NULL,
                description TEXT NOT NULL,
                amount DECIMAL(12,2) NOT NULL,
                category VARCHAR(100) NOT NULL,
                date DATE NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users(id)
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS savings_goals (
                id BIGINT AUTO_INCREMENT PRIMARY KEY,
                user_id BIGINT NOT NULL,
                title VARCHAR(255) NOT NULL,
                target_amount DECIMAL(12,2) NOT NULL,
                current_amount DECIMAL(12,2) NOT NULL DEFAULT 0,
                FOREIGN KEY (user_id) REFERENCES users(id)
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl Store for MySqlStore {
    async fn create_user(&self, username: &str, password_hash: &str) -> AppResult<()> {
        sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|err| match err {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => AppError::Conflict,
                other => AppError::Database(other),
            })?;
        Ok(())
    }

    async fn find_user(&self, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, is_pro FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn set_pro(&self, user_id: i64) -> AppResult<()> {
        sqlx::query("UPDATE users SET is_pro = TRUE WHERE id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_expenses(&self, user_id: i64) -> AppResult<Vec<Expense>> {
        let rows = sqlx::query_as::<_, Expense>(
            "SELECT id, user_id, description, amount, category, date
             FROM expenses WHERE user_id = ? ORDER BY date DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create_expense(
        &self,
        user_id: i64,
        input: &ExpenseInput,
        date: NaiveDate,
    ) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO expenses (description, amount, category, date, user_id)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&input.description)
        .bind(input.amount)
        .bind(&input.category)
        .bind(date)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_expense(&self, user_id: i64, id: i64, input: &ExpenseInput) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE expenses SET description = ?, amount = ?, category = ?
             WHERE id = ? AND user_id = ?",
        )
        .bind(&input.description)
        .bind(input.amount)
        .bind(&input.category)
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_expense(&self, user_id: i64, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_savings(&self, user_id: i64) -> AppResult<Vec<SavingsGoal>> {
        let rows = sqlx::query_as::<_, SavingsGoal>(
            "SELECT id, user_id, title, target_amount, current_amount
             FROM savings_goals WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create_saving(&self, user_id: i64, input: &SavingsInput) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO savings_goals (title, target_amount, current_amount, user_id)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&input.title)
        .bind(input.target_amount)
        .bind(input.current_amount.unwrap_or(Decimal::ZERO))
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_saving(&self, user_id: i64, id: i64, input: &SavingsUpdate) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE savings_goals SET title = ?, target_amount = ?, current_amount = ?
             WHERE id = ? AND user_id = ?",
        )
        .bind(&input.title)
        .bind(input.target_amount)
        .bind(input.current_amount)
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_saving(&self, user_id: i64, id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM savings_goals WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
