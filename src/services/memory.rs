use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::{AppError, AppResult};
use crate::models::{Expense, ExpenseInput, SavingsGoal, SavingsInput, SavingsUpdate, User};
use crate::services::Store;

/// In-memory store with the same ownership-scoping semantics as the MySQL
/// implementation. Used by the integration tests so the full router can be
/// exercised without a database.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    users: Vec<User>,
    expenses: Vec<Expense>,
    savings: Vec<SavingsGoal>,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn create_user(&self, username: &str, password_hash: &str) -> AppResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.iter().any(|u| u.username == username) {
            return Err(AppError::Conflict);
        }
        let id = inner.next_id();
        inner.users.push(User {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            is_pro: false,
        });
        Ok(())
    }

    async fn find_user(&self, username: &str) -> AppResult<Option<User>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.username == username).cloned())
    }

    async fn set_pro(&self, user_id: i64) -> AppResult<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(user) = inner.users.iter_mut().find(|u| u.id == user_id) {
            user.is_pro = true;
        }
        Ok(())
    }

    async fn list_expenses(&self, user_id: i64) -> AppResult<Vec<Expense>> {
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<Expense> = inner
            .expenses
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        // Most recent date first, ties broken by most recently inserted
        rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn create_expense(
        &self,
        user_id: i64,
        input: &ExpenseInput,
        date: NaiveDate,
    ) -> AppResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id();
        inner.expenses.push(Expense {
            id,
            user_id,
            description: input.description.clone(),
            amount: input.amount,
            category: input.category.clone(),
            date,
        });
        Ok(())
    }

    async fn update_expense(&self, user_id: i64, id: i64, input: &ExpenseInput) -> AppResult<u64> {
        let mut inner = self.inner.lock().unwrap();
        match inner
            .expenses
            .iter_mut()
            .find(|e| e.id == id && e.user_id == user_id)
        {
            Some(expense) => {
                expense.description = input.description.clone();
                expense.amount = input.amount;
                expense.category = input.category.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_expense(&self, user_id: i64, id: i64) -> AppResult<u64> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.expenses.len();
        inner.expenses.retain(|e| !(e.id == id && e.user_id == user_id));
        Ok((before - inner.expenses.len()) as u64)
    }

    async fn list_savings(&self, user_id: i64) -> AppResult<Vec<SavingsGoal>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .savings
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_saving(&self, user_id: i64, input: &SavingsInput) -> AppResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id();
        inner.savings.push(SavingsGoal {
            id,
            user_id,
            title: input.title.clone(),
            target_amount: input.target_amount,
            current_amount: input.current_amount.unwrap_or(Decimal::ZERO),
        });
        Ok(())
    }

    async fn update_saving(&self, user_id: i64, id: i64, input: &SavingsUpdate) -> AppResult<u64> {
        let mut inner = self.inner.lock().unwrap();
        match inner
            .savings
            .iter_mut()
            .find(|s| s.id == id && s.user_id == user_id)
        {
            Some(goal) => {
                goal.title = input.title.clone();
                goal.target_amount = input.target_amount;
                goal.current_amount = input.current_amount;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_saving(&self, user_id: i64, id: i64) -> AppResult<u64> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.savings.len();
        inner.savings.retain(|s| !(s.id == id && s.user_id == user_id));
        Ok((before - inner.savings.len()) as u64)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
