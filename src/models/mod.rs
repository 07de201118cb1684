mod expense;
mod forms;
mod saving;
mod user;

pub use expense::Expense;
pub use forms::{Credentials, ExpenseInput, SavingsInput, SavingsUpdate};
pub use saving::SavingsGoal;
pub use user::User;
