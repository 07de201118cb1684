mod auth;
mod expenses;
mod savings;

pub use auth::{handle_login, handle_logout, handle_register, handle_upgrade, session_probe};
pub use expenses::{create_expense, delete_expense, list_expenses, update_expense};
pub use savings::{create_saving, delete_saving, list_savings, update_saving};
