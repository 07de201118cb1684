use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::Utc;
use serde_json::{json, Value};

use crate::errors::AppResult;
use crate::middleware::CurrentUser;
use crate::models::ExpenseInput;
use crate::AppState;

pub async fn list_expenses(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
) -> AppResult<Json<Value>> {
    let rows = state.store.list_expenses(user_id).await?;
    Ok(Json(json!({ "data": rows })))
}

pub async fn create_expense(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Json(input): Json<ExpenseInput>,
) -> AppResult<Json<Value>> {
    // Date defaults to today at the UTC day boundary
    let date = Utc::now().date_naive();
    state.store.create_expense(user_id, &input, date).await?;
    Ok(Json(json!({ "message": "success" })))
}

pub async fn update_expense(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(input): Json<ExpenseInput>,
) -> AppResult<Json<Value>> {
    let rows = state.store.update_expense(user_id, id, &input).await?;
    if rows == 0 {
        // Not owned or not present; reported as success either way
        tracing::debug!("Expense update matched no rows: id={} user_id={}", id, user_id);
    }
    Ok(Json(json!({ "message": "updated" })))
}

pub async fn delete_expense(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let rows = state.store.delete_expense(user_id, id).await?;
    if rows == 0 {
        tracing::debug!("Expense delete matched no rows: id={} user_id={}", id, user_id);
    }
    Ok(Json(json!({ "message": "deleted" })))
}
