use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::errors::AppResult;
use crate::middleware::CurrentUser;
use crate::models::{SavingsInput, SavingsUpdate};
use crate::AppState;

pub async fn list_savings(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
) -> AppResult<Json<Value>> {
    let rows = state.store.list_savings(user_id).await?;
    Ok(Json(json!({ "data": rows })))
}

pub async fn create_saving(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Json(input): Json<SavingsInput>,
) -> AppResult<Json<Value>> {
    state.store.create_saving(user_id, &input).await?;
    Ok(Json(json!({ "message": "success" })))
}

pub async fn update_saving(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(input): Json<SavingsUpdate>,
) -> AppResult<Json<Value>> {
    let rows = state.store.update_saving(user_id, id, &input).await?;
    if rows == 0 {
        tracing::debug!("Savings update matched no rows: id={} user_id={}", id, user_id);
    }
    Ok(Json(json!({ "message": "updated" })))
}

pub async fn delete_saving(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    let rows = state.store.delete_saving(user_id, id).await?;
    if rows == 0 {
        tracing::debug!("Savings delete matched no rows: id={} user_id={}", id, user_id);
    }
    Ok(Json(json!({ "message": "deleted" })))
}
