//! `/bakeries` handlers: list, read and rename bakeries; create baked goods.

use super::parse_id;
use crate::error::{AppError, BAKERY_NOT_FOUND};
use crate::extractors::FormInput;
use crate::models::{BakeryUpdate, NewBakedGood};
use crate::response::{success_created, success_ok};
use crate::service::{BakedGoodService, BakeryService};
use crate::state::AppState;
use axum::extract::{Path, State};

/// GET /bakeries
pub async fn list_bakeries(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let bakeries = BakeryService::list(&state.pool).await?;
    Ok(success_ok(bakeries))
}

/// POST /bakeries: form fields `name`, `price`, `bakery_id`. Creates a baked good.
pub async fn create_baked_good(
    State(state): State<AppState>,
    FormInput(input): FormInput<NewBakedGood>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let created = BakedGoodService::create(&state.pool, &input).await?;
    Ok(success_created(created))
}

/// GET /bakeries/:id
pub async fn get_bakery(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let bakery = BakeryService::read(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(BAKERY_NOT_FOUND))?;
    Ok(success_ok(bakery))
}

/// PATCH /bakeries/:id: optional form field `name`.
pub async fn update_bakery(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    FormInput(update): FormInput<BakeryUpdate>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let bakery = BakeryService::update_name(&state.pool, id, update.name.as_deref())
        .await?
        .ok_or(AppError::NotFound(BAKERY_NOT_FOUND))?;
    Ok(success_ok(bakery))
}
