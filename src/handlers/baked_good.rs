//! `/baked_goods` handlers.

use super::parse_id;
use crate::error::{AppError, BAKED_GOOD_NOT_FOUND, NO_BAKED_GOODS};
use crate::response::{success_message, success_ok};
use crate::service::BakedGoodService;
use crate::state::AppState;
use axum::extract::{Path, State};

/// GET /baked_goods/by_price
pub async fn baked_goods_by_price(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let goods = BakedGoodService::list_by_price(&state.pool).await?;
    Ok(success_ok(goods))
}

/// GET /baked_goods/most_expensive
pub async fn most_expensive_baked_good(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let good = BakedGoodService::most_expensive(&state.pool)
        .await?
        .ok_or(AppError::NotFound(NO_BAKED_GOODS))?;
    Ok(success_ok(good))
}

/// DELETE /baked_goods/:id
pub async fn delete_baked_good(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !BakedGoodService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(BAKED_GOOD_NOT_FOUND));
    }
    Ok(success_message("Baked good successfully deleted"))
}
