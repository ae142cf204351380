//! Bakery and baked good routes.

use crate::handlers::{
    baked_goods_by_price, create_baked_good, delete_baked_good, get_bakery, home, list_bakeries,
    most_expensive_baked_good, update_bakery,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get},
    Router,
};

pub fn bakery_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/bakeries", get(list_bakeries).post(create_baked_good))
        .route("/bakeries/:id", get(get_bakery).patch(update_bakery))
        .route("/baked_goods/by_price", get(baked_goods_by_price))
        .route("/baked_goods/most_expensive", get(most_expensive_baked_good))
        .route("/baked_goods/:id", delete(delete_baked_good))
        .with_state(state)
}
