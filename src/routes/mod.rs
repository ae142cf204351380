mod bakery;
mod ops;

pub use bakery::bakery_routes;
pub use ops::ops_routes;

use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application: operational routes, the bakery API, body limit and request tracing.
pub fn app(state: AppState, config: &Config) -> Router {
    Router::new()
        .merge(ops_routes(state.clone()))
        .merge(bakery_routes(state))
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
