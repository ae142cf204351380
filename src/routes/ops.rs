//! Liveness and readiness checks for process supervisors.

use crate::migration::missing_tables;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing_tables: Vec<&'static str>,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Ready once the database answers and both tables have been migrated.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    let (status, body) = match missing_tables(&state.pool).await {
        Ok(missing) if missing.is_empty() => (
            StatusCode::OK,
            ReadyBody {
                status: "ok",
                database: "ok",
                missing_tables: missing,
            },
        ),
        Ok(missing) => {
            tracing::warn!(?missing, "schema not migrated");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ReadyBody {
                    status: "degraded",
                    database: "ok",
                    missing_tables: missing,
                },
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ReadyBody {
                    status: "degraded",
                    database: "unavailable",
                    missing_tables: Vec::new(),
                },
            )
        }
    };
    (status, Json(body))
}

/// GET /health and GET /ready.
pub fn ops_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .with_state(state)
}
