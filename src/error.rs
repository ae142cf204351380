//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {message}")]
    InvalidVar { var: &'static str, message: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

pub const BAKERY_NOT_FOUND: &str = "Bakery not found";
pub const BAKED_GOOD_NOT_FOUND: &str = "Baked good not found";
pub const NO_BAKED_GOODS: &str = "No baked goods found";

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Db(e) if is_foreign_key_violation(e) => StatusCode::NOT_FOUND,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Internal failures are logged and replaced by a generic text.
    fn public_message(&self) -> String {
        match self {
            AppError::NotFound(msg) => (*msg).to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            // Only baked_goods.bakery_id carries a foreign key.
            AppError::Db(e) if is_foreign_key_violation(e) => BAKERY_NOT_FOUND.to_string(),
            AppError::Config(_) | AppError::Db(_) => "internal server error".to_string(),
        }
    }
}

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|d| d.is_foreign_key_violation())
        .unwrap_or(false)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_exact_message() {
        let err = AppError::NotFound(BAKERY_NOT_FOUND);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Bakery not found");
    }

    #[test]
    fn database_errors_are_not_leaked() {
        let err = AppError::Db(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "internal server error");
    }

    #[test]
    fn missing_row_is_an_internal_error() {
        let err = AppError::Db(sqlx::Error::RowNotFound);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "internal server error");
    }

    #[test]
    fn bad_request_maps_to_400() {
        let err = AppError::BadRequest("invalid id: abc".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "invalid id: abc");
    }
}
