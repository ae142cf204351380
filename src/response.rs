//! Response helpers: status code paired with a JSON body.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

pub fn success_ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn success_created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn success_message(message: &'static str) -> (StatusCode, Json<MessageBody>) {
    (StatusCode::OK, Json(MessageBody { message }))
}
