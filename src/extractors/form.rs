//! Form-encoded body extractor with JSON error responses.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Body,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderValue},
    Form,
};
use serde::de::DeserializeOwned;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Like `axum::Form`, but a missing or malformed field is rejected with
/// `400 {"error": "..."}` instead of a plain-text body.
///
/// A request with neither a body nor a `Content-Type` reads as an empty form,
/// so a bare `PATCH` behaves like one that sends no fields.
#[derive(Clone, Debug)]
pub struct FormInput<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for FormInput<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let req = if req.headers().contains_key(CONTENT_TYPE) {
            req
        } else {
            let (mut parts, body) = req.into_parts();
            let bytes = axum::body::to_bytes(body, usize::MAX)
                .await
                .map_err(|e| AppError::BadRequest(format!("failed to read request body: {}", e)))?;
            if !bytes.is_empty() {
                return Err(AppError::BadRequest(format!(
                    "Form requests must have `Content-Type: {}`",
                    FORM_CONTENT_TYPE
                )));
            }
            parts
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
            Request::from_parts(parts, Body::empty())
        };

        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(FormInput(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}
