//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use crate::shared::error::AppError;

/// JSON body extractor that reports every rejection as a 400.
///
/// Axum's stock `Json` extractor splits rejections between 400 and 422;
/// this API treats any undecodable body as a bad request.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Ok(Self(value))
    }
}
