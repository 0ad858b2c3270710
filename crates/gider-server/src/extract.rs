//! Request body extraction
//!
//! `JsonBody` behaves like axum's `Json` except that a request without a
//! `Content-Type` header is still parsed as JSON. A present but non-JSON
//! content type is rejected with 415 as usual.

use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::header,
    Json,
};
use serde::de::DeserializeOwned;

use crate::AppError;

pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(header::CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(AppError::from_rejection)?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::from_rejection(JsonRejection::from(e)))?;
        let Json(value) = Json::<T>::from_bytes(&bytes).map_err(AppError::from_rejection)?;

        Ok(Self(value))
    }
}
