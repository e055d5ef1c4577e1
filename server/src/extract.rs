//! JSON body extractor that ignores `Content-Type`.
//!
//! axum's `Json` extractor rejects requests without an `application/json`
//! content type and answers data errors with 422. This service decodes any
//! body as JSON and reports every decode failure as 400.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Request body decoded from JSON.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;
        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::MalformedBody(e.to_string()))
    }
}
