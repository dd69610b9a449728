//! Request extractors whose rejections use the `JsonApiError` body.

use axum::{
    async_trait,
    extract::{rejection::{JsonRejection, PathRejection}, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};

use crate::errors::JsonApiError;

pub const INVALID_BODY: &str = "Invalid request body";
pub const INVALID_PATH: &str = "Invalid path parameter";

/// `Json<T>` with a JSON error payload on rejection (status kept from axum: 400/415/422).
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| JsonApiError::new(e.status(), INVALID_BODY, Some(e.body_text())))?;
        Ok(Self(value))
    }
}

/// `Path<T>` with a JSON error payload on rejection.
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| JsonApiError::new(e.status(), INVALID_PATH, Some(e.body_text())))?;
        Ok(Self(value))
    }
}
