//! Input extractors for procedure handlers.
//!
//! Wrap axum's `Json` and `Query` so that malformed or ill-typed input is
//! reported as a `VALIDATION_ERROR` body instead of axum's plain-text
//! rejection.

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body input for mutations.
#[derive(Debug, Clone, Copy, Default)]
pub struct RpcJson<T>(pub T);

impl<T, S> FromRequest<S> for RpcJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(RpcJson(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// Query-string input for queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct RpcQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for RpcQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(RpcQuery(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}
