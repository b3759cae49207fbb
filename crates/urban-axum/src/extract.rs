//! Request extractors that reject with `HttpError`.
//!
//! The body extractors read the raw body into a JSON value first so the
//! pre-decode passes see exactly what the client sent. An empty body is
//! treated as JSON `null`. `ApiPath` and `ApiQuery` wrap axum's own
//! extractors so that bad path or query values also answer with a JSON
//! error body.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::Value;
use urban_core::validation::{PatchRequest, Validate, parse_patch, parse_request};

use crate::error::HttpError;

/// Create or replace body: decoded, then validated.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

/// Patch body: rejected when empty or when any key is `null`, then decoded
/// and validated.
#[derive(Debug, Clone)]
pub struct PatchJson<T>(pub T);

async fn read_body<S: Send + Sync>(req: Request, state: &S) -> Result<Value, HttpError> {
    let bytes = Bytes::from_request(req, state)
        .await
        .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::debug!(target: "urban.http", error = %e, "malformed JSON body");
        HttpError::UnprocessableEntity(format!("malformed JSON body: {e}"))
    })
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = read_body(req, state).await?;
        Ok(Self(parse_request(body)?))
    }
}

impl<S, T> FromRequest<S> for PatchJson<T>
where
    S: Send + Sync,
    T: PatchRequest + Send,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = read_body(req, state).await?;
        Ok(Self(parse_patch(body)?))
    }
}

/// Path parameters; a value that fails to parse answers 400.
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

/// Query string; a value that fails to parse answers 400.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
