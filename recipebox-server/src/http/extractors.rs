//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Form;

use super::error::ApiError;
use crate::models::RecipeFields;

/// Recipe id from the `{id}` path segment.
///
/// Only plain decimal digits that fit an `i32` match. Anything else (signs,
/// letters, overflow) is answered like an unknown route: 404.
pub struct RecipeId(pub i32);

impl<S> FromRequestParts<S> for RecipeId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::NotFound {
                resource: "route",
                id: e.body_text(),
            })?;

        parse_id(&raw).map(Self).ok_or(ApiError::NotFound {
            resource: "route",
            id: raw,
        })
    }
}

fn parse_id(raw: &str) -> Option<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// URL-encoded `name`/`description` form body.
///
/// Missing fields are kept as `None`. A body that cannot be read as a form
/// at all is an internal failure, not a client error class of its own.
pub struct RecipeForm(pub RecipeFields);

impl<S> FromRequest<S> for RecipeForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(fields) = Form::<RecipeFields>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Internal {
                message: format!("unreadable form body: {}", e.body_text()),
            })?;

        Ok(Self(fields))
    }
}
