//! API error type with IntoResponse
//!
//! Only two bodies ever leave the server on failure:
//! `{"message": "Resource not found"}` with 404 and
//! `{"message": "There is a problem"}` with 500. Details go to the log.

use std::any::Any;

use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

pub const NOT_FOUND_MESSAGE: &str = "Resource not found";
pub const INTERNAL_MESSAGE: &str = "There is a problem";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Resource or route not found (404)
    NotFound { resource: &'static str, id: String },

    /// Storage failure or constraint violation (500, logged)
    Database(DbError),

    /// Anything else that went wrong while handling (500, logged)
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "not found");
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE)
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE)
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

/// Fallback for paths no route matches.
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        resource: "route",
        id: uri.path().to_owned(),
    }
}

/// Turns a handler panic into the generic 500 body.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "handler panicked".to_owned()
    };

    ApiError::Internal {
        message: format!("panic: {message}"),
    }
    .into_response()
}
