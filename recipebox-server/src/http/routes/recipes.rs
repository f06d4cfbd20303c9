//! Recipe endpoints
//!
//! | Method | Path            | Success                          |
//! |--------|-----------------|----------------------------------|
//! | GET    | /recipes        | 200, array of recipes            |
//! | POST   | /recipes        | 201, created recipe              |
//! | GET    | /recipes/{id}   | 200, recipe                      |
//! | PUT    | /recipes/{id}   | 200, updated recipe              |
//! | DELETE | /recipes/{id}   | 204, `{"message": "Deleted"}`    |

use axum::{
    extract::{FromRequest, Request, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{RecipeForm, RecipeId};
use crate::http::server::AppState;
use crate::models::{Recipe, RecipeDraft};

/// Plain message body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /recipes - list all recipes
async fn list_recipes(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>, ApiError> {
    let recipes = state.recipes.get_all().await?;
    Ok(Json(recipes))
}

/// POST /recipes - create a recipe from form fields
async fn create_recipe(
    State(state): State<AppState>,
    RecipeForm(fields): RecipeForm,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let recipe = state.recipes.save(RecipeDraft::new(fields)).await?;
    tracing::info!(recipe_id = recipe.id, "recipe created");

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// GET /recipes/{id} - get a single recipe
async fn get_recipe(
    State(state): State<AppState>,
    RecipeId(id): RecipeId,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = state.recipes.get_by_id(id).await?;
    Ok(Json(recipe))
}

/// PUT /recipes/{id} - overwrite name and description
///
/// The recipe is looked up before the body is read, so a missing id is a
/// 404 whatever the body holds.
async fn update_recipe(
    State(state): State<AppState>,
    RecipeId(id): RecipeId,
    req: Request,
) -> Result<Json<Recipe>, ApiError> {
    let existing = state.recipes.get_by_id(id).await?;
    let RecipeForm(fields) = RecipeForm::from_request(req, &state).await?;
    let recipe = state
        .recipes
        .save(RecipeDraft::overwrite(&existing, fields))
        .await?;
    tracing::info!(recipe_id = recipe.id, "recipe updated");

    Ok(Json(recipe))
}

/// DELETE /recipes/{id} - remove a recipe
///
/// The status is 204 but a JSON body is still attached, as existing clients
/// expect it.
async fn delete_recipe(
    State(state): State<AppState>,
    RecipeId(id): RecipeId,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let recipe = state.recipes.get_by_id(id).await?;
    state.recipes.delete(&recipe).await?;
    tracing::info!(recipe_id = id, "recipe deleted");

    Ok((
        StatusCode::NO_CONTENT,
        Json(MessageResponse {
            message: "Deleted".to_owned(),
        }),
    ))
}

/// Recipe routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/recipes/{id}",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;
    use crate::db::{DbError, RecipeStore};
    use crate::http::build_router;

    /// Store whose every call fails with a storage error.
    struct BrokenStore;

    #[async_trait]
    impl RecipeStore for BrokenStore {
        async fn get_all(&self) -> Result<Vec<Recipe>, DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
        }

        async fn get_by_id(&self, _id: i32) -> Result<Recipe, DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
        }

        async fn save(&self, _draft: RecipeDraft) -> Result<Recipe, DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
        }

        async fn delete(&self, _recipe: &Recipe) -> Result<(), DbError> {
            Err(DbError::Sqlx(sqlx::Error::PoolTimedOut))
        }
    }

    /// Store that panics inside the handler.
    struct PanickingStore;

    #[async_trait]
    impl RecipeStore for PanickingStore {
        async fn get_all(&self) -> Result<Vec<Recipe>, DbError> {
            panic!("storage exploded")
        }

        async fn get_by_id(&self, _id: i32) -> Result<Recipe, DbError> {
            panic!("storage exploded")
        }

        async fn save(&self, _draft: RecipeDraft) -> Result<Recipe, DbError> {
            panic!("storage exploded")
        }

        async fn delete(&self, _recipe: &Recipe) -> Result<(), DbError> {
            panic!("storage exploded")
        }
    }

    async fn get(store: Arc<dyn RecipeStore>, uri: &str) -> (StatusCode, serde_json::Value) {
        let app = build_router(AppState::new(store));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn storage_failure_is_generic_500() {
        let (status, body) = get(Arc::new(BrokenStore), "/recipes").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "There is a problem");
    }

    #[tokio::test]
    async fn storage_failure_on_fetch_is_500_not_404() {
        let (status, _) = get(Arc::new(BrokenStore), "/recipes/1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn handler_panic_is_generic_500() {
        let (status, body) = get(Arc::new(PanickingStore), "/recipes").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "There is a problem");
    }

    #[tokio::test]
    async fn non_integer_id_never_reaches_store() {
        // PanickingStore would turn a store call into a 500
        let (status, body) = get(Arc::new(PanickingStore), "/recipes/abc").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Resource not found");
    }
}
