//! Recipe repository
//!
//! - get_all: single SELECT ordered by id
//! - save: INSERT or UPDATE ... RETURNING inside a transaction
//! - delete: DELETE inside a transaction, zero rows means not found

use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::PgPool;

use crate::models::{Recipe, RecipeDraft};

/// Postgres SQLSTATE for a value too long for its column.
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("constraint violation: {reason}")]
    Constraint { reason: String },

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn recipe_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "recipe",
            id: id.to_string(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            let truncated = db.code().as_deref() == Some(STRING_DATA_RIGHT_TRUNCATION);
            if truncated
                || matches!(db.kind(), ErrorKind::NotNullViolation | ErrorKind::CheckViolation)
            {
                return Self::Constraint {
                    reason: db.message().to_owned(),
                };
            }
        }
        Self::Sqlx(e)
    }
}

/// Storage operations for recipes.
///
/// Implementations hold no per-request state; each call stands alone.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Every recipe, empty if there are none.
    async fn get_all(&self) -> Result<Vec<Recipe>, DbError>;

    /// The recipe with `id`, or [`DbError::NotFound`].
    async fn get_by_id(&self, id: i32) -> Result<Recipe, DbError>;

    /// Insert a new draft or overwrite an existing row, returning what was stored.
    async fn save(&self, draft: RecipeDraft) -> Result<Recipe, DbError>;

    /// Remove the row backing `recipe`.
    async fn delete(&self, recipe: &Recipe) -> Result<(), DbError>;
}

/// Postgres-backed recipe repository
#[derive(Clone)]
pub struct PgRecipeStore {
    pool: PgPool,
}

impl PgRecipeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    async fn get_all(&self) -> Result<Vec<Recipe>, DbError> {
        let recipes = sqlx::query_as::<_, Recipe>(
            "SELECT id, name, description FROM recipe ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(recipes)
    }

    async fn get_by_id(&self, id: i32) -> Result<Recipe, DbError> {
        sqlx::query_as::<_, Recipe>("SELECT id, name, description FROM recipe WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::recipe_not_found(id))
    }

    async fn save(&self, draft: RecipeDraft) -> Result<Recipe, DbError> {
        // Dropping `tx` on any early return rolls it back.
        let mut tx = self.pool.begin().await?;

        let recipe = match draft.id {
            None => {
                sqlx::query_as::<_, Recipe>(
                    r#"
                    INSERT INTO recipe (name, description)
                    VALUES ($1, $2)
                    RETURNING id, name, description
                    "#,
                )
                .bind(draft.name)
                .bind(draft.description)
                .fetch_one(&mut *tx)
                .await?
            }
            Some(id) => sqlx::query_as::<_, Recipe>(
                r#"
                UPDATE recipe
                SET name = $2, description = $3
                WHERE id = $1
                RETURNING id, name, description
                "#,
            )
            .bind(id)
            .bind(draft.name)
            .bind(draft.description)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::recipe_not_found(id))?,
        };

        tx.commit().await?;
        tracing::debug!(recipe_id = recipe.id, "recipe saved");
        Ok(recipe)
    }

    async fn delete(&self, recipe: &Recipe) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM recipe WHERE id = $1")
            .bind(recipe.id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::recipe_not_found(recipe.id));
        }

        tx.commit().await?;
        tracing::debug!(recipe_id = recipe.id, "recipe deleted");
        Ok(())
    }
}
