//! In-memory recipe repository
//!
//! Mirrors the Postgres table closely enough for handler tests: ids start at
//! 1 and are never reused, and the not-null and length constraints of the
//! schema are enforced on save.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::recipes::{DbError, RecipeStore};
use crate::models::{Recipe, RecipeDraft, MAX_NAME_LEN};

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Recipe>,
}

/// Recipe repository held in process memory
#[derive(Default)]
pub struct MemoryRecipeStore {
    table: RwLock<Table>,
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn required(value: Option<String>, column: &str) -> Result<String, DbError> {
    value.ok_or_else(|| DbError::Constraint {
        reason: format!("null value in column \"{column}\" of relation \"recipe\""),
    })
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn get_all(&self) -> Result<Vec<Recipe>, DbError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Recipe, DbError> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::recipe_not_found(id))
    }

    async fn save(&self, draft: RecipeDraft) -> Result<Recipe, DbError> {
        let name = required(draft.name, "name")?;
        let description = required(draft.description, "description")?;
        if name.chars().count() > MAX_NAME_LEN {
            return Err(DbError::Constraint {
                reason: format!("value too long for type character varying({MAX_NAME_LEN})"),
            });
        }

        let mut table = self.table.write().await;
        let id = match draft.id {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(id) => return Err(DbError::recipe_not_found(id)),
            None => {
                table.last_id += 1;
                table.last_id
            }
        };

        let recipe = Recipe {
            id,
            name,
            description,
        };
        table.rows.insert(id, recipe.clone());
        Ok(recipe)
    }

    async fn delete(&self, recipe: &Recipe) -> Result<(), DbError> {
        self.table
            .write()
            .await
            .rows
            .remove(&recipe.id)
            .map(|_| ())
            .ok_or_else(|| DbError::recipe_not_found(recipe.id))
    }
}
