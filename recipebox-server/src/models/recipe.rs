//! Recipe entity
//!
//! `Recipe` is a stored row and doubles as the JSON shape returned by every
//! endpoint: `{"id", "name", "description"}`. `RecipeDraft` is a recipe that
//! has not been written yet, carrying the raw form values untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Maximum length of a recipe name, matching the `VARCHAR(255)` column.
pub const MAX_NAME_LEN: usize = 255;

/// Recipe row from the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Form fields accepted by create and update.
///
/// Absent fields stay `None` and reach storage as NULL, where the not-null
/// constraint rejects them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecipeFields {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Unsaved recipe handed to [`crate::db::RecipeStore::save`].
///
/// No `id` means insert; an `id` means update that row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl RecipeDraft {
    /// Draft for a recipe that does not exist yet.
    pub fn new(fields: RecipeFields) -> Self {
        Self {
            id: None,
            name: fields.name,
            description: fields.description,
        }
    }

    /// Full overwrite of an existing recipe. Both fields are replaced,
    /// including with `None`; the id is kept.
    pub fn overwrite(recipe: &Recipe, fields: RecipeFields) -> Self {
        Self {
            id: Some(recipe.id),
            name: fields.name,
            description: fields.description,
        }
    }
}
