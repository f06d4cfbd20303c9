//! Domain models
//!
//! Plain data structs. Persistence lives in [`crate::db`].

pub mod recipe;

pub use recipe::{Recipe, RecipeDraft, RecipeFields, MAX_NAME_LEN};
