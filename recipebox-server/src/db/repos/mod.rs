//! Recipe repositories
//!
//! [`RecipeStore`] is the seam between handlers and storage:
//! - [`PgRecipeStore`] for Postgres
//! - [`MemoryRecipeStore`] for tests and local runs without a database

pub mod memory;
pub mod recipes;

pub use memory::MemoryRecipeStore;
pub use recipes::{DbError, PgRecipeStore, RecipeStore};
