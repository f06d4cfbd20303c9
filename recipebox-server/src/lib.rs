//! recipebox-server: HTTP API for a single recipe resource
//!
//! Route handlers delegate to a [`db::RecipeStore`] and answer with JSON.
//! Storage is Postgres in production and an in-memory store in tests.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryRecipeStore, PgRecipeStore, RecipeStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
pub use models::{Recipe, RecipeDraft, RecipeFields};
