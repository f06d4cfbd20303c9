//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool, no shared `Connection` behind a lock
//! - Handlers talk to the [`RecipeStore`] trait, never to the pool
//! - Every write runs in its own transaction
//! - Rely on DB constraints for required fields, no check-then-insert

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{DatabaseConfig, DATABASE_URI_ENV, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
