//! Schema for the recipe table
//!
//! Applied on startup, before the listener is bound. Idempotent.

use sqlx::PgPool;

/// Create the `recipe` table if it does not exist yet.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running recipe migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS recipe (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            description TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Recipe migrations complete");
    Ok(())
}
