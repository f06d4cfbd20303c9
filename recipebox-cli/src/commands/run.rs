//! `recipebox run` - connect, migrate, serve

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use recipebox_server::db::{
    migrations, DatabaseConfig, DATABASE_URI_ENV, DEFAULT_MAX_CONNECTIONS,
};
use recipebox_server::http::{run_server, AppState, ServerConfig};

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Postgres connection string
    #[arg(long, env = DATABASE_URI_ENV, hide_env_values = true)]
    pub database_uri: String,

    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Maximum number of pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Do not create the recipe table on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

impl RunArgs {
    fn database(&self) -> DatabaseConfig {
        DatabaseConfig::new(&self.database_uri).with_max_connections(self.max_connections)
    }
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_run(args: RunArgs) -> Result<()> {
    tracing::info!("Starting recipebox on {}", args.bind);

    let pool = args
        .database()
        .connect()
        .await
        .context("Failed to create database pool")?;

    if args.skip_migrations {
        tracing::info!("Skipping migrations");
    } else {
        migrations::run(&pool)
            .await
            .context("Failed to apply recipe schema")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    run_server(AppState::postgres(pool), config)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_config_takes_flag_values() {
        let args = RunArgs::parse_from([
            "run",
            "--database-uri",
            "postgres://localhost/recipes",
            "--max-connections",
            "8",
        ]);

        let db = args.database();
        assert_eq!(db.uri, "postgres://localhost/recipes");
        assert_eq!(db.max_connections, 8);
    }
}
