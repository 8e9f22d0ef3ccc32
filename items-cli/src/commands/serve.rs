//! HTTP server command
//!
//! Every setting comes from a flag, then the environment (including a
//! `.env` file loaded at startup), then a fixed default.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use items_server::db::{create_pool, ItemStore, MySqlItemStore, StoreConfig};
use items_server::http::{run_server, AppState, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 3306)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = "root")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASS", default_value = "password", hide_env_values = true)]
    pub db_pass: String,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = "test")]
    pub db_name: String,

    /// Maximum pooled database connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    /// Seconds a request waits for a pooled connection
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT", default_value_t = 5)]
    pub acquire_timeout: u64,
}

impl ServeArgs {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_pass.clone(),
            database: self.db_name.clone(),
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout),
        }
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.bind, self.port),
        }
    }
}

/// Ping the store once and log the outcome; never fails.
///
/// Returns whether the store answered.
pub async fn check_store(store: &dyn ItemStore, target: &str) -> bool {
    match store.ping().await {
        Ok(()) => {
            tracing::info!("Connected to the database at {}", target);
            true
        }
        Err(err) => {
            tracing::error!("Error connecting to the database at {}: {}", target, err);
            false
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store_config = args.store_config();
    let server_config = args.server_config();

    let store = MySqlItemStore::new(create_pool(&store_config));

    // Checked alongside the listener; requests fail with 500 until it is back
    let checked = store.clone();
    let target = store_config.target();
    tokio::spawn(async move {
        check_store(&checked, &target).await;
    });

    tracing::info!("Starting items server on http://{}", server_config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(AppState::new(store), server_config)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use items_server::testkit::{MemoryItemStore, UnavailableItemStore};

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        serve: ServeArgs,
    }

    #[test]
    fn flags_build_configs() {
        let harness = Harness::try_parse_from([
            "items",
            "--port",
            "8080",
            "--bind",
            "127.0.0.1",
            "--db-host",
            "db.internal",
            "--db-port",
            "3307",
            "--db-user",
            "app",
            "--db-pass",
            "secret",
            "--db-name",
            "inventory",
            "--max-connections",
            "4",
            "--acquire-timeout",
            "2",
        ])
        .unwrap();

        let store = harness.serve.store_config();
        assert_eq!(store.target(), "app@db.internal:3307/inventory");
        assert_eq!(store.password, "secret");
        assert_eq!(store.max_connections, 4);
        assert_eq!(store.acquire_timeout, Duration::from_secs(2));

        let server = harness.serve.server_config();
        assert_eq!(server.bind_addr, "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(Harness::try_parse_from(["items", "--port", "http"]).is_err());
    }

    #[tokio::test]
    async fn check_store_tolerates_unreachable_store() {
        assert!(!check_store(&UnavailableItemStore, "root@localhost:1/test").await);
    }

    #[tokio::test]
    async fn check_store_reports_reachable_store() {
        assert!(check_store(&MemoryItemStore::new(), "root@localhost:3306/test").await);
    }

    #[tokio::test]
    async fn check_store_gives_up_on_closed_port() {
        let config = StoreConfig {
            host: "127.0.0.1".into(),
            port: 1,
            acquire_timeout: Duration::from_millis(250),
            ..StoreConfig::default()
        };
        let store = MySqlItemStore::new(create_pool(&config));

        assert!(!check_store(&store, &config.target()).await);
    }
}
