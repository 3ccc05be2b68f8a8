// Server configuration
//
// Design Decision: Use clap derive with env fallbacks, so every flag can also
// be set from the environment (or a .env file loaded by dotenvy).

use std::time::Duration;

use clap::Parser;
use microevents_storage::PoolConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "microevents-api")]
#[command(about = "micro-events HTTP server")]
#[command(version)]
pub struct Config {
    /// PostgreSQL connection URL. Without it the server keeps events in memory.
    #[arg(long = "dsn", env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 9000)]
    pub port: u16,

    /// Prefix for API routes, e.g. "/api" gives /api/v1/events
    #[arg(long, env = "API_PREFIX", default_value = "/api")]
    pub api_prefix: String,

    /// Maximum number of pooled database connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub db_max_connections: u32,

    /// Seconds to wait for a free database connection
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT_SECS", default_value_t = 5)]
    pub db_acquire_timeout_secs: u64,

    /// Do not create the events table on startup
    #[arg(long = "skip-schema", env = "SKIP_SCHEMA_BOOTSTRAP")]
    pub skip_schema_bootstrap: bool,

    /// Comma-separated list of allowed CORS origins
    #[arg(long, env = "CORS_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            max_connections: self.db_max_connections,
            acquire_timeout: Duration::from_secs(self.db_acquire_timeout_secs),
        }
    }

    /// Non-empty, trimmed CORS origins
    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
