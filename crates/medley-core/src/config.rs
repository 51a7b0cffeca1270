//! Configuration module
//!
//! Settings are read from the environment (`Config::from_env`); the binary
//! loads a `.env` file first via `dotenvy`. `validate()` checks the fields
//! that are only needed at runtime, like the resolver API key.

use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_DB_TIMEOUT_SECS: u64 = 30;
const DEFAULT_RESOLVER_TIMEOUT_SECS: u64 = 10;
const DEFAULT_YOUTUBE_API_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/videos";

/// Server and database settings shared by every deployment.
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub environment: String,
}

/// Video metadata resolver settings.
#[derive(Clone, Debug)]
pub struct ResolverConfig {
    /// YouTube Data API key. Required at runtime for the share operation;
    /// optional here so tooling can load config without one.
    pub api_key: Option<String>,
    /// Videos endpoint; overridable so tests can point at a local server.
    pub endpoint: String,
    /// Upper bound on a single metadata request.
    pub timeout_seconds: u64,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub base: BaseConfig,
    pub database_url: String,
    pub resolver: ResolverConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let cors_origins = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let base = BaseConfig {
            server_port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            cors_origins,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_DB_TIMEOUT_SECS),
            environment,
        };

        let resolver = ResolverConfig {
            api_key: env::var("YOUTUBE_API_KEY").ok(),
            endpoint: env::var("YOUTUBE_API_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_YOUTUBE_API_ENDPOINT.to_string()),
            timeout_seconds: env::var("RESOLVER_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_RESOLVER_TIMEOUT_SECS),
        };

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        Ok(Config {
            base,
            database_url,
            resolver,
        })
    }

    /// Check the runtime-required pieces beyond what from_env enforces.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.resolver.api_key.as_deref().unwrap_or("").is_empty() {
            anyhow::bail!("YOUTUBE_API_KEY must be set to resolve shared video links");
        }
        if self.resolver.timeout_seconds == 0 {
            anyhow::bail!("RESOLVER_TIMEOUT_SECONDS must be greater than zero");
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.base.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.base.cors_origins
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}
