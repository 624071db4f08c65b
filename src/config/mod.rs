//! Application configuration module
//!
//! Configuration is read from environment variables with the
//! `ELIMINATION_TRACKER` prefix; nested values are separated by `__`.
//!
//! # Example
//!
//! ```no_run
//! use elimination_tracker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "ELIMINATION_TRACKER";

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `ELIMINATION_TRACKER__*` variables:
    ///
    /// - `ELIMINATION_TRACKER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ELIMINATION_TRACKER__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or a value
    /// cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate every configuration section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests touching them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const DATABASE_URL: &str = "ELIMINATION_TRACKER__DATABASE__URL";
    const SERVER_PORT: &str = "ELIMINATION_TRACKER__SERVER__PORT";
    const SERVER_ENVIRONMENT: &str = "ELIMINATION_TRACKER__SERVER__ENVIRONMENT";
    const RUN_MIGRATIONS: &str = "ELIMINATION_TRACKER__DATABASE__RUN_MIGRATIONS";

    fn set_minimal_env() {
        env::set_var(DATABASE_URL, "postgresql://test@localhost/tracker");
    }

    fn clear_env() {
        for key in [DATABASE_URL, SERVER_PORT, SERVER_ENVIRONMENT, RUN_MIGRATIONS] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var(RUN_MIGRATIONS, "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.database.url, "postgresql://test@localhost/tracker");
        assert!(config.database.run_migrations);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
    }

    #[test]
    fn test_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var(SERVER_PORT, "3000");
        env::set_var(SERVER_ENVIRONMENT, "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
    }

    #[test]
    fn test_missing_database_section_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
