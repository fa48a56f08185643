//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `holonet.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values.

use holonet_domain::id::UserId;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Request identity settings.
    pub session: SessionConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Identity resolved for every request until real authentication exists.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub current_user_id: i64,
}

impl Config {
    /// Load configuration from `holonet.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting values are out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("holonet.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides read through `var`. When several keys set the same
    /// field, the last one present wins.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(host) = var("HOLONET_HOST") {
            self.server.host = host;
        }
        for key in ["PORT", "HOLONET_PORT"] {
            if let Some(port) = parse_var(&var, key)? {
                self.server.port = port;
            }
        }
        for key in ["DATABASE_URL", "HOLONET_DATABASE_URL"] {
            if let Some(url) = var(key) {
                self.database.url = url;
            }
        }
        for key in ["HOLONET_LOG", "RUST_LOG"] {
            if let Some(filter) = var(key) {
                self.logging.filter = filter;
            }
        }
        if let Some(id) = parse_var(&var, "HOLONET_CURRENT_USER_ID")? {
            self.session.current_user_id = id;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.session.current_user_id <= 0 {
            return Err(ConfigError::Validation(
                "session.current_user_id must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    #[must_use]
    pub fn current_user_id(&self) -> UserId {
        UserId::new(self.session.current_user_id)
    }
}

fn parse_var<T: std::str::FromStr>(
    var: impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    var(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::Validation(format!("{key} has invalid value {raw:?}")))
        })
        .transpose()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:holonet.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "holonetd=info,holonet=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { current_user_id: 1 }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overridden(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).cloned())?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn should_default_to_local_database_and_first_user() {
        let config = overridden(&[]).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.database_url(), "sqlite:holonet.db?mode=rwc");
        assert_eq!(config.current_user_id(), UserId::new(1));
    }

    #[test]
    fn should_read_session_section_from_toml() {
        let toml = "
            [server]
            port = 8080

            [session]
            current_user_id = 7
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.current_user_id(), UserId::new(7));
    }

    #[test]
    fn should_take_port_from_platform_variable() {
        let config = overridden(&[("PORT", "8081")]).unwrap();
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn should_prefer_prefixed_port_over_platform_port() {
        let config = overridden(&[("PORT", "8081"), ("HOLONET_PORT", "9090")]).unwrap();
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn should_reject_unparsable_port() {
        let result = overridden(&[("PORT", "eighty")]);
        match result {
            Err(ConfigError::Validation(message)) => assert!(message.contains("PORT")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_zero_port() {
        assert!(matches!(
            overridden(&[("HOLONET_PORT", "0")]),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_prefer_prefixed_database_url() {
        let config = overridden(&[("DATABASE_URL", "sqlite:heroku.db")]).unwrap();
        assert_eq!(config.database_url(), "sqlite:heroku.db");

        let config = overridden(&[
            ("DATABASE_URL", "sqlite:heroku.db"),
            ("HOLONET_DATABASE_URL", "sqlite::memory:"),
        ])
        .unwrap();
        assert_eq!(config.database_url(), "sqlite::memory:");
    }

    #[test]
    fn should_let_rust_log_win_over_prefixed_filter() {
        let config = overridden(&[("HOLONET_LOG", "info"), ("RUST_LOG", "trace")]).unwrap();
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_override_current_user() {
        let config = overridden(&[("HOLONET_CURRENT_USER_ID", "3")]).unwrap();
        assert_eq!(config.current_user_id(), UserId::new(3));
    }

    #[test]
    fn should_reject_non_positive_or_garbled_current_user() {
        assert!(overridden(&[("HOLONET_CURRENT_USER_ID", "0")]).is_err());
        assert!(overridden(&[("HOLONET_CURRENT_USER_ID", "-2")]).is_err());
        assert!(overridden(&[("HOLONET_CURRENT_USER_ID", "luke")]).is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.session.current_user_id, 1);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("[session]\ncurrent_user_id = 'one'");
        assert!(result.is_err());
    }
}
