//! Environment-driven configuration shared by the service binaries.

use std::env;

use thiserror::Error;

/// Configuration for the HTTP binary: the preference database plus the public
/// bind target and an optional admin bind target. Override mutations are only
/// served when the admin listener is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    database_url: String,
    bind_address: String,
    admin_bind_address: Option<String>,
}

impl ApiConfig {
    /// Loads configuration by hydrating `.env` (if present) and reading the
    /// process environment. Missing required entries surface as
    /// [`ConfigError`] so binaries can fail before binding anything.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        hydrate_env_file()?;

        Ok(Self {
            database_url: get_required_var("DATABASE_URL")?,
            bind_address: get_required_var("BIND_ADDRESS")?,
            admin_bind_address: get_optional_var("ADMIN_BIND_ADDRESS"),
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }

    pub fn admin_bind_address(&self) -> Option<&str> {
        self.admin_bind_address.as_deref()
    }

    pub fn has_admin_listener(&self) -> bool {
        self.admin_bind_address.is_some()
    }
}

fn get_required_var(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err(ConfigError::MissingVar { key })
            } else {
                Ok(trimmed.to_string())
            }
        }
        Err(_) => Err(ConfigError::MissingVar { key }),
    }
}

fn get_optional_var(key: &'static str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn hydrate_env_file() -> Result<(), ConfigError> {
    if env::var_os("GROUNDLINK_SKIP_DOTENV").is_some() {
        return Ok(());
    }
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(ConfigError::Dotenv { source: err }),
    }

    Ok(())
}

/// Errors emitted when `.env` hydration or environment parsing fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable `{key}`")]
    MissingVar { key: &'static str },
    #[error("failed to load .env file: {source}")]
    Dotenv {
        #[from]
        source: dotenvy::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_GUARD: Mutex<()> = Mutex::new(());

    fn set_env() {
        env::set_var("GROUNDLINK_SKIP_DOTENV", "1");
        env::set_var("DATABASE_URL", "sqlite://test.db");
        env::set_var("BIND_ADDRESS", "127.0.0.1:8080");
        env::remove_var("ADMIN_BIND_ADDRESS");
    }

    #[test]
    fn config_loader_reads_env() {
        let _guard = ENV_GUARD.lock().unwrap();
        set_env();
        let config = ApiConfig::load_from_env().expect("config loads");
        assert_eq!(config.database_url(), "sqlite://test.db");
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert!(!config.has_admin_listener());
    }

    #[test]
    fn admin_listener_is_optional() {
        let _guard = ENV_GUARD.lock().unwrap();
        set_env();
        env::set_var("ADMIN_BIND_ADDRESS", "127.0.0.1:9090");

        let config = ApiConfig::load_from_env().expect("config loads");
        assert_eq!(config.admin_bind_address(), Some("127.0.0.1:9090"));
        assert!(config.has_admin_listener());

        set_env();
    }

    #[test]
    fn required_env_vars_are_trimmed() {
        let _guard = ENV_GUARD.lock().unwrap();
        set_env();
        env::set_var("DATABASE_URL", "  sqlite://trim.db  ");

        let config = ApiConfig::load_from_env().expect("config loads");
        assert_eq!(config.database_url(), "sqlite://trim.db");

        set_env();
    }

    #[test]
    fn empty_required_env_var_is_treated_as_missing() {
        let _guard = ENV_GUARD.lock().unwrap();
        set_env();
        env::set_var("BIND_ADDRESS", "   ");

        let err = ApiConfig::load_from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingVar {
                key: "BIND_ADDRESS"
            }
        ));

        set_env();
    }
}
