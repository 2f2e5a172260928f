//! Load configuration from environment variables (after an optional `.env`).

use crate::config::{validate_names, AppConfig, StoreNames};
use crate::error::ConfigError;
use std::str::FromStr;

impl AppConfig {
    /// Reads `.env` when present, then the process environment.
    ///
    /// | Env Var                   | Default                         |
    /// |---------------------------|---------------------------------|
    /// | `DATABASE_URL`            | `postgres://localhost/students` |
    /// | `HOST`                    | `0.0.0.0`                       |
    /// | `PORT`                    | `8080`                          |
    /// | `DB_MAX_CONNECTIONS`      | `5`                             |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`                             |
    /// | `BODY_LIMIT_BYTES`        | `65536`                         |
    /// | `STUDENTS_TABLE`          | `students`                      |
    /// | `STUDENT_PROCEDURE`       | `tambah_student`                |
    /// | `STUDENT_FUNCTION`        | `fungsi_tambah_student`         |
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from any variable source; unset variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let text = |var: &str, default: String| {
            lookup(var)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
        };

        let names = StoreNames {
            table: text("STUDENTS_TABLE", defaults.names.table),
            procedure: text("STUDENT_PROCEDURE", defaults.names.procedure),
            function: text("STUDENT_FUNCTION", defaults.names.function),
        };
        validate_names(&names)?;

        Ok(AppConfig {
            database_url: text("DATABASE_URL", defaults.database_url),
            host: text("HOST", defaults.host),
            port: parsed(&lookup, "PORT", defaults.port)?,
            max_connections: parsed(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            acquire_timeout_secs: parsed(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", defaults.acquire_timeout_secs)?,
            body_limit_bytes: parsed(&lookup, "BODY_LIMIT_BYTES", defaults.body_limit_bytes)?,
            names,
        })
    }
}

fn parsed<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var).map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
    }
}
