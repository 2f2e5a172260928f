//! Identifier validation for names that are spliced into SQL text.

use crate::config::StoreNames;
use crate::error::ConfigError;
use regex::Regex;
use std::sync::OnceLock;

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,62}(\.[A-Za-z_][A-Za-z0-9_]{0,62})?$")
            .expect("identifier pattern is valid")
    })
}

/// Accepts `name` or `schema.name`, each part a plain unquoted PostgreSQL identifier.
pub fn validate_identifier(kind: &'static str, name: &str) -> Result<(), ConfigError> {
    if identifier_pattern().is_match(name) {
        Ok(())
    } else {
        Err(ConfigError::InvalidIdentifier {
            kind,
            name: name.to_string(),
        })
    }
}

pub fn validate_names(names: &StoreNames) -> Result<(), ConfigError> {
    validate_identifier("table", &names.table)?;
    validate_identifier("procedure", &names.procedure)?;
    validate_identifier("function", &names.function)?;
    Ok(())
}
