pub mod models;

pub use models::*;

use std::collections::HashSet;
use std::path::Path;

use crate::types::errors::{CommandError, CommandResult};

/// Environment override for `database_url`.
pub const DATABASE_URL_ENV: &str = "ROSTER_DATABASE_URL";

impl ReconcileSettings {
    /// Load settings from a JSON file, then apply `.env` / environment overrides.
    pub fn load(path: &Path) -> CommandResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CommandError::Config(format!("Cannot read settings {}: {e}", path.display()))
        })?;
        let mut settings: ReconcileSettings = serde_json::from_str(&raw)?;

        let _ = dotenvy::dotenv(); // Try to load .env, ignore if missing
        settings.apply_env_overrides(std::env::var(DATABASE_URL_ENV).ok());

        settings.validate()?;
        Ok(settings)
    }

    pub fn apply_env_overrides(&mut self, database_url: Option<String>) {
        if let Some(url) = database_url.filter(|u| !u.trim().is_empty()) {
            log::debug!("Using database URL from {DATABASE_URL_ENV}");
            self.database_url = url;
        }
    }

    /// Reject empty or duplicated section tags.
    pub fn validate(&self) -> CommandResult<()> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            let tag = section.tag.trim();
            if tag.is_empty() {
                return Err(CommandError::Config("Section tag must not be empty".into()));
            }
            if !seen.insert(tag) {
                return Err(CommandError::Config(format!(
                    "Section '{tag}' is configured twice"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
