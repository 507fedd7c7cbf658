use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Profile card settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Shown when the avatar image is missing. Derived from `name` when unset.
    #[serde(default)]
    pub initials: Option<String>,
}

fn default_name() -> String {
    "TXN".to_string()
}

fn default_greeting() -> String {
    "Good Morning".to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            greeting: default_greeting(),
            avatar_url: None,
            initials: None,
        }
    }
}

impl ProfileConfig {
    /// Configured initials, or the first two characters of the name.
    pub fn initials(&self) -> String {
        match &self.initials {
            Some(i) if !i.trim().is_empty() => i.trim().to_uppercase(),
            _ => self.name.chars().take(2).collect::<String>().to_uppercase(),
        }
    }
}

/// To-do card settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TodoConfig {
    /// Start with the Eat / Sleep / Repeat example items.
    #[serde(default)]
    pub seed_examples: bool,
}

/// Top-level structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub todos: TodoConfig,
}

impl DashboardConfig {
    pub fn from_toml(contents: &str) -> Result<Self, AppError> {
        toml::from_str(contents)
            .map_err(|e| AppError::internal(format!("Invalid dashboard config: {e}")))
    }

    /// Parse `contents`, logging and falling back to defaults when it is invalid.
    pub fn from_toml_or_default(contents: &str) -> Self {
        match Self::from_toml(contents) {
            Ok(config) => {
                tracing::debug!(?config, "dashboard config loaded");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default dashboard config");
                Self::default()
            }
        }
    }
}
