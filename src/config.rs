// config.rs - Server configuration read from the environment
//
// Only the server binary reads this. Site address and output paths come from
// the Leptos configuration; this covers what Leptos does not.

use crate::error::{Result, StorefrontError};

/// Log filter used when `STOREFRONT_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const LOG_FILTER_VAR: &str = "STOREFRONT_LOG";
pub const LEPTOS_CONFIG_VAR: &str = "STOREFRONT_LEPTOS_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Path to a Cargo.toml carrying `[package.metadata.leptos]`; `None`
    /// lets Leptos use its environment variables.
    pub leptos_config_path: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            leptos_config_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Reads the process environment. Call `dotenv` first to pick up `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Present-but-blank values are
    /// rejected rather than silently defaulted.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_FILTER_VAR) {
            config.log_filter = non_blank(LOG_FILTER_VAR, filter)?;
        }
        if let Some(path) = lookup(LEPTOS_CONFIG_VAR) {
            config.leptos_config_path = Some(non_blank(LEPTOS_CONFIG_VAR, path)?);
        }

        Ok(config)
    }
}

fn non_blank(key: &'static str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StorefrontError::InvalidConfig { key, value });
    }
    Ok(trimmed.to_string())
}
