use shared_types::DashboardConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<DashboardConfig> = OnceLock::new();

/// `config.toml` at the workspace root, embedded at build time since the
/// browser build has no filesystem to read it from.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse the embedded config once. Invalid contents fall back to defaults.
pub fn dashboard_config() -> &'static DashboardConfig {
    CONFIG.get_or_init(|| DashboardConfig::from_toml_or_default(CONFIG_TOML))
}
