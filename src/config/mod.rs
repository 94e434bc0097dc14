//! Configuration management

use serde::Deserialize;

use crate::nav::Breakpoints;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("title must not be empty")]
    EmptyTitle,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Title shown in the header bar and browser tab
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub breakpoints: Breakpoints,
}

fn default_port() -> u16 {
    8090
}

fn default_title() -> String {
    "Admin Dashboard".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            title: default_title(),
            breakpoints: Breakpoints::default(),
        }
    }
}

/// Get config directory (PORTAL_CONFIG_DIR, XDG_CONFIG_HOME or ~/.config)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("PORTAL_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return std::path::PathBuf::from(xdg).join("admin-portal");
    }
    if let Ok(home) = std::env::var("HOME") {
        return std::path::PathBuf::from(home).join(".config/admin-portal");
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

/// Environment variables read by hand instead of through the `PORTAL` source
const MANUAL_ENV_KEYS: &[&str] = &["PORTAL_PORT", "PORTAL_CONFIG_DIR"];

/// Parse a port from an environment variable, ignoring unparsable values
fn env_port(key: &str) -> Option<u16> {
    let value = std::env::var(key).ok()?;
    match value.parse::<u16>() {
        Ok(port) => Some(port),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a valid port", key, value);
            None
        }
    }
}

/// Load configuration from defaults, config file and environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let config_dir = get_config_dir();

    // PORTAL_* variables minus the ones handled below, so a bad PORTAL_PORT
    // never reaches deserialization
    let portal_env: ::config::Map<String, String> = std::env::vars()
        .filter(|(key, _)| key.starts_with("PORTAL_") && !MANUAL_ENV_KEYS.contains(&key.as_str()))
        .collect();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        .set_default("title", default_title())?
        // Load from config file if it exists (config.toml, config.json, ...)
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (PORTAL_TITLE, PORTAL_BREAKPOINTS__HEADER_TOGGLE, ...)
        .add_source(
            ::config::Environment::with_prefix("PORTAL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(portal_env)),
        );

    // Precedence: PORTAL_PORT > PORT > config > default; invalid values fall through
    if let Some(port) = env_port("PORTAL_PORT").or_else(|| env_port("PORT")) {
        builder = builder.set_override("port", port as i64)?;
    }

    let config: Config = builder.build()?.try_deserialize()?;

    if config.title.trim().is_empty() {
        return Err(ConfigError::EmptyTitle);
    }

    tracing::debug!(
        "Config resolved from {}: title={:?}, header_toggle={}, accounts_sidebar={}",
        config_dir.display(),
        config.title,
        config.breakpoints.header_toggle.as_str(),
        config.breakpoints.accounts_sidebar.as_str()
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Breakpoint;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for key in [
            "PORTAL_PORT",
            "PORT",
            "PORTAL_TITLE",
            "PORTAL_BREAKPOINTS__HEADER_TOGGLE",
            "PORTAL_BREAKPOINTS__ACCOUNTS_SIDEBAR",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_config_file() {
        clear_env();
        env::set_var("PORTAL_CONFIG_DIR", "/tmp/portal-test-nonexistent");

        let config = load_config().expect("config should load");

        env::remove_var("PORTAL_CONFIG_DIR");

        assert_eq!(config.port, 8090);
        assert_eq!(config.title, "Admin Dashboard");
        assert_eq!(config.breakpoints, Breakpoints::default());
    }

    #[test]
    #[serial]
    fn test_config_file_sets_breakpoints() {
        clear_env();
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "title = \"Factory Admin\"\n\n[breakpoints]\nheader_toggle = \"lg\"\n",
        )
        .expect("write config");
        env::set_var("PORTAL_CONFIG_DIR", temp_dir.path());

        let config = load_config().expect("config should load");

        env::remove_var("PORTAL_CONFIG_DIR");

        assert_eq!(config.title, "Factory Admin");
        assert_eq!(config.breakpoints.header_toggle, Breakpoint::Lg);
        assert_eq!(config.breakpoints.accounts_sidebar, Breakpoint::Md);
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(temp_dir.path().join("config.toml"), "title = \"From File\"\n")
            .expect("write config");
        env::set_var("PORTAL_CONFIG_DIR", temp_dir.path());
        env::set_var("PORTAL_TITLE", "From Env");

        let config = load_config().expect("config should load");

        env::remove_var("PORTAL_TITLE");
        env::remove_var("PORTAL_CONFIG_DIR");

        assert_eq!(config.title, "From Env");
    }

    #[test]
    #[serial]
    fn test_portal_port_takes_precedence_over_port() {
        clear_env();
        env::set_var("PORTAL_CONFIG_DIR", "/tmp/portal-test-nonexistent");
        env::set_var("PORTAL_PORT", "5000");
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("PORTAL_CONFIG_DIR");

        assert_eq!(config.port, 5000);
    }

    #[test]
    #[serial]
    fn test_port_env_fallback_and_invalid_value() {
        clear_env();
        env::set_var("PORTAL_CONFIG_DIR", "/tmp/portal-test-nonexistent");

        env::set_var("PORT", "3000");
        let config = load_config().expect("config should load");
        assert_eq!(config.port, 3000);

        env::set_var("PORT", "not-a-number");
        let config = load_config().expect("config should load");
        assert_eq!(config.port, 8090, "Invalid PORT should fall back to default");

        clear_env();
        env::remove_var("PORTAL_CONFIG_DIR");
    }

    #[test]
    #[serial]
    fn test_invalid_portal_port_is_ignored() {
        clear_env();
        env::set_var("PORTAL_CONFIG_DIR", "/tmp/portal-test-nonexistent");
        env::set_var("PORTAL_PORT", "not-a-number");

        let config = load_config().expect("invalid PORTAL_PORT should not fail loading");
        assert_eq!(config.port, 8090);

        // PORT still applies when PORTAL_PORT is unusable
        env::set_var("PORT", "3000");
        let config = load_config().expect("config should load");
        assert_eq!(config.port, 3000);

        clear_env();
        env::remove_var("PORTAL_CONFIG_DIR");
    }

    #[test]
    #[serial]
    fn test_invalid_portal_port_does_not_mask_file_port() {
        clear_env();
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(temp_dir.path().join("config.toml"), "port = 9100\n")
            .expect("write config");
        env::set_var("PORTAL_CONFIG_DIR", temp_dir.path());
        env::set_var("PORTAL_PORT", "99999");

        let config = load_config().expect("config should load");

        clear_env();
        env::remove_var("PORTAL_CONFIG_DIR");

        assert_eq!(config.port, 9100);
    }

    #[test]
    #[serial]
    fn test_empty_title_rejected() {
        clear_env();
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(temp_dir.path().join("config.toml"), "title = \"  \"\n")
            .expect("write config");
        env::set_var("PORTAL_CONFIG_DIR", temp_dir.path());

        let result = load_config();

        env::remove_var("PORTAL_CONFIG_DIR");

        assert!(matches!(result, Err(ConfigError::EmptyTitle)));
    }

    #[test]
    #[serial]
    fn test_unknown_breakpoint_is_load_error() {
        clear_env();
        env::set_var("PORTAL_CONFIG_DIR", "/tmp/portal-test-nonexistent");
        env::set_var("PORTAL_BREAKPOINTS__HEADER_TOGGLE", "huge");

        let result = load_config();

        clear_env();
        env::remove_var("PORTAL_CONFIG_DIR");

        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
