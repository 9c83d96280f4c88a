use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for blogagent.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (BLOG_* prefix)
/// 3. Config file (~/.config/blogagent/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the generation backend.
    ///
    /// Can be set via:
    /// - CLI: --endpoint http://host:port
    /// - ENV: BLOG_ENDPOINT
    /// - Config: endpoint = "http://host:port"
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// When true, fabricate placeholder content locally instead of
    /// contacting the backend.
    ///
    /// Can be set via:
    /// - CLI: --demo
    /// - ENV: BLOG_DEMO_MODE
    /// - Config: demo_mode = true
    #[serde(default)]
    pub demo_mode: bool,

    /// Log level filter used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            demo_mode: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/blogagent/config.toml
    /// Reads environment variables with BLOG_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific file path plus the environment.
    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("blog");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration with a custom endpoint.
    ///
    /// This is used when the --endpoint CLI flag is provided.
    pub fn load_with_endpoint(endpoint: String) -> Result<Self> {
        let mut config = Self::load()?;
        config.endpoint = endpoint;
        Ok(config)
    }

    /// The request timeout as a [`std::time::Duration`].
    #[must_use]
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

fn default_endpoint() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    crate::client::DEFAULT_TIMEOUT_SECS
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/blogagent/config.toml
/// - macOS: ~/Library/Application Support/blogagent/config.toml
/// - Windows: %APPDATA%\blogagent\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("blogagent")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# BlogAgent Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (BLOG_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Base URL of the blog generation backend
#
# Can also be set via:
# - CLI: blogagent --endpoint http://host:port tui
# - Environment: BLOG_ENDPOINT=http://host:port
endpoint = "http://127.0.0.1:5000"

# Request timeout in seconds
#
# A request still outstanding after this long fails with a timeout error
# rather than leaving the form loading forever.
timeout_secs = 30

# Demo mode: fabricate placeholder content locally instead of contacting
# the backend. Useful when no backend is running. Real request failures
# are always surfaced as errors; demo content is only produced when this
# is enabled explicitly.
demo_mode = false

# Log level filter used when RUST_LOG is not set
# One of: error, warn, info, debug, trace
log_level = "info"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
