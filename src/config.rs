//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/morse-trie/morse.toml`
//! 3. Explicit config file given on the command line
//! 4. Environment variables: `MORSE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{RenderOptions, NULL_MARKER};

/// Prefix for environment overrides, e.g. `MORSE_STRICT=true`.
pub const ENV_PREFIX: &str = "MORSE";

/// Unified configuration for the codec.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Reject unmapped characters and unresolvable codes instead of dropping them
    pub strict: bool,
    /// Label for unassigned nodes in the tree dump
    pub null_marker: String,
    /// Show each node's code in the tree dump
    pub show_codes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strict: false,
            null_marker: NULL_MARKER.to_string(),
            show_codes: false,
        }
    }
}

/// Raw settings for intermediate parsing (`None` = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub strict: Option<bool>,
    pub null_marker: Option<String>,
    pub show_codes: Option<bool>,
}

/// Get the XDG config directory.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "morse-trie").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("morse.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay values present in `raw` onto self.
    fn merge_with(&self, raw: &RawSettings) -> Self {
        Self {
            strict: raw.strict.unwrap_or(self.strict),
            null_marker: raw
                .null_marker
                .clone()
                .unwrap_or_else(|| self.null_marker.clone()),
            show_codes: raw.show_codes.unwrap_or(self.show_codes),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        let global = global_config_path();
        Self::load_with(
            global.as_deref(),
            config_file,
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    /// Load settings from explicit layers.
    ///
    /// A missing global file is skipped; a missing explicit file is an error.
    pub fn load_with(
        global: Option<&Path>,
        config_file: Option<&Path>,
        env: Environment,
    ) -> ApplicationResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("loading config file: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables
        Self::apply_env_overrides(current, env)
    }

    /// Apply MORSE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(env.prefix_separator("_").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("strict") {
            settings.strict = val;
        }
        if let Ok(val) = config.get_string("null_marker") {
            settings.null_marker = val;
        }
        if let Ok(val) = config.get_bool("show_codes") {
            settings.show_codes = val;
        }

        Ok(settings)
    }

    /// Options for the tree dump.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            null_marker: self.null_marker.clone(),
            show_codes: self.show_codes,
        }
    }

    /// Serialize to TOML for display.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
