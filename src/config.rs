//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/axonmorph/axonmorph.toml`
//! 3. Local config: `<project_dir>/.axonmorph.toml`
//! 4. Environment variables: `AXONMORPH_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::NodeType;

/// Default number of branch-point generations explored below the first branch.
pub const DEFAULT_DEPTH_ORDER: usize = 5;

/// Analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Type of the origin node, as SWC code (default: 2, axon)
    pub origin_type: NodeType,
    /// Branch-point generations to explore (default: 5)
    pub depth_order: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            origin_type: NodeType::Axon,
            depth_order: DEFAULT_DEPTH_ORDER,
        }
    }
}

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub origin_type: Option<NodeType>,
    pub depth_order: Option<usize>,
}

/// Get the XDG config directory for axonmorph.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "axonmorph").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("axonmorph.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".axonmorph.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            origin_type: overlay.origin_type.unwrap_or(self.origin_type),
            depth_order: overlay.depth_order.unwrap_or(self.depth_order),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional directory holding a local `.axonmorph.toml`
    pub fn load(project_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = project_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("loading local config: {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply AXONMORPH_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("AXONMORPH").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get::<u8>("origin_type") {
            settings.origin_type = NodeType::from(val);
        }
        if let Ok(val) = config.get::<usize>("depth_order") {
            settings.depth_order = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# axonmorph configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/axonmorph/axonmorph.toml
#   Local:  <project_dir>/.axonmorph.toml
#   Env:    AXONMORPH_* environment variables

# SWC type code of the origin node (1 soma, 2 axon, 3 basal, 4 apical dendrite)
# origin_type = 2

# Branch-point generations to explore below the first branch
# depth_order = 5
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
