//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STRATUS_<SECTION>__<KEY>`, e.g.
//!    `STRATUS_OUTPUT__COMPACT=true`
//! 3. Config file: `--config FILE`, else `./.stratus.toml`, else the
//!    platform config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Name of the per-directory config file written by `stratus init --local`.
pub const LOCAL_CONFIG_FILE: &str = ".stratus.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults applied when a command omits an argument.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Stack rendered by a bare `stratus` or `stratus render`.
    pub stack: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins.
    pub format: String,
    /// Render single-line JSON by default.
    pub compact: bool,
    /// Spaces per level in pretty output.
    pub indent: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            stack: "ecs-cluster".into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
            compact: false,
            indent: 4,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to seed configuration defaults")?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                config::Environment::with_prefix("STRATUS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        let config: Self = settings
            .try_deserialize()
            .context("Configuration has invalid values")?;
        config.validate()?;
        Ok(config)
    }

    /// Path of the configuration file that `load(None)` reads.
    ///
    /// `./.stratus.toml` wins when it exists; otherwise the platform config
    /// directory from `directories::ProjectDirs`.
    pub fn config_path() -> PathBuf {
        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.exists() {
            return local.to_path_buf();
        }
        Self::global_path()
    }

    /// Platform config location, falling back to `./.stratus.toml`.
    pub fn global_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stratus", "stratus")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Look up a dotted key, e.g. `output.indent`.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "defaults.stack" => self.defaults.stack.clone(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            "output.compact" => self.output.compact.to_string(),
            "output.indent" => self.output.indent.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key `get` understands.
    pub const KEYS: [&'static str; 5] = [
        "defaults.stack",
        "output.no_color",
        "output.format",
        "output.compact",
        "output.indent",
    ];

    fn validate(&self) -> anyhow::Result<()> {
        if !matches!(
            self.output.format.as_str(),
            "auto" | "human" | "plain" | "json"
        ) {
            anyhow::bail!(
                "output.format must be one of auto, human, plain, json (got '{}')",
                self.output.format
            );
        }
        if self.output.indent > 16 {
            anyhow::bail!("output.indent must be at most 16 (got {})", self.output.indent);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_stack_is_ecs_cluster() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.stack, "ecs-cluster");
        assert_eq!(cfg.output.indent, 4);
        assert!(!cfg.output.compact);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stratus.toml");
        std::fs::write(&path, "[output]\ncompact = true\nindent = 2\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(cfg.output.compact);
        assert_eq!(cfg.output.indent, 2);
        assert_eq!(cfg.defaults.stack, "ecs-cluster");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stratus.toml");
        std::fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();

        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        for key in AppConfig::KEYS {
            assert!(cfg.get(key).is_some(), "{key}");
        }
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("does.not.exist"), None);
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
