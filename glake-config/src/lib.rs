//! Shared configuration loader for the glake toolbar tools.
//!
//! `defaults/glake.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer the user's file and any
//! explicit files on top of those defaults via [`Loader`] before deserializing
//! into [`GlakeConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use directories::{BaseDirs, ProjectDirs};
use glake_parser::scan::{ScanOptions, DEFAULT_ESCAPE_RUNE};
use glake_parser::toolbar::HomeVars;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/glake.default.toml");

/// File name looked up in the platform config directory.
pub const USER_CONFIG_FILE: &str = "glake.toml";

/// Top-level configuration consumed by glake applications.
#[derive(Debug, Clone, Deserialize)]
pub struct GlakeConfig {
    pub scan: ScanConfig,
    pub home_vars: HomeVarsConfig,
}

/// Mirrors [`ScanOptions`]; the escape rune falls back to the platform default.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub escape_rune: Option<char>,
    pub max_quoted_len: usize,
    pub max_name_len: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HomeVarsConfig {
    pub home: bool,
    #[serde(default)]
    pub entries: Vec<HomeVarEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HomeVarEntry {
    pub name: String,
    pub path: String,
}

impl GlakeConfig {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            escape: self.scan.escape_rune.unwrap_or(DEFAULT_ESCAPE_RUNE),
            max_quoted_len: self.scan.max_quoted_len,
            max_name_len: self.scan.max_name_len,
        }
    }

    /// Home vars from the configured entries, plus `~` for the home directory when enabled.
    pub fn home_vars(&self) -> HomeVars {
        let home = if self.home_vars.home {
            BaseDirs::new().map(|dirs| dirs.home_dir().to_string_lossy().into_owned())
        } else {
            None
        };
        self.home_vars_with(home.as_deref())
    }

    /// Same as [`GlakeConfig::home_vars`] with an explicit home directory.
    pub fn home_vars_with(&self, home_dir: Option<&str>) -> HomeVars {
        let mut hv = HomeVars::new();
        if let Some(home) = home_dir.filter(|_| self.home_vars.home) {
            hv.append("~", home);
        }
        for entry in &self.home_vars.entries {
            hv.append(&entry.name, &entry.path);
        }
        hv
    }
}

/// Path of the per-user config file, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "glake").map(|dirs| dirs.config_dir().join(USER_CONFIG_FILE))
}

/// Builds a [`GlakeConfig`] from layers, later layers winning.
///
/// The `glake` binary stacks the embedded defaults, the per-user `glake.toml`, the file named by
/// `--config`, and finally `--escape` as an override of `scan.escape_rune`.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the embedded `glake.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add `path` on top. The file must exist; `build` fails otherwise.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        debug!(path = %path.as_ref().display(), "config file");
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add `path` on top if it exists.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add the per-user file from [`user_config_path`]. A missing file or config dir is skipped.
    pub fn with_user_file(self) -> Self {
        match user_config_path() {
            Some(path) => self.with_optional_file(path),
            None => self,
        }
    }

    /// Override one dotted key, e.g. `scan.escape_rune`, above every file.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers into a [`GlakeConfig`]. Fails on unreadable files or on values of the
    /// wrong type.
    pub fn build(self) -> Result<GlakeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with nothing layered on top.
pub fn load_defaults() -> Result<GlakeConfig, ConfigError> {
    Loader::new().build()
}
