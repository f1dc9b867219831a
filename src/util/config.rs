//! Configuration file support for tcview.
//!
//! tcview reads two configuration file locations:
//! - Global: `~/.tcview/config.toml` - User-wide defaults
//! - Project: `.tcview/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.
//!
//! Toolchain descriptions are stored separately:
//! - Global: `~/.tcview/toolchain.toml`
//! - Project: `.tcview/toolchain.toml`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::artifact::{Artifact, ArtifactRoot};
use crate::core::provider::JavaToolchainProvider;

/// tcview configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// View settings
    pub view: ViewConfig,
}

/// Settings for the toolchain view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Version reported when javacopts carry no `-source`/`-target`
    pub default_version: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.view.default_version.is_some() {
            self.view.default_version = other.view.default_version;
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.tcview/config.toml)
/// 2. Global config (~/.tcview/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        config.merge(Config::load_or_default(global_path));
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Toolchain description file.
///
/// Describes an already-resolved Java toolchain so a provider can be built
/// without a real build graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// The Java toolchain, if one is declared
    pub java_toolchain: Option<JavaToolchainSection>,
}

/// The `[java_toolchain]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JavaToolchainSection {
    /// The javac jar
    pub javac: ArtifactEntry,

    /// The SingleJar deploy jar
    pub singlejar: ArtifactEntry,

    /// Bootclasspath entries
    #[serde(default)]
    pub bootclasspath: Vec<ArtifactEntry>,

    /// JVM options, in order
    #[serde(default)]
    pub jvm_opts: Vec<String>,

    /// Compilation tools
    #[serde(default)]
    pub tools: Vec<ArtifactEntry>,

    /// Raw javac flags
    #[serde(default)]
    pub javacopts: Vec<String>,
}

/// An artifact as written in a description file.
///
/// Either a bare exec path (a derived artifact) or a table naming the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArtifactEntry {
    Path(String),
    Detailed {
        path: String,
        #[serde(default)]
        root: ArtifactRoot,
    },
}

impl ArtifactEntry {
    /// Convert to an artifact handle.
    pub fn to_artifact(&self) -> Artifact {
        match self {
            ArtifactEntry::Path(path) => Artifact::derived(path),
            ArtifactEntry::Detailed { path, root } => Artifact::new(*root, path),
        }
    }
}

impl JavaToolchainSection {
    /// Build the provider this table describes.
    pub fn to_provider(&self) -> JavaToolchainProvider {
        JavaToolchainProvider::builder(self.javac.to_artifact(), self.singlejar.to_artifact())
            .bootclasspath(self.bootclasspath.iter().map(ArtifactEntry::to_artifact))
            .jvm_options(self.jvm_opts.iter().cloned())
            .tools(self.tools.iter().map(ArtifactEntry::to_artifact))
            .javac_options(self.javacopts.iter().cloned())
            .build()
    }
}

impl ToolchainConfig {
    /// Load a toolchain description from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read toolchain config: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse toolchain config: {}", path.display()))
    }

    /// Parse a toolchain description.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a toolchain description with fallback to defaults if the file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!(
                    "Failed to load toolchain config from {}: {:#}",
                    path.display(),
                    e
                );
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another description into this one (other takes precedence).
    ///
    /// A toolchain is replaced as a whole; fields are never mixed across files.
    pub fn merge(&mut self, other: ToolchainConfig) {
        if other.java_toolchain.is_some() {
            self.java_toolchain = other.java_toolchain;
        }
    }

    /// Build the declared provider, if any.
    pub fn java_provider(&self) -> Option<JavaToolchainProvider> {
        self.java_toolchain.as_ref().map(JavaToolchainSection::to_provider)
    }
}

/// Load merged toolchain description from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.tcview/toolchain.toml)
/// 2. Global config (~/.tcview/toolchain.toml)
pub fn load_toolchain_config(global_path: &Path, project_path: &Path) -> ToolchainConfig {
    let mut config = ToolchainConfig::default();

    if global_path.exists() {
        config.merge(ToolchainConfig::load_or_default(global_path));
    }

    if project_path.exists() {
        config.merge(ToolchainConfig::load_or_default(project_path));
    }

    config
}

/// Get the global tcview config directory (~/.tcview).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".tcview"))
}

/// Get the global config path (~/.tcview/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the global toolchain config path (~/.tcview/toolchain.toml).
pub fn global_toolchain_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("toolchain.toml"))
}

/// Get the project config path (.tcview/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".tcview").join("config.toml")
}

/// Get the project toolchain config path (.tcview/toolchain.toml).
pub fn project_toolchain_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".tcview").join("toolchain.toml")
}
