//! Configuration for conventions repositories
//!
//! Weft reads an optional `conventions.toml` (or `.conventions.toml`)
//! from the repository root:
//!
//! ```toml
//! [domains]
//! root = "domains"
//! extension = "md"
//!
//! [compose]
//! enabled = true
//! ```
//!
//! An absent file means defaults; a present file that fails to parse is
//! an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{WeftError, WeftResult};
use crate::locator::DomainLocator;

/// Candidate config file names, probed in order
const CONFIG_CANDIDATES: &[&str] = &["conventions.toml", ".conventions.toml"];

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Domain directory layout
    #[serde(default)]
    pub domains: DomainsConfig,

    /// Composition behavior
    #[serde(default)]
    pub compose: ComposeConfig,
}

/// Domain directory layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainsConfig {
    /// Directory holding domain documents, relative to the repo root
    #[serde(default = "default_domains_root")]
    pub root: PathBuf,

    /// Document extension (without the dot)
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for DomainsConfig {
    fn default() -> Self {
        Self {
            root: default_domains_root(),
            extension: default_extension(),
        }
    }
}

fn default_domains_root() -> PathBuf {
    PathBuf::from("domains")
}

fn default_extension() -> String {
    "md".to_string()
}

/// Composition behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeConfig {
    /// Whether inheritance composition is enabled for this repository.
    /// Install tooling serves domain bodies verbatim when disabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration for `project_root`, falling back to defaults
    /// when no config file exists there.
    pub fn load(project_root: &Path) -> WeftResult<Self> {
        match find_config_file(project_root) {
            Some(file) => Self::from_file(&file),
            None => Ok(Self::default()),
        }
    }

    /// Parse a specific config file.
    pub fn from_file(file: &Path) -> WeftResult<Self> {
        let content = fs::read_to_string(file)?;
        toml::from_str(&content).map_err(|err| WeftError::InvalidConfig {
            file: file.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Absolute path of the domains directory for a repository root.
    pub fn domains_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.domains.root)
    }

    /// A locator honoring this configuration.
    pub fn locator(&self, project_root: &Path) -> DomainLocator {
        DomainLocator::new(self.domains_root(project_root))
            .with_extension(self.domains.extension.clone())
    }
}

/// First existing candidate config file under `project_root`.
fn find_config_file(project_root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}
