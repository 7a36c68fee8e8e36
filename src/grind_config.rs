//! Optional repository configuration read from `grind.toml`.
//!
//! Every setting has a default matching the conventional repository
//! layout, so the file only needs the keys that differ.
//!
//! # Configuration File Format
//!
//! ```toml
//! [paths]
//! registry = "tracks/registry.json"
//! readme = "README.md"
//! index = "docs/data/index.json"
//! python_dir = "python"
//! sql_dir = "sql"
//!
//! [links]
//! problem_base = "https://leetcode.com/problems/"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The name of the configuration file at the repository root.
pub const CONFIG_FILE: &str = "grind.toml";

/// Repository-relative locations of inputs and generated artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_registry")]
    pub registry: String,
    #[serde(default = "default_readme")]
    pub readme: String,
    /// Consolidated JSON index consumed by the front-end
    #[serde(default = "default_index")]
    pub index: String,
    /// Base directory for Python tracks and templates
    #[serde(default = "default_python_dir")]
    pub python_dir: String,
    /// Base directory for SQL tracks and templates
    #[serde(default = "default_sql_dir")]
    pub sql_dir: String,
}

fn default_registry() -> String {
    "tracks/registry.json".to_string()
}

fn default_readme() -> String {
    "README.md".to_string()
}

fn default_index() -> String {
    "docs/data/index.json".to_string()
}

fn default_python_dir() -> String {
    "python".to_string()
}

fn default_sql_dir() -> String {
    "sql".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            registry: default_registry(),
            readme: default_readme(),
            index: default_index(),
            python_dir: default_python_dir(),
            sql_dir: default_sql_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Prefix for problem links built from a slug
    #[serde(default = "default_problem_base")]
    pub problem_base: String,
}

fn default_problem_base() -> String {
    "https://leetcode.com/problems/".to_string()
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            problem_base: default_problem_base(),
        }
    }
}

/// The complete grind.toml configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrindToml {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub links: LinksConfig,
}

impl GrindToml {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse grind.toml")
    }

    /// Load `grind.toml` from the repository root.
    /// Returns default configuration if the file doesn't exist.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration and return a list of warnings.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let paths = [
            ("registry", &self.paths.registry),
            ("readme", &self.paths.readme),
            ("index", &self.paths.index),
            ("python_dir", &self.paths.python_dir),
            ("sql_dir", &self.paths.sql_dir),
        ];
        for (key, value) in paths {
            if value.trim().is_empty() {
                warnings.push(format!("paths.{} is empty", key));
            } else if Path::new(value).is_absolute() {
                warnings.push(format!(
                    "paths.{} = '{}' is absolute; paths are resolved against the repository root",
                    key, value
                ));
            }
        }

        if !self.links.problem_base.ends_with('/') {
            warnings.push(format!(
                "links.problem_base '{}' should end with '/'",
                self.links.problem_base
            ));
        }

        warnings
    }
}
