use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::grind_config::GrindToml;
use crate::kind::SolutionKind;

/// Runtime configuration for grind.
///
/// Resolved once at process start from the repository root and the optional
/// `grind.toml`, then passed by reference to every pipeline stage. All paths
/// are absolute.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub registry_file: PathBuf,
    pub readme_file: PathBuf,
    pub index_file: PathBuf,
    pub python_dir: PathBuf,
    pub sql_dir: PathBuf,
    pub problem_base: String,
    pub verbose: bool,
    toml: GrindToml,
}

impl Config {
    pub fn new(root: PathBuf, verbose: bool) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("Failed to resolve repository root: {}", root.display()))?;

        let toml = GrindToml::load_or_default(&root)?;
        Ok(Self::from_toml(root, toml, verbose))
    }

    /// Build a config from an already-loaded `GrindToml` without touching disk.
    pub fn from_toml(root: PathBuf, toml: GrindToml, verbose: bool) -> Self {
        Self {
            registry_file: root.join(&toml.paths.registry),
            readme_file: root.join(&toml.paths.readme),
            index_file: root.join(&toml.paths.index),
            python_dir: root.join(&toml.paths.python_dir),
            sql_dir: root.join(&toml.paths.sql_dir),
            problem_base: toml.links.problem_base.clone(),
            root,
            verbose,
            toml,
        }
    }

    pub fn toml(&self) -> &GrindToml {
        &self.toml
    }

    /// Resolve a repository-relative path.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Base directory holding all tracks of the given kind.
    pub fn kind_dir(&self, kind: SolutionKind) -> &Path {
        match kind {
            SolutionKind::Py => &self.python_dir,
            SolutionKind::Sql => &self.sql_dir,
        }
    }

    /// Repository-relative form of `kind_dir`, as stored in the registry.
    pub fn kind_dir_relative(&self, kind: SolutionKind) -> &str {
        match kind {
            SolutionKind::Py => &self.toml.paths.python_dir,
            SolutionKind::Sql => &self.toml.paths.sql_dir,
        }
    }

    /// Render `path` relative to the root with `/` separators.
    pub fn display_relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }

    /// External problem link for a slug; underscores become hyphens.
    pub fn problem_link(&self, slug: &str) -> String {
        problem_link(&self.problem_base, slug)
    }
}

/// Build a problem link from a base URL and a slug.
pub fn problem_link(base: &str, slug: &str) -> String {
    format!("{}{}/", base, slug.replace('_', "-"))
}
