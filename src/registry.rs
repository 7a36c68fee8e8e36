//! Track registry (`tracks/registry.json`).
//!
//! ```json
//! {
//!   "tracks": [
//!     {
//!       "key": "leetcode-75",
//!       "name": "LeetCode 75",
//!       "csv": "tracks/leetcode-75.csv",
//!       "plan_json": "tracks/leetcode-75.json",
//!       "checklist_md": "tracks/leetcode-75.md",
//!       "dir_py": "python/leetcode-75"
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::GrindError;
use crate::kind::SolutionKind;

/// A named practice set with its plan and generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub key: String,
    pub name: String,
    pub csv: String,
    pub plan_json: String,
    pub checklist_md: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir_py: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir_sql: Option<String>,
}

impl Track {
    /// Track with the conventional `tracks/<key>.*` artifact layout.
    pub fn with_defaults(key: &str, name: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            csv: format!("tracks/{}.csv", key),
            plan_json: format!("tracks/{}.json", key),
            checklist_md: format!("tracks/{}.md", key),
            dir_py: None,
            dir_sql: None,
        }
    }

    /// Solution directory for a kind, if the track has one.
    pub fn solution_dir(&self, kind: SolutionKind) -> Option<&str> {
        match kind {
            SolutionKind::Py => self.dir_py.as_deref(),
            SolutionKind::Sql => self.dir_sql.as_deref(),
        }
    }

    pub fn set_solution_dir(&mut self, kind: SolutionKind, dir: String) {
        match kind {
            SolutionKind::Py => self.dir_py = Some(dir),
            SolutionKind::Sql => self.dir_sql = Some(dir),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    pub tracks: Vec<Track>,
}

impl Registry {
    /// Load the registry. A missing or malformed registry is fatal.
    pub fn load(path: &Path) -> Result<Self, GrindError> {
        let content = std::fs::read_to_string(path).map_err(|source| GrindError::RegistryRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| GrindError::RegistryParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), GrindError> {
        let content = serde_json::to_string_pretty(self)?;
        crate::util::write_file(path, &content)
    }

    pub fn find(&self, key: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.key == key)
    }

    /// Append a track, rejecting duplicate keys.
    pub fn add(&mut self, track: Track) -> Result<(), GrindError> {
        if self.find(&track.key).is_some() {
            return Err(GrindError::DuplicateTrack(track.key));
        }
        self.tracks.push(track);
        Ok(())
    }
}
