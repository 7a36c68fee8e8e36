//! Solution directory scanning.
//!
//! A file counts as solving plan id N when its name starts with N as a
//! four-digit zero-padded number followed by `_`. Names starting with `_`
//! are reserved for templates and private files and are never scanned.
//! The header block is parsed separately and supplies descriptive metadata.

use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::header::SolutionHeader;
use crate::kind::SolutionKind;
use crate::registry::Track;

/// Prefix marking templates and other files excluded from scanning.
pub const RESERVED_PREFIX: char = '_';

static FILENAME_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})_").unwrap());

/// A solution file found on disk.
#[derive(Debug, Clone)]
pub struct ScannedSolution {
    pub path: PathBuf,
    pub kind: SolutionKind,
    /// Id from the filename prefix; decides solved state
    pub file_id: Option<u32>,
    /// Parsed header block; `header.id` may disagree with `file_id`
    pub header: SolutionHeader,
}

/// Id encoded in a filename's four-digit prefix.
pub fn filename_id(file_name: &str) -> Option<u32> {
    FILENAME_ID_REGEX
        .captures(file_name)
        .and_then(|cap| cap[1].parse().ok())
}

pub fn is_reserved(file_name: &str) -> bool {
    file_name.starts_with(RESERVED_PREFIX)
}

/// All non-reserved files of `kind` under `dir`, recursively, sorted by path.
/// A missing directory yields an empty list.
pub fn solution_files(dir: &Path, kind: SolutionKind) -> Vec<PathBuf> {
    if !dir.exists() {
        debug!("Solution directory {} does not exist", dir.display());
        return Vec::new();
    }

    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == kind.extension())
        })
        .filter(|e| !is_reserved(&e.file_name().to_string_lossy()))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Scan and parse every solution of `kind` under `dir`.
///
/// Solved state comes from the filename alone: invalid UTF-8 is decoded
/// lossily, and an unreadable file is kept with an empty header.
pub fn scan_dir(dir: &Path, kind: SolutionKind) -> Vec<ScannedSolution> {
    let style = kind.comment_style();
    let mut solutions = Vec::new();

    for path in solution_files(dir, kind) {
        let file_id = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(filename_id);

        let header = match std::fs::read(&path) {
            Ok(bytes) => style.parse(&String::from_utf8_lossy(&bytes)),
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                SolutionHeader::default()
            }
        };

        if let (Some(from_name), Some(from_header)) = (file_id, header.id)
            && from_name != from_header
        {
            warn!(
                "{}: filename id {:04} does not match header id {:04}",
                path.display(),
                from_name,
                from_header
            );
        }

        solutions.push(ScannedSolution {
            path,
            kind,
            file_id,
            header,
        });
    }

    debug!("Scanned {} {} files under {}", solutions.len(), kind, dir.display());
    solutions
}

/// Scan every solution directory a track declares.
pub fn scan_track(config: &Config, track: &Track) -> Vec<ScannedSolution> {
    SolutionKind::ALL
        .into_iter()
        .filter_map(|kind| track.solution_dir(kind).map(|dir| (kind, dir)))
        .flat_map(|(kind, dir)| scan_dir(&config.resolve(dir), kind))
        .collect()
}

/// Ids solved on disk, derived from filename prefixes only.
pub fn solved_ids(solutions: &[ScannedSolution]) -> BTreeSet<u32> {
    solutions.iter().filter_map(|s| s.file_id).collect()
}
