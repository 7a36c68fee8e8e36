//! Scaffolding for new solutions and new tracks, plus the filename lint.
//!
//! Every identifier that becomes part of a path is checked by
//! `sanitize_path_component` before anything is written.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::Config;
use crate::errors::GrindError;
use crate::kind::SolutionKind;
use crate::plan::{PLAN_HEADER, PlanRow, append_row, plan_contains};
use crate::registry::{Registry, Track};
use crate::scanner::solution_files;
use crate::util::{read_file, write_file};

/// Largest id that fits the four-digit filename prefix.
pub const MAX_ID: u32 = 9999;

/// Accept only `[A-Za-z0-9_-]+`, which rules out separators, `..` and NUL.
pub fn sanitize_path_component<'a>(
    field: &'static str,
    value: &'a str,
) -> Result<&'a str, GrindError> {
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(value)
    } else {
        Err(GrindError::UnsafePathComponent {
            field,
            value: value.to_string(),
        })
    }
}

/// Template file for a track: `<kind dir>/<track>/_template.<ext>`.
pub fn template_path(config: &Config, kind: SolutionKind, track: &str) -> PathBuf {
    config
        .kind_dir(kind)
        .join(track)
        .join(format!("_template.{}", kind.extension()))
}

/// Parameters of `grind new`.
#[derive(Debug, Clone)]
pub struct NewSolution {
    pub kind: SolutionKind,
    pub track: String,
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub difficulty: String,
    pub category: String,
    /// Comma-separated, as typed
    pub tags: String,
}

/// What `create_solution` did.
#[derive(Debug, Clone)]
pub struct Scaffolded {
    pub path: PathBuf,
    pub csv_row_added: bool,
}

impl NewSolution {
    pub fn file_name(&self) -> String {
        format!("{:04}_{}.{}", self.id, self.slug, self.kind.extension())
    }

    /// Header block prepended to the template content.
    pub fn header(&self, config: &Config) -> String {
        let link = config.problem_link(&self.slug);
        match self.kind {
            SolutionKind::Py => format!(
                "\"\"\"\n{:04} - {} ({})\nIdea: \nTime:  | Space: \nTags: {}\nLink: {}\n\"\"\"\n\n",
                self.id, self.title, self.slug, self.tags, link
            ),
            SolutionKind::Sql => format!(
                "-- {:04} - {} ({})\n-- Idea: \n-- Tags: {}\n-- Link: {}\n\n",
                self.id, self.title, self.slug, self.tags, link
            ),
        }
    }
}

/// Create a solution file from the track template and register the problem
/// in the track's CSV plan when it is not there yet.
pub fn create_solution(config: &Config, request: &NewSolution) -> Result<Scaffolded, GrindError> {
    let track = sanitize_path_component("track", &request.track)?;
    sanitize_path_component("slug", &request.slug)?;
    if request.id > MAX_ID {
        return Err(GrindError::IdOutOfRange(request.id));
    }

    let template = template_path(config, request.kind, track);
    if !template.exists() {
        return Err(GrindError::UnknownTemplate {
            track: track.to_string(),
            kind: request.kind.to_string(),
            path: template,
        });
    }

    let dest = config
        .kind_dir(request.kind)
        .join(track)
        .join(request.file_name());
    if dest.exists() {
        return Err(GrindError::AlreadyExists(dest));
    }

    // Registry and plan are read before anything is written.
    let body = read_file(&template)?;
    let plan_csv = unplanned_csv(config, request)?;

    write_file(&dest, &format!("{}{}", request.header(config), body))?;
    info!("Created {}", config.display_relative(&dest));

    let csv_row_added = match plan_csv {
        Some(csv_path) => {
            append_row(
                &csv_path,
                &PlanRow {
                    id: request.id,
                    title: &request.title,
                    slug: &request.slug,
                    difficulty: &request.difficulty,
                    category: &request.category,
                    tags: &request.tags,
                },
            )?;
            info!("Added {:04} to {}", request.id, config.display_relative(&csv_path));
            true
        }
        None => false,
    };

    Ok(Scaffolded {
        path: dest,
        csv_row_added,
    })
}

/// The track's CSV plan when the track is registered, the CSV exists, and
/// the id is not planned yet.
fn unplanned_csv(config: &Config, request: &NewSolution) -> Result<Option<PathBuf>, GrindError> {
    if !config.registry_file.exists() {
        debug!("No registry, skipping CSV update");
        return Ok(None);
    }
    let registry = Registry::load(&config.registry_file)?;
    let Some(track) = registry.find(&request.track) else {
        debug!("Track {} is not registered, skipping CSV update", request.track);
        return Ok(None);
    };

    let csv_path = config.resolve(&track.csv);
    if !csv_path.exists() || plan_contains(&csv_path, request.id)? {
        return Ok(None);
    }
    Ok(Some(csv_path))
}

/// What `add_track` created.
#[derive(Debug, Clone)]
pub struct AddedTrack {
    pub track: Track,
    pub solution_dir: PathBuf,
    pub template: Option<PathBuf>,
    pub csv: PathBuf,
}

/// Register a new track: solution directory, copied template, empty CSV
/// plan and a registry entry.
pub fn add_track(
    config: &Config,
    key: &str,
    name: &str,
    kind: SolutionKind,
) -> Result<AddedTrack, GrindError> {
    let key = sanitize_path_component("key", key)?;

    let mut registry = if config.registry_file.exists() {
        Registry::load(&config.registry_file)?
    } else {
        Registry::default()
    };
    if registry.find(key).is_some() {
        return Err(GrindError::DuplicateTrack(key.to_string()));
    }

    let solution_dir = config.kind_dir(kind).join(key);
    std::fs::create_dir_all(&solution_dir).map_err(|source| GrindError::FileWrite {
        path: solution_dir.clone(),
        source,
    })?;

    let template_dest = template_path(config, kind, key);
    let template = match base_template(config.kind_dir(kind), kind) {
        Some(src) if !template_dest.exists() => {
            std::fs::copy(&src, &template_dest).map_err(|source| GrindError::FileWrite {
                path: template_dest.clone(),
                source,
            })?;
            Some(template_dest)
        }
        _ if template_dest.exists() => Some(template_dest),
        _ => None,
    };

    let mut track = Track::with_defaults(key, name);
    track.set_solution_dir(
        kind,
        format!("{}/{}", config.kind_dir_relative(kind).trim_end_matches('/'), key),
    );

    let csv = config.resolve(&track.csv);
    if !csv.exists() {
        write_file(&csv, PLAN_HEADER)?;
    }

    registry.add(track.clone())?;
    registry.save(&config.registry_file)?;
    info!("Registered track {}", key);

    Ok(AddedTrack {
        track,
        solution_dir,
        template,
        csv,
    })
}

/// First `_template.<ext>` found in an existing track directory of `kind`.
fn base_template(kind_dir: &Path, kind: SolutionKind) -> Option<PathBuf> {
    let name = format!("_template.{}", kind.extension());
    WalkDir::new(kind_dir)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .find(|e| e.file_type().is_file() && e.file_name().to_str() == Some(name.as_str()))
        .map(walkdir::DirEntry::into_path)
}

static PY_FILENAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}_[a-z0-9_]+\.py$").unwrap());
static SQL_FILENAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}_[a-z0-9_]+\.sql$").unwrap());

fn filename_pattern(kind: SolutionKind) -> &'static Regex {
    match kind {
        SolutionKind::Py => &PY_FILENAME_REGEX,
        SolutionKind::Sql => &SQL_FILENAME_REGEX,
    }
}

/// Solution files whose names do not follow `NNNN_lower_snake.<ext>`.
pub fn check_filenames(config: &Config) -> Vec<PathBuf> {
    let mut bad = Vec::new();
    for kind in SolutionKind::ALL {
        let pattern = filename_pattern(kind);
        bad.extend(
            solution_files(config.kind_dir(kind), kind)
                .into_iter()
                .filter(|path| {
                    path.file_name()
                        .and_then(|n| n.to_str())
                        .is_none_or(|n| !pattern.is_match(n))
                }),
        );
    }
    bad
}
