//! Consolidated solution index for the static front-end.
//!
//! The index is the only contract with the page under `docs/`: it lists
//! every tracked solution across all tracks, merged with its plan metadata,
//! together with the sorted sets of tracks, tags and categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::{debug, warn};

use crate::config::Config;
use crate::kind::SolutionKind;
use crate::plan::{PlanItem, PlanSnapshot};
use crate::registry::Track;
use crate::scanner::ScannedSolution;
use crate::taxonomy::auto_category;
use crate::util::dedup_preserving_order;

/// A solution merged with its plan metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub idea: String,
    pub time: String,
    pub space: String,
    pub tags: Vec<String>,
    pub link: String,
    pub difficulty: String,
    pub category: String,
    pub track: String,
    #[serde(rename = "type")]
    pub kind: SolutionKind,
    pub path: String,
}

/// The document written to `docs/data/index.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionIndex {
    pub generated_at: DateTime<Utc>,
    pub tracks: Vec<String>,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub items: Vec<IndexEntry>,
}

impl SolutionIndex {
    /// Sort entries by (track, type, id) and derive the facet lists.
    pub fn new(mut items: Vec<IndexEntry>, generated_at: DateTime<Utc>) -> Self {
        items.sort_by(|a, b| (&a.track, a.kind, a.id).cmp(&(&b.track, b.kind, b.id)));

        let tracks: BTreeSet<&str> = items.iter().map(|i| i.track.as_str()).collect();
        let tags: BTreeSet<&str> = items
            .iter()
            .flat_map(|i| i.tags.iter().map(String::as_str))
            .collect();
        let categories: BTreeSet<&str> = items
            .iter()
            .map(|i| i.category.as_str())
            .filter(|c| !c.is_empty())
            .collect();

        Self {
            generated_at,
            tracks: tracks.into_iter().map(String::from).collect(),
            tags: tags.into_iter().map(String::from).collect(),
            categories: categories.into_iter().map(String::from).collect(),
            items,
        }
    }
}

/// Plan items of one track keyed by id.
pub type PlanLookup<'a> = HashMap<u32, &'a PlanItem>;

pub fn plan_lookup(items: &[PlanItem]) -> PlanLookup<'_> {
    items.iter().map(|item| (item.id, item)).collect()
}

/// Merge a scanned solution with the plan item of the same id.
///
/// Returns `None` for files whose header carries no id; such files are not
/// tracked problems.
pub fn merge_entry(
    config: &Config,
    track: &Track,
    solution: &ScannedSolution,
    plan: &PlanLookup<'_>,
) -> Option<IndexEntry> {
    let header = &solution.header;
    let id = header.id?;
    let meta = plan.get(&id).copied();

    let plan_tags = meta.map(|m| m.tags.clone()).unwrap_or_default();
    let tags = dedup_preserving_order(header.tags.iter().cloned().chain(plan_tags));

    let category = meta
        .map(|m| m.category.clone())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| auto_category(&tags, solution.kind.default_category()));

    let link = if header.link.is_empty() {
        meta.map(|m| m.link.clone()).unwrap_or_default()
    } else {
        header.link.clone()
    };

    let title = if header.title.is_empty() {
        meta.map(|m| m.title.clone()).unwrap_or_default()
    } else {
        header.title.clone()
    };

    Some(IndexEntry {
        id,
        title,
        slug: header.slug.clone(),
        idea: header.idea.clone(),
        time: header.time.clone(),
        space: header.space.clone(),
        tags,
        link,
        difficulty: meta.map(|m| m.difficulty.clone()).unwrap_or_default(),
        category,
        track: track.key.clone(),
        kind: solution.kind,
        path: config.display_relative(&solution.path),
    })
}

/// Index entries for one track's scanned solutions.
pub fn track_entries(
    config: &Config,
    track: &Track,
    solutions: &[ScannedSolution],
    plan: &PlanLookup<'_>,
) -> Vec<IndexEntry> {
    solutions
        .iter()
        .filter(|s| {
            if !s.header.is_tracked() {
                debug!("{} has no header id, not indexed", s.path.display());
            }
            s.header.is_tracked()
        })
        .filter_map(|s| merge_entry(config, track, s, plan))
        .collect()
}

/// Read a previously written plan snapshot. Unreadable snapshots are logged
/// and treated as empty so the index can still be rebuilt.
pub fn load_plan_snapshot(path: &Path) -> Vec<PlanItem> {
    if !path.exists() {
        debug!("No plan snapshot at {}", path.display());
        return Vec::new();
    }

    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|content| {
            serde_json::from_str::<PlanSnapshot>(&content).map_err(|e| e.to_string())
        });

    match parsed {
        Ok(snapshot) => snapshot.items,
        Err(e) => {
            warn!("Failed to load plan {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
