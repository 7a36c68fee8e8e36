//! The track synchronization pipeline.
//!
//! One linear pass: load the registry, then for each track parse its CSV
//! plan and scan its solution directories, write the plan snapshot and the
//! checklist, then update the README progress markers and rebuild the
//! consolidated index. Every output file is overwritten wholesale, so a
//! re-run with unchanged inputs produces the same files (apart from the
//! index timestamp).

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::checklist::{count_checkboxes, render_checklist};
use crate::config::Config;
use crate::errors::GrindError;
use crate::index::{IndexEntry, SolutionIndex, load_plan_snapshot, plan_lookup, track_entries};
use crate::plan::{PlanSnapshot, load_plan};
use crate::progress::{TrackProgress, apply_progress};
use crate::registry::{Registry, Track};
use crate::scanner::{scan_track, solved_ids};
use crate::util::{read_file, write_file, write_json};

/// Outcome of synchronizing one track.
#[derive(Debug, Clone)]
pub struct TrackSync {
    pub progress: TrackProgress,
    pub entries: Vec<IndexEntry>,
    /// Whether the plan had items and artifacts were written
    pub wrote_artifacts: bool,
}

/// Outcome of a full `sync` run.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub tracks: Vec<TrackProgress>,
    pub index_file: PathBuf,
    pub index_items: usize,
}

/// Parse, scan and write the plan snapshot and checklist for one track.
pub fn sync_track(config: &Config, track: &Track) -> Result<TrackSync, GrindError> {
    let items = load_plan(&config.resolve(&track.csv), &config.problem_base)?;
    let solutions = scan_track(config, track);
    let solved = solved_ids(&solutions);

    let lookup = plan_lookup(&items);
    let entries = track_entries(config, track, &solutions, &lookup);

    if items.is_empty() {
        warn!("No items found for track {}", track.key);
        return Ok(TrackSync {
            progress: TrackProgress::new(&track.key, &track.name, 0, 0),
            entries,
            wrote_artifacts: false,
        });
    }

    let snapshot = PlanSnapshot {
        plan: track.key.clone(),
        items,
    };
    let plan_path = config.resolve(&track.plan_json);
    write_json(&plan_path, &snapshot)?;
    info!("Wrote {}", config.display_relative(&plan_path));

    let checklist_path = config.resolve(&track.checklist_md);
    write_file(
        &checklist_path,
        &render_checklist(&track.name, &snapshot.items, &solved),
    )?;
    info!("Wrote {}", config.display_relative(&checklist_path));

    let solved_count = snapshot
        .items
        .iter()
        .filter(|item| solved.contains(&item.id))
        .count();

    Ok(TrackSync {
        progress: TrackProgress::new(
            &track.key,
            &track.name,
            solved_count,
            snapshot.items.len(),
        ),
        entries,
        wrote_artifacts: true,
    })
}

/// Rewrite the README progress markers. A missing README is fatal.
pub fn update_readme(config: &Config, progress: &[TrackProgress]) -> Result<(), GrindError> {
    let readme = read_file(&config.readme_file)?;
    let updated = apply_progress(&readme, progress)?;
    if updated != readme {
        write_file(&config.readme_file, &updated)?;
        info!("Updated progress in {}", config.display_relative(&config.readme_file));
    }
    Ok(())
}

/// Write the consolidated index and return the number of entries.
pub fn write_index(
    config: &Config,
    entries: Vec<IndexEntry>,
    generated_at: DateTime<Utc>,
) -> Result<usize, GrindError> {
    let index = SolutionIndex::new(entries, generated_at);
    write_json(&config.index_file, &index)?;
    info!(
        "Wrote {} ({} items)",
        config.display_relative(&config.index_file),
        index.items.len()
    );
    Ok(index.items.len())
}

/// Run the whole pipeline.
pub fn sync_all(config: &Config) -> Result<SyncReport, GrindError> {
    let registry = Registry::load(&config.registry_file)?;

    let mut progress = Vec::with_capacity(registry.tracks.len());
    let mut entries = Vec::new();
    for track in &registry.tracks {
        let synced = sync_track(config, track)?;
        progress.push(synced.progress);
        entries.extend(synced.entries);
    }

    update_readme(config, &progress)?;
    let index_items = write_index(config, entries, Utc::now())?;

    Ok(SyncReport {
        tracks: progress,
        index_file: config.index_file.clone(),
        index_items,
    })
}

/// Rebuild only the index, using the plan snapshots written by the last sync.
pub fn rebuild_index(config: &Config) -> Result<usize, GrindError> {
    let registry = Registry::load(&config.registry_file)?;

    let mut entries = Vec::new();
    for track in &registry.tracks {
        let items = load_plan_snapshot(&config.resolve(&track.plan_json));
        let lookup = plan_lookup(&items);
        let solutions = scan_track(config, track);
        entries.extend(track_entries(config, track, &solutions, &lookup));
    }

    write_index(config, entries, Utc::now())
}

/// Refresh README progress from the checkboxes of the existing checklists.
pub fn refresh_progress(config: &Config) -> Result<Vec<TrackProgress>, GrindError> {
    let registry = Registry::load(&config.registry_file)?;

    let progress: Vec<TrackProgress> = registry
        .tracks
        .iter()
        .map(|track| {
            let path = config.resolve(&track.checklist_md);
            let (done, total) = match read_file(&path) {
                Ok(markdown) => count_checkboxes(&markdown),
                Err(e) => {
                    warn!("Could not read checklist: {}", e);
                    (0, 0)
                }
            };
            TrackProgress::new(&track.key, &track.name, done, total)
        })
        .collect();

    update_readme(config, &progress)?;
    Ok(progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::{TempDir, tempdir};

    const REGISTRY: &str = r#"{
      "tracks": [
        {"key": "leetcode-75", "name": "LeetCode 75", "csv": "tracks/leetcode-75.csv",
         "plan_json": "tracks/leetcode-75.json", "checklist_md": "tracks/leetcode-75.md",
         "dir_py": "python/leetcode-75"}
      ]
    }"#;

    const CSV: &str = "id,title,slug,difficulty,category,tags\n\
                       1,Two Sum,two-sum,Easy,,\"Array, Hash Table\"\n\
                       605,Can Place Flowers,can-place-flowers,Easy,,Greedy\n\
                       1768,Merge Strings Alternately,merge-strings-alternately,Easy,,\"String, Two Pointers\"\n";

    fn repo() -> (TempDir, Config) {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("tracks")).unwrap();
        fs::create_dir_all(root.join("python/leetcode-75")).unwrap();
        fs::write(root.join("tracks/registry.json"), REGISTRY).unwrap();
        fs::write(root.join("tracks/leetcode-75.csv"), CSV).unwrap();
        fs::write(
            root.join("README.md"),
            "# Grind\n\n<!-- PROGRESS:lc75:start -->-<!-- PROGRESS:lc75:end -->\n",
        )
        .unwrap();
        fs::write(
            root.join("python/leetcode-75/_template.py"),
            "\"\"\"\n0000 - Template (template)\n\"\"\"\n",
        )
        .unwrap();
        let config = Config::new(root.to_path_buf(), false).unwrap();
        (dir, config)
    }

    fn solve(root: &Path, name: &str, header: &str) {
        fs::write(root.join("python/leetcode-75").join(name), header).unwrap();
    }

    #[test]
    fn test_sync_all_writes_every_artifact() {
        let (dir, config) = repo();
        solve(
            dir.path(),
            "0001_two_sum.py",
            "\"\"\"\n0001 - Two Sum (two-sum)\nIdea: complement map\nTime: O(n) | Space: O(n)\nTags: array\n\"\"\"\n",
        );

        let report = sync_all(&config).unwrap();
        assert_eq!(report.tracks, vec![TrackProgress::new("leetcode-75", "LeetCode 75", 1, 3)]);
        assert_eq!(report.index_items, 1);

        let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(readme.contains("<!-- PROGRESS:lc75:start -->Leetcode 75: 1/3 (33%)<!-- PROGRESS:lc75:end -->"));

        let checklist = fs::read_to_string(dir.path().join("tracks/leetcode-75.md")).unwrap();
        assert!(checklist.contains("- [x] 0001 — two-sum"));
        assert!(checklist.contains("- [ ] 0605 — can-place-flowers"));

        let plan: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("tracks/leetcode-75.json")).unwrap()).unwrap();
        assert_eq!(plan["plan"], "leetcode-75");
        assert_eq!(plan["items"].as_array().unwrap().len(), 3);

        let index: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("docs/data/index.json")).unwrap()).unwrap();
        let item = &index["items"][0];
        assert_eq!(item["id"], 1);
        assert_eq!(item["type"], "py");
        assert_eq!(item["time"], "O(n)");
        assert_eq!(item["tags"], serde_json::json!(["array", "hashmap"]));
        assert_eq!(item["category"], "Array / String");
        assert_eq!(item["path"], "python/leetcode-75/0001_two_sum.py");
        assert_eq!(index["tracks"], serde_json::json!(["leetcode-75"]));
    }

    #[test]
    fn test_new_solution_flips_checkbox_on_rerun() {
        let (dir, config) = repo();
        sync_all(&config).unwrap();
        let before = fs::read_to_string(dir.path().join("tracks/leetcode-75.md")).unwrap();
        assert!(before.contains("- [ ] 1768 — merge-strings-alternately"));

        solve(dir.path(), "1768_merge_strings_alternately.py", "print('wip')\n");
        sync_all(&config).unwrap();
        let after = fs::read_to_string(dir.path().join("tracks/leetcode-75.md")).unwrap();
        assert!(after.contains("- [x] 1768 — merge-strings-alternately"));
    }

    #[test]
    fn test_unplanned_solution_indexed_but_not_counted() {
        let (dir, config) = repo();
        solve(dir.path(), "0009_palindrome_number.py", "\"\"\"\n0009 - Palindrome Number (palindrome-number)\n\"\"\"\n");

        let report = sync_all(&config).unwrap();
        assert_eq!(report.tracks[0].solved, 0);
        assert_eq!(report.tracks[0].total, 3);
        assert_eq!(report.index_items, 1);
    }

    #[test]
    fn test_rerun_is_idempotent_for_readme_and_checklist() {
        let (dir, config) = repo();
        solve(dir.path(), "0605_can_place_flowers.py", "");
        sync_all(&config).unwrap();
        let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
        let checklist = fs::read_to_string(dir.path().join("tracks/leetcode-75.md")).unwrap();

        sync_all(&config).unwrap();
        assert_eq!(readme, fs::read_to_string(dir.path().join("README.md")).unwrap());
        assert_eq!(checklist, fs::read_to_string(dir.path().join("tracks/leetcode-75.md")).unwrap());
    }

    #[test]
    fn test_missing_registry_is_fatal() {
        let (dir, config) = repo();
        fs::remove_file(dir.path().join("tracks/registry.json")).unwrap();
        assert!(matches!(sync_all(&config), Err(GrindError::RegistryRead { .. })));
    }

    #[test]
    fn test_missing_readme_is_fatal() {
        let (dir, config) = repo();
        fs::remove_file(dir.path().join("README.md")).unwrap();
        assert!(matches!(sync_all(&config), Err(GrindError::FileRead { .. })));
    }

    #[test]
    fn test_missing_csv_is_fatal() {
        let (dir, config) = repo();
        fs::remove_file(dir.path().join("tracks/leetcode-75.csv")).unwrap();
        assert!(matches!(sync_all(&config), Err(GrindError::CsvOpen { .. })));
    }

    #[test]
    fn test_empty_plan_skips_artifacts() {
        let (dir, config) = repo();
        fs::write(dir.path().join("tracks/leetcode-75.csv"), "id,title,slug,difficulty,category,tags\n").unwrap();
        let registry = Registry::load(&config.registry_file).unwrap();
        assert!(!sync_track(&config, &registry.tracks[0]).unwrap().wrote_artifacts);

        let report = sync_all(&config).unwrap();
        assert_eq!(report.tracks[0].total, 0);
        assert!(!dir.path().join("tracks/leetcode-75.md").exists());
        let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(readme.contains("Leetcode 75: 0/0 (0%)"));
    }

    #[test]
    fn test_rebuild_index_uses_plan_snapshot() {
        let (dir, config) = repo();
        sync_all(&config).unwrap();
        solve(dir.path(), "0605_can_place_flowers.py", "\"\"\"\n0605 - Can Place Flowers (can-place-flowers)\n\"\"\"\n");

        assert_eq!(rebuild_index(&config).unwrap(), 1);
        let index: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("docs/data/index.json")).unwrap()).unwrap();
        assert_eq!(index["items"][0]["difficulty"], "Easy");
        assert_eq!(index["items"][0]["category"], "Greedy");
    }

    #[test]
    fn test_refresh_progress_counts_checklist() {
        let (dir, config) = repo();
        solve(dir.path(), "0001_two_sum.py", "");
        solve(dir.path(), "0605_can_place_flowers.py", "");
        sync_all(&config).unwrap();

        let progress = refresh_progress(&config).unwrap();
        assert_eq!(progress[0].solved, 2);
        assert_eq!(progress[0].total, 3);
        let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(readme.contains("Leetcode 75: 2/3 (67%)"));
    }
}
