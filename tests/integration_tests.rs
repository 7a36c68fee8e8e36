//! Integration tests for grind
//!
//! Each test builds a small practice repository in a temp directory and
//! drives the binary against it.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a grind Command rooted at `dir`
fn grind(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("grind");
    cmd.arg("--root").arg(dir.path()).env_remove("GRIND_ROOT");
    cmd
}

const REGISTRY: &str = r#"{
  "tracks": [
    {"key": "leetcode-75", "name": "LeetCode 75", "csv": "tracks/leetcode-75.csv",
     "plan_json": "tracks/leetcode-75.json", "checklist_md": "tracks/leetcode-75.md",
     "dir_py": "python/leetcode-75"},
    {"key": "sql-50", "name": "SQL 50", "csv": "tracks/sql-50.csv",
     "plan_json": "tracks/sql-50.json", "checklist_md": "tracks/sql-50.md",
     "dir_sql": "sql/sql-50"}
  ]
}"#;

/// Helper to create a practice repository with two tracks and no solutions
fn create_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    for sub in ["tracks", "python/leetcode-75", "sql/sql-50"] {
        fs::create_dir_all(root.join(sub)).unwrap();
    }
    fs::write(root.join("tracks/registry.json"), REGISTRY).unwrap();
    fs::write(
        root.join("tracks/leetcode-75.csv"),
        "id,title,slug,difficulty,category,tags\n\
         1,Two Sum,two-sum,Easy,Hash Map / Set,\"Array, Hash Table\"\n\
         605,Can Place Flowers,can-place-flowers,Easy,,Greedy\n",
    )
    .unwrap();
    fs::write(
        root.join("tracks/sql-50.csv"),
        "id,title,slug,difficulty,category,tags\n\
         1757,Recyclable and Low Fat Products,recyclable-and-low-fat-products,Easy,,Database\n",
    )
    .unwrap();
    fs::write(
        root.join("README.md"),
        "# Practice\n\n<!-- PROGRESS:lc75:start -->?<!-- PROGRESS:lc75:end -->\n",
    )
    .unwrap();
    fs::write(
        root.join("python/leetcode-75/_template.py"),
        "class Solution:\n    pass\n",
    )
    .unwrap();
    fs::write(root.join("sql/sql-50/_template.sql"), "SELECT 1;\n").unwrap();
    dir
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

// =============================================================================
// Basic CLI Tests
// =============================================================================

mod cli_basics {
    use super::*;

    #[test]
    fn test_grind_help() {
        cargo_bin_cmd!("grind")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("sync"));
    }

    #[test]
    fn test_grind_version() {
        cargo_bin_cmd!("grind").arg("--version").assert().success();
    }

    #[test]
    fn test_invalid_type_rejected() {
        let dir = create_repo();
        grind(&dir)
            .args(["new", "--type", "rb", "--track", "leetcode-75", "--id", "1"])
            .args(["--slug", "two_sum", "--title", "Two Sum"])
            .assert()
            .failure();
    }
}

// =============================================================================
// Sync Pipeline Tests
// =============================================================================

mod sync_pipeline {
    use super::*;

    #[test]
    fn test_sync_writes_artifacts() {
        let dir = create_repo();
        fs::write(
            dir.path().join("python/leetcode-75/0001_two_sum.py"),
            "\"\"\"\n0001 - Two Sum (two-sum)\nIdea: map\nTime: O(n) | Space: O(n)\nTags: array\n\"\"\"\n",
        )
        .unwrap();

        grind(&dir)
            .arg("sync")
            .assert()
            .success()
            .stdout(predicate::str::contains("Leetcode 75: 1/2 (50%)"))
            .stdout(predicate::str::contains("Sync complete"));

        let root = dir.path();
        assert!(read(root, "README.md").contains(
            "<!-- PROGRESS:lc75:start -->Leetcode 75: 1/2 (50%)<!-- PROGRESS:lc75:end -->"
        ));
        assert!(read(root, "README.md").contains(
            "<!-- PROGRESS:sql50:start -->Sql 50: 0/1 (0%)<!-- PROGRESS:sql50:end -->"
        ));
        assert!(read(root, "tracks/leetcode-75.md").contains("- [x] 0001 — two-sum"));
        assert!(read(root, "tracks/sql-50.md").contains("- [ ] 1757 — recyclable-and-low-fat-products"));

        let index: serde_json::Value = serde_json::from_str(&read(root, "docs/data/index.json")).unwrap();
        assert_eq!(index["items"].as_array().unwrap().len(), 1);
        assert_eq!(index["items"][0]["category"], "Hash Map / Set");
        assert_eq!(index["items"][0]["space"], "O(n)");
    }

    #[test]
    fn test_sync_counts_non_utf8_solution() {
        let dir = create_repo();
        fs::write(dir.path().join("python/leetcode-75/0605_flowers.py"), [0xff, 0xfe, b'x']).unwrap();

        grind(&dir)
            .arg("sync")
            .assert()
            .success()
            .stdout(predicate::str::contains("Leetcode 75: 1/2 (50%)"));
        assert!(read(dir.path(), "tracks/leetcode-75.md").contains("- [x] 0605 — can-place-flowers"));
    }

    #[test]
    fn test_sync_is_idempotent() {
        let dir = create_repo();
        grind(&dir).arg("sync").assert().success();
        let readme = read(dir.path(), "README.md");
        let checklist = read(dir.path(), "tracks/leetcode-75.md");

        grind(&dir).arg("sync").assert().success();
        assert_eq!(read(dir.path(), "README.md"), readme);
        assert_eq!(read(dir.path(), "tracks/leetcode-75.md"), checklist);
    }

    #[test]
    fn test_sync_missing_registry_fails() {
        let dir = create_repo();
        fs::remove_file(dir.path().join("tracks/registry.json")).unwrap();

        grind(&dir)
            .arg("sync")
            .assert()
            .failure()
            .stderr(predicate::str::contains("registry.json"));
    }

    #[test]
    fn test_sync_missing_readme_fails() {
        let dir = create_repo();
        fs::remove_file(dir.path().join("README.md")).unwrap();

        grind(&dir).arg("sync").assert().failure();
    }

    #[test]
    fn test_progress_reads_checklists() {
        let dir = create_repo();
        grind(&dir).arg("sync").assert().success();
        fs::write(
            dir.path().join("tracks/leetcode-75.md"),
            "# LeetCode 75 — Progress\n\n## Greedy\n- [X] 0605 — can-place-flowers\n- [ ] 0001 — two-sum\n",
        )
        .unwrap();

        grind(&dir)
            .arg("progress")
            .assert()
            .success()
            .stdout(predicate::str::contains("Leetcode 75: 1/2 (50%)"));
    }

    #[test]
    fn test_index_uses_plan_snapshots() {
        let dir = create_repo();
        grind(&dir).arg("sync").assert().success();
        fs::write(
            dir.path().join("sql/sql-50/1757_recyclable.sql"),
            "-- 1757 - Recyclable (recyclable)\n-- Tags: where\nSELECT product_id FROM Products;\n",
        )
        .unwrap();

        grind(&dir)
            .arg("index")
            .assert()
            .success()
            .stdout(predicate::str::contains("(1 items)"));

        let index: serde_json::Value =
            serde_json::from_str(&read(dir.path(), "docs/data/index.json")).unwrap();
        assert_eq!(index["items"][0]["type"], "sql");
        assert_eq!(index["items"][0]["difficulty"], "Easy");
        assert_eq!(index["items"][0]["tags"], serde_json::json!(["where", "database"]));
    }
}

// =============================================================================
// Scaffolding Tests
// =============================================================================

mod scaffolding {
    use super::*;

    #[test]
    fn test_new_creates_solution() {
        let dir = create_repo();

        grind(&dir)
            .args(["new", "--type", "py", "--track", "leetcode-75", "--id", "1768"])
            .args(["--slug", "merge_strings", "--title", "Merge Strings Alternately"])
            .assert()
            .success()
            .stdout(predicate::str::contains("python/leetcode-75/1768_merge_strings.py"));

        let content = read(dir.path(), "python/leetcode-75/1768_merge_strings.py");
        assert!(content.starts_with("\"\"\"\n1768 - Merge Strings Alternately (merge_strings)\n"));
        assert!(content.contains("Link: https://leetcode.com/problems/merge-strings/\n"));
        assert!(content.ends_with("class Solution:\n    pass\n"));

        assert!(read(dir.path(), "tracks/leetcode-75.csv").contains("1768,Merge Strings Alternately,merge_strings"));
    }

    #[test]
    fn test_new_defaults_slug_from_title() {
        let dir = create_repo();

        grind(&dir)
            .args(["new", "--type", "sql", "--track", "sql-50", "--id", "584"])
            .args(["--title", "Find Customer Referee"])
            .assert()
            .success();

        assert!(dir.path().join("sql/sql-50/0584_find_customer_referee.sql").exists());
    }

    #[test]
    fn test_new_rejects_traversal() {
        let dir = create_repo();

        grind(&dir)
            .args(["new", "--type", "py", "--track", "leetcode-75", "--id", "1"])
            .args(["--slug", "../../evil", "--title", "Evil"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unsafe path component"));

        assert!(!dir.path().join("evil.py").exists());
    }

    #[test]
    fn test_new_unknown_track() {
        let dir = create_repo();

        grind(&dir)
            .args(["new", "--type", "py", "--track", "nope", "--id", "1"])
            .args(["--slug", "x", "--title", "X"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown track 'nope'"));
    }

    #[test]
    fn test_add_track_then_sync() {
        let dir = create_repo();

        grind(&dir)
            .args(["add-track", "--key", "neetcode-150", "--name", "NeetCode 150", "--type", "py"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Registered track neetcode-150"));

        assert!(dir.path().join("python/neetcode-150/_template.py").exists());
        assert!(read(dir.path(), "tracks/registry.json").contains("neetcode-150"));

        grind(&dir)
            .args(["new", "--type", "py", "--track", "neetcode-150", "--id", "1"])
            .args(["--slug", "two_sum", "--title", "Two Sum", "--tags", "array"])
            .assert()
            .success();

        grind(&dir)
            .arg("sync")
            .assert()
            .success()
            .stdout(predicate::str::contains("NeetCode 150: 1/1 (100%)"));
    }

    #[test]
    fn test_check_names() {
        let dir = create_repo();
        fs::write(dir.path().join("python/leetcode-75/0001_two_sum.py"), "").unwrap();

        grind(&dir)
            .arg("check-names")
            .assert()
            .success()
            .stdout(predicate::str::contains("All filenames OK"));

        fs::write(dir.path().join("python/leetcode-75/two_sum.py"), "").unwrap();

        grind(&dir)
            .arg("check-names")
            .assert()
            .failure()
            .stdout(predicate::str::contains("two_sum.py"));
    }
}

// =============================================================================
// Configuration Tests
// =============================================================================

mod configuration {
    use super::*;

    #[test]
    fn test_grind_toml_overrides_index_path() {
        let dir = create_repo();
        fs::write(dir.path().join("grind.toml"), "[paths]\nindex = \"site/index.json\"\n").unwrap();

        grind(&dir).arg("sync").assert().success();
        assert!(dir.path().join("site/index.json").exists());
        assert!(!dir.path().join("docs/data/index.json").exists());
    }

    #[test]
    fn test_root_from_env() {
        let dir = create_repo();

        cargo_bin_cmd!("grind")
            .env("GRIND_ROOT", dir.path())
            .arg("sync")
            .assert()
            .success();
        assert!(dir.path().join("docs/data/index.json").exists());
    }

    #[test]
    fn test_config_validate_warns() {
        let dir = create_repo();
        fs::write(dir.path().join("grind.toml"), "[links]\nproblem_base = \"https://x\"\n").unwrap();

        grind(&dir)
            .args(["config", "validate"])
            .assert()
            .success()
            .stdout(predicate::str::contains("should end with '/'"));
    }
}
