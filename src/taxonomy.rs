//! Fixed lookup tables for tags, categories and track labels.
//!
//! The tables are immutable and built once on first use.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const UNCATEGORIZED: &str = "Uncategorized";

/// Canonical spelling for tag labels as they appear on problem pages.
static TAG_NORMALIZE: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("Two Pointers", "two-pointers"),
        ("Sliding Window", "sliding-window"),
        ("Prefix Sum", "prefix-sum"),
        ("Hash Table", "hashmap"),
        ("Hash Map", "hashmap"),
        ("Set", "set"),
        ("Matrix", "matrix"),
        ("Array", "array"),
        ("String", "string"),
        ("Binary Search", "binary-search"),
        ("Greedy", "greedy"),
        ("Depth-First Search", "dfs"),
        ("Breadth-First Search", "bfs"),
        ("Union Find", "union-find"),
        ("Heap (Priority Queue)", "heap"),
        ("Priority Queue", "heap"),
        ("Stack", "stack"),
        ("Queue", "queue"),
        ("Graph", "graph"),
        ("Tree", "tree"),
        ("Binary Tree", "binary-tree"),
        ("Binary Search Tree", "bst"),
        ("Dynamic Programming", "dp"),
        ("Memoization", "memo"),
        ("Combinatorics", "combinatorics"),
        ("Sorting", "sorting"),
        ("Design", "design"),
        ("Simulation", "simulation"),
        ("Bit Manipulation", "bit"),
        ("Interactive", "interactive"),
        ("Window Functions", "window"),
    ])
});

/// Category inferred from a normalized tag.
static CATEGORY_FROM_TAG: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("two-pointers", "Two Pointers"),
        ("sliding-window", "Sliding Window"),
        ("prefix-sum", "Prefix Sum"),
        ("hashmap", "Hash Map / Set"),
        ("set", "Hash Map / Set"),
        ("array", "Array / String"),
        ("string", "Array / String"),
        ("binary-search", "Binary Search"),
        ("greedy", "Greedy"),
        ("dfs", "Graphs - DFS"),
        ("bfs", "Graphs - BFS"),
        ("union-find", "Graphs - DFS"),
        ("heap", "Heap / Priority Queue"),
        ("stack", "Monotonic Stack"),
        ("queue", "Queue"),
        ("graph", "Graphs - BFS"),
        ("tree", "Binary Tree - DFS"),
        ("binary-tree", "Binary Tree - DFS"),
        ("bst", "Binary Search Tree"),
        ("dp", "DP - 1D"),
        ("memo", "DP - 1D"),
        ("sorting", "Intervals"),
        ("simulation", "Stack"),
        ("bit", "Bit Manipulation"),
        ("window", "Window Functions"),
        ("join", "JOINs"),
        ("self-join", "JOINs"),
        ("matrix", "Binary Tree - BFS"),
        ("deque", "Sliding Window"),
        ("grid", "Graphs - BFS"),
        ("trie", "Trie"),
        ("combinatorics", "DP - Multidimensional"),
    ])
});

/// Short README marker keys for the well-known tracks.
static TRACK_MARKER_KEY: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("leetcode-75", "lc75"),
        ("top-interview-150", "ti150"),
        ("sql-50", "sql50"),
    ])
});

/// README display names for the well-known tracks.
static TRACK_DISPLAY_NAME: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("leetcode-75", "Leetcode 75"),
        ("top-interview-150", "Top Interview 150"),
        ("sql-50", "Sql 50"),
    ])
});

/// Normalize one tag label: table lookup, then lower-case with hyphens.
pub fn normalize_tag(raw: &str) -> String {
    let label = raw.trim();
    let mapped = TAG_NORMALIZE.get(label).copied().unwrap_or(label);
    mapped.to_lowercase().replace(' ', "-")
}

/// Split a comma-separated tag field and normalize each entry.
///
/// Order is preserved and duplicates are kept.
pub fn normalize_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(normalize_tag)
        .collect()
}

/// First category matching any tag, else `default`.
pub fn auto_category(tags: &[String], default: &str) -> String {
    tags.iter()
        .find_map(|t| CATEGORY_FROM_TAG.get(t.as_str()))
        .map(|c| c.to_string())
        .unwrap_or_else(|| default.to_string())
}

/// Marker key used in README progress comments for a track.
pub fn marker_key(track_key: &str) -> &str {
    TRACK_MARKER_KEY.get(track_key).copied().unwrap_or(track_key)
}

/// Display name for README progress; falls back to the registry name.
pub fn display_name<'a>(track_key: &str, fallback: &'a str) -> &'a str {
    match TRACK_DISPLAY_NAME.get(track_key) {
        Some(name) => name,
        None => fallback,
    }
}

/// Lower-case, ASCII-only, hyphen-separated slug of a title.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_ascii() {
            pending_dash = true;
        }
    }
    slug
}
