//! Markdown progress checklist per track.

use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use crate::plan::PlanItem;
use crate::taxonomy::UNCATEGORIZED;

static DONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*-\s*\[x\]").unwrap());

static BOX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^\s*-\s*\[(?: |x)\]").unwrap());

/// Render a checklist with one section per category (alphabetical) and one
/// checkbox per plan item (by id), ticked when the id is solved on disk.
pub fn render_checklist(track_name: &str, items: &[PlanItem], solved: &BTreeSet<u32>) -> String {
    let mut by_category: BTreeMap<&str, Vec<&PlanItem>> = BTreeMap::new();
    for item in items {
        let category = if item.category.is_empty() {
            UNCATEGORIZED
        } else {
            item.category.as_str()
        };
        by_category.entry(category).or_default().push(item);
    }

    let mut lines = vec![format!("# {} — Progress\n", track_name)];
    for (category, mut entries) in by_category {
        lines.push(format!("\n## {}\n", category));
        entries.sort_by_key(|item| item.id);
        for item in entries {
            let mark = if solved.contains(&item.id) { 'x' } else { ' ' };
            lines.push(format!("- [{}] {:04} — {}", mark, item.id, item.slug));
        }
    }

    let mut md = lines.join("\n");
    md.push('\n');
    md
}

/// Count `(done, total)` checkboxes in checklist markdown.
pub fn count_checkboxes(markdown: &str) -> (usize, usize) {
    (
        DONE_REGEX.find_iter(markdown).count(),
        BOX_REGEX.find_iter(markdown).count(),
    )
}
