//! Solution header block parsing.
//!
//! Every tracked solution starts with a structured comment:
//!
//! ```text
//! """
//! 0605 - Can Place Flowers (can-place-flowers)
//! Idea: greedy scan with virtual zero padding
//! Time: O(n) | Space: O(1)
//! Tags: array, greedy
//! Link: https://leetcode.com/problems/can-place-flowers/
//! """
//! ```
//!
//! SQL solutions carry the same lines as a leading run of `--` comments.
//! Extraction differs per comment style; field parsing is shared.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

static DOCSTRING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)"""(.*?)""""#).unwrap());

static TITLE_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}\s*-\s*.+\(.+\)").unwrap());

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})\s*-\s*(.*?)\s*\((.*?)\)").unwrap());

static FIELD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^(idea|time|space|tags|link)\s*:[ \t]*(.*?)\s*$").unwrap());

static INLINE_SPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.*?)\s*\|\s*space\s*:\s*(.*)$").unwrap());

/// How a file kind writes its leading metadata comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// First triple-quoted string in the file.
    DocString,
    /// Leading run of `--` line comments; blank lines are skipped.
    LineComment,
}

impl CommentStyle {
    /// Extract the raw text of the leading metadata block, if any.
    pub fn extract_block(self, text: &str) -> Option<String> {
        match self {
            CommentStyle::DocString => DOCSTRING_REGEX
                .captures(text)
                .and_then(|cap| cap.get(1))
                .map(|m| m.as_str().to_string()),
            CommentStyle::LineComment => {
                let mut lines = Vec::new();
                for line in text.lines() {
                    let stripped = line.trim();
                    if let Some(comment) = stripped.strip_prefix("--") {
                        lines.push(comment.trim());
                    } else if !stripped.is_empty() {
                        break;
                    }
                }
                if lines.is_empty() {
                    None
                } else {
                    Some(lines.join("\n"))
                }
            }
        }
    }

    /// Extract and parse the header of a solution file.
    pub fn parse(self, text: &str) -> SolutionHeader {
        self.extract_block(text)
            .map(|block| parse_block(&block))
            .unwrap_or_default()
    }
}

/// Metadata carried by a solution's header block.
///
/// `id` is `None` when the block or its title line is missing, which marks
/// the file as not being a tracked problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionHeader {
    pub id: Option<u32>,
    pub title: String,
    pub slug: String,
    pub idea: String,
    pub time: String,
    pub space: String,
    pub tags: Vec<String>,
    pub link: String,
}

impl SolutionHeader {
    pub fn is_tracked(&self) -> bool {
        self.id.is_some()
    }
}

/// Parse an extracted header block.
pub fn parse_block(block: &str) -> SolutionHeader {
    let mut header = SolutionHeader::default();

    if let Some(caps) = block
        .lines()
        .map(str::trim)
        .find(|line| TITLE_LINE_REGEX.is_match(line))
        .and_then(|line| TITLE_REGEX.captures(line))
    {
        header.id = caps[1].parse().ok();
        header.title = caps[2].to_string();
        header.slug = caps[3].to_string();
    }

    let mut space_line = None;
    let mut tags_line = String::new();
    let mut seen = HashSet::new();
    for caps in FIELD_REGEX.captures_iter(block) {
        let label = caps[1].to_lowercase();
        // First occurrence of each label wins, even when its value is empty.
        if !seen.insert(label.clone()) {
            continue;
        }
        let value = caps[2].to_string();
        match label.as_str() {
            "idea" => header.idea = value,
            "time" => header.time = value,
            "space" => space_line = Some(value),
            "tags" => tags_line = value,
            "link" => header.link = value,
            _ => {}
        }
    }

    // `Time: O(n) | Space: O(1)` on one line.
    if let Some(caps) = INLINE_SPACE_REGEX.captures(&header.time) {
        let time = caps[1].trim().to_string();
        let inline_space = caps[2].trim().to_string();
        header.time = time;
        if space_line.is_none() {
            space_line = Some(inline_space);
        }
    }
    header.space = space_line.unwrap_or_default();

    header.tags = tags_line
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    header
}
