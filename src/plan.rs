//! Per-track CSV plans.
//!
//! A plan declares the problems of a track independent of whether a
//! solution exists on disk. The CSV has a header row
//! `id,title,slug,difficulty,category,tags`; `difficulty`, `category` and
//! `tags` may be empty or absent. Malformed rows are skipped with a warning.

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::config::problem_link;
use crate::errors::GrindError;
use crate::taxonomy::{UNCATEGORIZED, auto_category, normalize_tags};

/// One problem as declared in a track's CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub difficulty: String,
    pub category: String,
    pub tags: Vec<String>,
    pub link: String,
}

/// Snapshot written to a track's `plan_json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub plan: String,
    pub items: Vec<PlanItem>,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    tags: Option<String>,
}

/// Why a single row was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("invalid id '{0}'")]
    InvalidId(String),
}

fn required(value: Option<String>, field: &'static str) -> Result<String, RowError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(RowError::MissingField(field))
}

impl CsvRow {
    fn into_item(self, link_base: &str) -> Result<PlanItem, RowError> {
        let raw_id = required(self.id, "id")?;
        let id = raw_id
            .parse::<u32>()
            .map_err(|_| RowError::InvalidId(raw_id.clone()))?;
        let title = required(self.title, "title")?;
        let slug = required(self.slug, "slug")?;

        let tags = normalize_tags(self.tags.as_deref().unwrap_or_default());
        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| auto_category(&tags, UNCATEGORIZED));

        Ok(PlanItem {
            id,
            link: problem_link(link_base, &slug),
            title,
            slug,
            difficulty: self.difficulty.unwrap_or_default().trim().to_string(),
            category,
            tags,
        })
    }
}

/// Parse a plan from any reader. Rows that fail to decode or validate are
/// logged and skipped. The result is sorted by id.
pub fn parse_plan<R: Read>(reader: R, link_base: &str) -> Vec<PlanItem> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = match csv_reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            warn!("Invalid CSV header row: {}", e);
            return Vec::new();
        }
    };

    let mut items = Vec::new();
    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping unreadable CSV row: {}", e);
                continue;
            }
        };
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let row: CsvRow = match record.deserialize(Some(&headers)) {
            Ok(row) => row,
            Err(e) => {
                warn!(line, "Skipping invalid CSV row {:?}: {}", record, e);
                continue;
            }
        };

        match row.into_item(link_base) {
            Ok(item) => items.push(item),
            Err(e) => warn!(line, "Skipping invalid CSV row {:?}: {}", record, e),
        }
    }

    items.sort_by_key(|item| item.id);
    items
}

/// Parse the CSV plan at `path`. An unreadable file is fatal.
pub fn load_plan(path: &Path, link_base: &str) -> Result<Vec<PlanItem>, GrindError> {
    let file = std::fs::File::open(path).map_err(|source| GrindError::CsvOpen {
        path: path.to_path_buf(),
        source: source.into(),
    })?;
    Ok(parse_plan(file, link_base))
}

/// Whether a CSV plan already declares `id`. Unreadable rows are ignored.
pub fn plan_contains(path: &Path, id: u32) -> Result<bool, GrindError> {
    Ok(load_plan(path, "")?.iter().any(|item| item.id == id))
}

/// Append one row to an existing CSV plan.
pub fn append_row(path: &Path, row: &PlanRow<'_>) -> Result<(), GrindError> {
    let file = std::fs::OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|source| GrindError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(file);

    let id = row.id.to_string();
    let result = writer
        .write_record([
            id.as_str(),
            row.title,
            row.slug,
            row.difficulty,
            row.category,
            row.tags,
        ])
        .and_then(|_| writer.flush().map_err(csv::Error::from));

    result.map_err(|e| GrindError::FileWrite {
        path: path.to_path_buf(),
        source: std::io::Error::other(e),
    })
}

/// Borrowed CSV row used when appending to a plan.
#[derive(Debug, Clone, Copy)]
pub struct PlanRow<'a> {
    pub id: u32,
    pub title: &'a str,
    pub slug: &'a str,
    pub difficulty: &'a str,
    pub category: &'a str,
    pub tags: &'a str,
}

/// The header row of a fresh plan.
pub const PLAN_HEADER: &str = "id,title,slug,difficulty,category,tags\n";
