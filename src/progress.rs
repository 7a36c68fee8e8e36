//! README progress markers.
//!
//! Each track owns a pair of comments in the README:
//!
//! ```text
//! <!-- PROGRESS:lc75:start -->Leetcode 75: 7/75 (9%)<!-- PROGRESS:lc75:end -->
//! ```
//!
//! The text between them is replaced on every run; a missing pair is
//! appended at the end of the file.

use regex::Regex;

use crate::errors::GrindError;
use crate::taxonomy::{display_name, marker_key};

/// Solved/total counters for one track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackProgress {
    pub key: String,
    pub name: String,
    pub solved: usize,
    pub total: usize,
}

impl TrackProgress {
    pub fn new(key: &str, name: &str, solved: usize, total: usize) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            solved,
            total,
        }
    }

    /// Rounded completion percentage; an empty plan is 0%.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.solved as f64 / self.total as f64 * 100.0).round() as u32
    }

    /// `<name>: <solved>/<total> (<pct>%)`
    pub fn line(&self) -> String {
        format!(
            "{}: {}/{} ({}%)",
            display_name(&self.key, &self.name),
            self.solved,
            self.total,
            self.percent()
        )
    }

    pub fn start_marker(&self) -> String {
        format!("<!-- PROGRESS:{}:start -->", marker_key(&self.key))
    }

    pub fn end_marker(&self) -> String {
        format!("<!-- PROGRESS:{}:end -->", marker_key(&self.key))
    }

    fn marker_regex(&self) -> Result<Regex, GrindError> {
        let key = regex::escape(marker_key(&self.key));
        Ok(Regex::new(&format!(
            r"(?is)(<!-- PROGRESS:{key}:start -->)(.*?)(<!-- PROGRESS:{key}:end -->)"
        ))?)
    }
}

/// Replace or append the progress marker of every track in `readme`.
pub fn apply_progress(readme: &str, progress: &[TrackProgress]) -> Result<String, GrindError> {
    let mut text = readme.to_string();

    for track in progress {
        let pattern = track.marker_regex()?;
        let line = track.line();

        if pattern.is_match(&text) {
            text = pattern
                .replace_all(&text, |caps: &regex::Captures<'_>| {
                    format!("{}{}{}", &caps[1], line, &caps[3])
                })
                .into_owned();
        } else {
            text.push_str(&format!(
                "\n{}{}{}\n",
                track.start_marker(),
                line,
                track.end_marker()
            ));
        }
    }

    Ok(text)
}
