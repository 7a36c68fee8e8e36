//! Solution file kinds.
//!
//! A track can hold Python solutions, SQL solutions, or both. The kind
//! decides the file extension, the registry directory key, the base
//! directory new tracks are created under, and the comment style of the
//! header block.

use serde::{Deserialize, Serialize};

use crate::header::CommentStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolutionKind {
    Py,
    Sql,
}

impl SolutionKind {
    pub const ALL: [SolutionKind; 2] = [SolutionKind::Py, SolutionKind::Sql];

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            SolutionKind::Py => "py",
            SolutionKind::Sql => "sql",
        }
    }

    pub fn comment_style(self) -> CommentStyle {
        match self {
            SolutionKind::Py => CommentStyle::DocString,
            SolutionKind::Sql => CommentStyle::LineComment,
        }
    }

    /// Category used in the index when neither the plan nor the tags name one.
    pub fn default_category(self) -> &'static str {
        match self {
            SolutionKind::Py => crate::taxonomy::UNCATEGORIZED,
            SolutionKind::Sql => "SQL",
        }
    }
}

impl std::fmt::Display for SolutionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for SolutionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "py" | "python" => Ok(SolutionKind::Py),
            "sql" => Ok(SolutionKind::Sql),
            _ => anyhow::bail!("Invalid solution type '{}'. Valid values: py, sql", s),
        }
    }
}
