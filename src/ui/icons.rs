//! Shared UI icons for command summaries.
//!
//! `console::Emoji` falls back to the plain string on terminals that cannot
//! render emoji.

use console::Emoji;

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK]");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR]");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[WARN]");

// File indicators
pub static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");
pub static FILE_NEW: Emoji<'_, '_> = Emoji("📄 ", "+");

// Progress
pub static PROGRESS: Emoji<'_, '_> = Emoji("📊 ", "[PROG]");
