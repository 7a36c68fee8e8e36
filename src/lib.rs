pub mod checklist;
pub mod config;
pub mod errors;
pub mod grind_config;
pub mod header;
pub mod index;
pub mod kind;
pub mod plan;
pub mod progress;
pub mod registry;
pub mod scaffold;
pub mod scanner;
pub mod sync;
pub mod taxonomy;
pub mod ui;
pub mod util;
