//! CLI command implementations.
//!
//! Each submodule owns one or more related `Commands` variants:
//!
//! | Module     | Commands handled                     |
//! |------------|--------------------------------------|
//! | `sync`     | `Sync`, `Index`, `Progress`          |
//! | `scaffold` | `New`, `AddTrack`, `CheckNames`      |
//! | `config`   | `Config`                             |

pub mod config;
pub mod scaffold;
pub mod sync;

pub use config::cmd_config;
pub use scaffold::{cmd_add_track, cmd_check_names, cmd_new};
pub use sync::{cmd_index, cmd_progress, cmd_sync};
