// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::media_grid;
use crate::ui::navbar;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Grid(media_grid::Message),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional initial display name; a persisted name takes priority.
    pub user: Option<String>,
    /// Optional directory to scan for media on startup.
    pub directory: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `PICTOPY_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PICTOPY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
