//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers so the calculator, the renderer and
//! the configuration layer agree on the same defaults.

/// Points awarded for a win
pub const POINTS_FOR_WIN: u32 = 3;

/// Points awarded to each side for a draw
pub const POINTS_FOR_DRAW: u32 = 1;

/// Default number of recent results and upcoming fixtures shown for a team
pub const DEFAULT_SNAPSHOT_MATCHES: usize = 3;

/// Largest accepted value for the snapshot match count
pub const MAX_SNAPSHOT_MATCHES: usize = 10;

/// Log file name used when no custom path is configured
pub const LOG_FILE_NAME: &str = "manxhive_football.log";

/// Directory name under the platform config directory
pub const APP_DIR_NAME: &str = "manxhive_football";

/// Placeholder backfill defaults
pub mod backfill {
    /// Days between synthesised placeholder matches
    pub const INTERVAL_DAYS: i64 = 7;

    /// Largest accepted gap between placeholder matches
    pub const MAX_INTERVAL_DAYS: i64 = 365;

    /// Venue shown for placeholder matches
    pub const PLACEHOLDER_VENUE: &str = "TBD";
}

/// Teletext page layout
pub mod ui {
    /// Page number shown in the header
    pub const PAGE_NUMBER: u16 = 301;

    /// Page title shown in the header block
    pub const TITLE: &str = "FOOTBALL";

    /// Width of the team name column in table rows
    pub const TEAM_COLUMN_WIDTH: usize = 22;

    /// Rows shown on either side of the team in a table excerpt
    pub const EXCERPT_RADIUS: usize = 2;

    /// Rendering width used for the header line
    pub const PAGE_WIDTH: usize = 60;
}
