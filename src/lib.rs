//! ManxHive football standings library
//!
//! This library builds league tables and team snapshots (recent results,
//! upcoming fixtures and table position) for Isle of Man football leagues, and
//! renders them as teletext-style terminal pages.
//!
//! All calculations are pure functions over teams and matches supplied by the
//! caller; loading data is left to [`football::LeagueDataset`] or any other data
//! layer.
//!
//! # Examples
//!
//! ```rust
//! use manxhive_football::football::{Match, MatchStatus, Team, build_table};
//! use manxhive_football::teletext_ui::create_table_page;
//! use chrono::{TimeZone, Utc};
//!
//! let teams = vec![
//!     Team::new("peel", "Peel AFC", "premier"),
//!     Team::new("rushen", "Rushen United", "premier"),
//! ];
//! let results = vec![Match {
//!     league: "premier".to_string(),
//!     kickoff: Utc.with_ymd_and_hms(2024, 9, 14, 14, 0, 0).unwrap(),
//!     home: "peel".to_string(),
//!     away: "rushen".to_string(),
//!     status: MatchStatus::FullTime,
//!     home_goals: Some(2),
//!     away_goals: Some(1),
//!     venue: None,
//! }];
//!
//! let table = build_table("premier", &teams, &results);
//! assert_eq!(table[0].team_id, "peel");
//! assert_eq!(table[0].points, 3);
//!
//! let page = create_table_page("premier", &table, true);
//! page.render_buffered(&mut std::io::stdout()).unwrap();
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod football;
pub mod teletext_ui;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use football::{
    BackfillOptions, LeagueDataset, Match, MatchOrigin, MatchStatus, SnapshotOptions, TableEntry,
    Team, TeamSnapshot, backfill_snapshot, build_table, team_snapshot, team_snapshot_with,
};
pub use teletext_ui::TeletextPage;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
