// src/football/mod.rs - League table and team snapshot calculations

pub mod backfill;
pub mod dataset;
pub mod models;
pub mod snapshot;
pub mod table;

pub use backfill::{BackfillOptions, backfill_snapshot};
pub use dataset::LeagueDataset;
pub use models::{
    Match, MatchOrigin, MatchStatus, Outcome, SnapshotMatch, TableEntry, Team, TeamSnapshot,
};
pub use snapshot::{
    SnapshotOptions, recent_results, team_snapshot, team_snapshot_with, upcoming_fixtures,
};
pub use table::build_table;
