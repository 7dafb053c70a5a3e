use super::models::{Match, TableEntry, Team, TeamSnapshot};
use super::snapshot::{SnapshotOptions, team_snapshot_with};
use super::table::build_table;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Teams and matches as supplied by the data layer, usually a JSON export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueDataset {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub matches: Vec<Match>,
}

impl LeagueDataset {
    pub fn new(teams: Vec<Team>, matches: Vec<Match>) -> Self {
        LeagueDataset { teams, matches }
    }

    /// Parses a dataset from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, AppError> {
        let dataset: LeagueDataset = serde_json::from_str(content)?;
        Ok(dataset)
    }

    /// Loads a dataset from a JSON file.
    ///
    /// # Returns
    /// * `Ok(LeagueDataset)` - Successfully loaded dataset
    /// * `Err(AppError::Io)` - The file could not be read
    /// * `Err(AppError::DatasetParse)` - The file is not a valid dataset
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let dataset = Self::from_json_str(&content)?;

        tracing::info!(
            "Loaded dataset from {}: {} teams, {} matches, {} leagues",
            path,
            dataset.teams.len(),
            dataset.matches.len(),
            dataset.leagues().len()
        );

        Ok(dataset)
    }

    /// League identifiers that have at least one team, sorted.
    pub fn leagues(&self) -> Vec<&str> {
        let mut leagues: Vec<&str> = self.teams.iter().map(|team| team.league.as_str()).collect();
        leagues.sort_unstable();
        leagues.dedup();
        leagues
    }

    pub fn has_league(&self, league: &str) -> bool {
        self.teams.iter().any(|team| team.league == league)
    }

    /// Builds the table for a league present in the dataset.
    pub fn build_table(&self, league: &str) -> Result<Vec<TableEntry>, AppError> {
        self.ensure_league(league)?;
        Ok(build_table(league, &self.teams, &self.matches))
    }

    /// Builds a team snapshot for a league present in the dataset.
    pub fn team_snapshot(
        &self,
        league: &str,
        team_id: &str,
        options: &SnapshotOptions,
    ) -> Result<TeamSnapshot, AppError> {
        self.ensure_league(league)?;
        team_snapshot_with(league, team_id, &self.teams, &self.matches, options)
    }

    fn ensure_league(&self, league: &str) -> Result<(), AppError> {
        if self.has_league(league) {
            Ok(())
        } else {
            Err(AppError::league_not_found(league))
        }
    }
}
