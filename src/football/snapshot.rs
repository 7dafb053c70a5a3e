use super::backfill::{BackfillOptions, backfill_snapshot};
use super::models::{Match, SnapshotMatch, TableEntry, Team, TeamSnapshot};
use super::table::build_table;
use crate::constants::DEFAULT_SNAPSHOT_MATCHES;
use crate::error::AppError;
use std::cmp::Ordering;

/// Options for [`team_snapshot_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotOptions {
    /// How many recent results and upcoming fixtures to list
    pub match_count: usize,
    /// Pad short lists with tagged placeholder matches when set
    pub backfill: Option<BackfillOptions>,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        SnapshotOptions {
            match_count: DEFAULT_SNAPSHOT_MATCHES,
            backfill: None,
        }
    }
}

/// Builds the snapshot shown on a team page.
///
/// # Arguments
///
/// * `league` - League the team plays in
/// * `team_id` - Identifier of the team
/// * `teams` - All known teams
/// * `matches` - All known matches, in any order
/// * `match_count` - Maximum length of the recent and upcoming lists
///
/// # Returns
///
/// * `Ok(TeamSnapshot)` - Recent results newest first, upcoming fixtures soonest
///   first, table position and the full league table
/// * `Err(AppError::TeamNotFound)` - No team with `team_id` in `league`
pub fn team_snapshot(
    league: &str,
    team_id: &str,
    teams: &[Team],
    matches: &[Match],
    match_count: usize,
) -> Result<TeamSnapshot, AppError> {
    let team = teams
        .iter()
        .find(|team| team.league == league && team.id == team_id)
        .ok_or_else(|| AppError::team_not_found(league, team_id))?;

    let table = build_table(league, teams, matches);
    let position = table
        .iter()
        .find(|entry| entry.team_id == team_id)
        .map(|entry| entry.position)
        .ok_or_else(|| AppError::team_not_found(league, team_id))?;

    let recent_results = recent_results(league, team_id, matches, match_count);
    let upcoming_fixtures = upcoming_fixtures(league, team_id, matches, match_count);

    tracing::debug!(
        "Snapshot for '{}' in '{}': position {}, {} recent, {} upcoming",
        team_id,
        league,
        position,
        recent_results.len(),
        upcoming_fixtures.len()
    );

    Ok(TeamSnapshot {
        team: team.clone(),
        recent_results,
        upcoming_fixtures,
        position,
        table,
    })
}

/// Same as [`team_snapshot`], applying placeholder backfill when the options ask for it.
pub fn team_snapshot_with(
    league: &str,
    team_id: &str,
    teams: &[Team],
    matches: &[Match],
    options: &SnapshotOptions,
) -> Result<TeamSnapshot, AppError> {
    let snapshot = team_snapshot(league, team_id, teams, matches, options.match_count)?;

    Ok(match &options.backfill {
        Some(backfill) => backfill_snapshot(snapshot, teams, backfill),
        None => snapshot,
    })
}

/// Completed matches involving `team_id`, newest first.
pub fn recent_results(
    league: &str,
    team_id: &str,
    matches: &[Match],
    limit: usize,
) -> Vec<SnapshotMatch> {
    let mut results: Vec<&Match> = matches
        .iter()
        .filter(|game| game.league == league && game.involves(team_id) && game.is_completed())
        .collect();

    results.sort_by(|a, b| b.kickoff.cmp(&a.kickoff).then_with(|| same_time_order(a, b)));

    results
        .into_iter()
        .take(limit)
        .cloned()
        .map(SnapshotMatch::recorded)
        .collect()
}

/// Scheduled matches involving `team_id`, soonest first.
pub fn upcoming_fixtures(
    league: &str,
    team_id: &str,
    matches: &[Match],
    limit: usize,
) -> Vec<SnapshotMatch> {
    let mut fixtures: Vec<&Match> = matches
        .iter()
        .filter(|game| game.league == league && game.involves(team_id) && game.is_scheduled())
        .collect();

    fixtures.sort_by(|a, b| a.kickoff.cmp(&b.kickoff).then_with(|| same_time_order(a, b)));

    fixtures
        .into_iter()
        .take(limit)
        .cloned()
        .map(SnapshotMatch::recorded)
        .collect()
}

fn same_time_order(a: &Match, b: &Match) -> Ordering {
    a.home.cmp(&b.home).then_with(|| a.away.cmp(&b.away))
}

impl TeamSnapshot {
    /// Rows of the table within `radius` places of the team, clamped to the table.
    pub fn table_excerpt(&self, radius: usize) -> &[TableEntry] {
        if self.position == 0 || self.position > self.table.len() {
            return &[];
        }
        let index = self.position - 1;
        let start = index.saturating_sub(radius);
        let end = (index + radius + 1).min(self.table.len());
        &self.table[start..end]
    }

    /// The team's own table row.
    pub fn table_entry(&self) -> Option<&TableEntry> {
        self.table.iter().find(|entry| entry.team_id == self.team.id)
    }

    pub fn has_placeholders(&self) -> bool {
        self.recent_results
            .iter()
            .chain(self.upcoming_fixtures.iter())
            .any(SnapshotMatch::is_placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::football::MatchOrigin;
    use crate::testing_utils::TestDataBuilder;

    fn season() -> (Vec<Team>, Vec<Match>) {
        let teams = TestDataBuilder::premier_roster();
        let matches = vec![
            TestDataBuilder::result("premier", "peel", "rushen", 2, 1, 0),
            TestDataBuilder::result("premier", "corinthians", "peel", 0, 0, 7),
            TestDataBuilder::result("premier", "peel", "st-marys", 1, 3, 14),
            TestDataBuilder::result("premier", "rushen", "peel", 2, 2, 21),
            TestDataBuilder::live("premier", "peel", "corinthians", 1, 0, 28),
            TestDataBuilder::fixture("premier", "st-marys", "peel", 42),
            TestDataBuilder::fixture("premier", "peel", "rushen", 35),
            TestDataBuilder::fixture("premier", "corinthians", "peel", 56),
            TestDataBuilder::fixture("premier", "peel", "st-marys", 49),
            TestDataBuilder::fixture("premier", "rushen", "st-marys", 35),
        ];
        (teams, matches)
    }

    #[test]
    fn test_unknown_team_is_not_found() {
        let (teams, matches) = season();
        let error = team_snapshot("premier", "laxey", &teams, &matches, 3).unwrap_err();
        assert!(error.is_not_found());
    }

    #[test]
    fn test_team_in_other_league_is_not_found() {
        let (teams, matches) = season();
        let error = team_snapshot("premier", "peel-comb", &teams, &matches, 3).unwrap_err();
        assert!(matches!(error, AppError::TeamNotFound { .. }));
    }

    #[test]
    fn test_recent_results_newest_first_and_truncated() {
        let (teams, matches) = season();
        let snapshot = team_snapshot("premier", "peel", &teams, &matches, 3).unwrap();

        let days: Vec<_> = snapshot
            .recent_results
            .iter()
            .map(|m| m.fixture.kickoff)
            .collect();
        assert_eq!(
            days,
            vec![
                TestDataBuilder::kickoff(21),
                TestDataBuilder::kickoff(14),
                TestDataBuilder::kickoff(7),
            ]
        );
        assert!(
            snapshot
                .recent_results
                .iter()
                .all(|m| m.origin == MatchOrigin::Recorded)
        );
    }

    #[test]
    fn test_upcoming_fixtures_soonest_first_and_truncated() {
        let (teams, matches) = season();
        let snapshot = team_snapshot("premier", "peel", &teams, &matches, 3).unwrap();

        let opponents: Vec<_> = snapshot
            .upcoming_fixtures
            .iter()
            .filter_map(|m| m.fixture.opponent_of("peel"))
            .collect();
        assert_eq!(opponents, vec!["rushen", "st-marys", "st-marys"]);
    }

    #[test]
    fn test_live_match_is_neither_result_nor_fixture() {
        let (teams, matches) = season();
        let snapshot = team_snapshot("premier", "peel", &teams, &matches, 10).unwrap();

        assert_eq!(snapshot.recent_results.len(), 4);
        assert_eq!(snapshot.upcoming_fixtures.len(), 4);
        assert!(
            snapshot
                .recent_results
                .iter()
                .chain(snapshot.upcoming_fixtures.iter())
                .all(|m| m.fixture.kickoff != TestDataBuilder::kickoff(28))
        );
    }

    #[test]
    fn test_position_matches_table() {
        let (teams, matches) = season();
        let snapshot = team_snapshot("premier", "peel", &teams, &matches, 3).unwrap();

        let entry = snapshot.table_entry().unwrap();
        assert_eq!(entry.position, snapshot.position);
        assert_eq!(snapshot.table.len(), 4);
        // peel: W D L D = 5 pts, gf 5 ga 6; st-marys: W = 3 pts; rushen: L D = 1; corinthians: D = 1
        assert_eq!(snapshot.position, 1);
        assert_eq!(entry.points, 5);
    }

    #[test]
    fn test_team_without_matches_has_empty_lists() {
        let teams = TestDataBuilder::premier_roster();
        let snapshot = team_snapshot("premier", "rushen", &teams, &[], 3).unwrap();

        assert!(snapshot.recent_results.is_empty());
        assert!(snapshot.upcoming_fixtures.is_empty());
        // corinthians, peel, rushen, st-marys all on zero
        assert_eq!(snapshot.position, 3);
        assert!(!snapshot.has_placeholders());
    }

    #[test]
    fn test_table_excerpt_is_clamped() {
        let teams = TestDataBuilder::premier_roster();
        let top = team_snapshot("premier", "corinthians", &teams, &[], 3).unwrap();
        let ids: Vec<&str> = top.table_excerpt(1).iter().map(|e| e.team_id.as_str()).collect();
        assert_eq!(ids, vec!["corinthians", "peel"]);

        let third = team_snapshot("premier", "rushen", &teams, &[], 3).unwrap();
        let ids: Vec<&str> = third
            .table_excerpt(1)
            .iter()
            .map(|e| e.team_id.as_str())
            .collect();
        assert_eq!(ids, vec!["peel", "rushen", "st-marys"]);

        assert_eq!(third.table_excerpt(10).len(), 4);
        assert_eq!(third.table_excerpt(0).len(), 1);
    }

    #[test]
    fn test_snapshot_with_default_options_has_no_placeholders() {
        let teams = TestDataBuilder::premier_roster();
        let snapshot =
            team_snapshot_with("premier", "peel", &teams, &[], &SnapshotOptions::default())
                .unwrap();
        assert!(snapshot.recent_results.is_empty());
        assert!(!snapshot.has_placeholders());
    }

    #[test]
    fn test_snapshot_with_backfill_pads_both_lists() {
        let teams = TestDataBuilder::premier_roster();
        let options = SnapshotOptions {
            match_count: 3,
            backfill: Some(BackfillOptions::new(TestDataBuilder::base_kickoff())),
        };
        let snapshot = team_snapshot_with("premier", "peel", &teams, &[], &options).unwrap();

        assert_eq!(snapshot.recent_results.len(), 3);
        assert_eq!(snapshot.upcoming_fixtures.len(), 3);
        assert!(snapshot.has_placeholders());
    }
}
