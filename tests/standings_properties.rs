//! Property tests for league table calculation
//!
//! Random rosters and match lists, checked against the rules every table must
//! satisfy regardless of input order or content.

use manxhive_football::football::{Match, MatchStatus, TableEntry, Team, build_table};
use manxhive_football::testing_utils::TestDataBuilder;
use proptest::prelude::*;

const LEAGUE: &str = "premier";

/// (home index, away index, home goals, away goals, status, in another league)
type RawMatch = (usize, usize, u32, u32, u8, bool);

fn roster(size: usize) -> Vec<Team> {
    (0..size)
        .map(|i| TestDataBuilder::team(&format!("team-{i:02}"), &format!("Team {i}"), LEAGUE))
        .collect()
}

fn matches_for(teams: &[Team], raw: &[RawMatch]) -> Vec<Match> {
    if teams.is_empty() {
        return Vec::new();
    }

    raw.iter()
        .enumerate()
        .map(|(day, &(home, away, home_goals, away_goals, status, elsewhere))| {
            let home = &teams[home % teams.len()].id;
            let away = &teams[away % teams.len()].id;
            let league = if elsewhere { "division-2" } else { LEAGUE };
            let completed = TestDataBuilder::result(league, home, away, home_goals, away_goals, day as i64);
            match status % 4 {
                0 => TestDataBuilder::fixture(league, home, away, day as i64),
                1 => Match {
                    status: MatchStatus::Live,
                    ..completed
                },
                _ => completed,
            }
        })
        .collect()
}

fn counted_matches(matches: &[Match]) -> usize {
    matches
        .iter()
        .filter(|m| m.league == LEAGUE && m.home != m.away && m.final_score().is_some())
        .count()
}

fn ranks_before(a: &TableEntry, b: &TableEntry) -> bool {
    a.points > b.points
        || (a.points == b.points && a.goal_difference > b.goal_difference)
        || (a.points == b.points
            && a.goal_difference == b.goal_difference
            && a.goals_for > b.goals_for)
        || (a.points == b.points
            && a.goal_difference == b.goal_difference
            && a.goals_for == b.goals_for
            && a.team_id < b.team_id)
}

fn raw_matches() -> impl Strategy<Value = Vec<RawMatch>> {
    prop::collection::vec(
        (0usize..8, 0usize..8, 0u32..7, 0u32..7, 0u8..4, prop::bool::weighted(0.1)),
        0..40,
    )
}

proptest! {
    #[test]
    fn prop_points_and_goal_difference(size in 0usize..8, raw in raw_matches()) {
        let teams = roster(size);
        let table = build_table(LEAGUE, &teams, &matches_for(&teams, &raw));

        for entry in &table {
            prop_assert_eq!(entry.points, 3 * entry.won + entry.drawn);
            prop_assert_eq!(
                entry.goal_difference,
                i64::from(entry.goals_for) - i64::from(entry.goals_against)
            );
            prop_assert_eq!(entry.played, entry.won + entry.drawn + entry.lost);
        }
    }

    #[test]
    fn prop_every_counted_match_is_played_twice(size in 0usize..8, raw in raw_matches()) {
        let teams = roster(size);
        let matches = matches_for(&teams, &raw);
        let table = build_table(LEAGUE, &teams, &matches);

        let played: u32 = table.iter().map(|entry| entry.played).sum();
        prop_assert_eq!(played as usize, 2 * counted_matches(&matches));

        let scored: u32 = table.iter().map(|entry| entry.goals_for).sum();
        let conceded: u32 = table.iter().map(|entry| entry.goals_against).sum();
        prop_assert_eq!(scored, conceded);
    }

    #[test]
    fn prop_table_is_strictly_ordered(size in 0usize..8, raw in raw_matches()) {
        let teams = roster(size);
        let table = build_table(LEAGUE, &teams, &matches_for(&teams, &raw));

        for pair in table.windows(2) {
            prop_assert!(ranks_before(&pair[0], &pair[1]), "{:?} before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn prop_positions_are_contiguous(size in 0usize..8, raw in raw_matches()) {
        let teams = roster(size);
        let table = build_table(LEAGUE, &teams, &matches_for(&teams, &raw));

        prop_assert_eq!(table.len(), size);
        let positions: Vec<usize> = table.iter().map(|entry| entry.position).collect();
        prop_assert_eq!(positions, (1..=size).collect::<Vec<_>>());
    }

    #[test]
    fn prop_input_order_does_not_matter(
        size in 0usize..8,
        raw in raw_matches(),
        rotation in 0usize..40,
    ) {
        let teams = roster(size);
        let matches = matches_for(&teams, &raw);
        let table = build_table(LEAGUE, &teams, &matches);

        let mut reordered = matches.clone();
        reordered.reverse();
        if !reordered.is_empty() {
            let shift = rotation % reordered.len();
            reordered.rotate_left(shift);
        }
        let mut reversed_teams = teams.clone();
        reversed_teams.reverse();

        prop_assert_eq!(&table, &build_table(LEAGUE, &reversed_teams, &reordered));
        prop_assert_eq!(&table, &build_table(LEAGUE, &teams, &matches));
    }
}

#[test]
fn test_no_results_orders_by_identifier() {
    let mut teams = roster(5);
    teams.reverse();
    let table = build_table(LEAGUE, &teams, &[]);

    let ids: Vec<&str> = table.iter().map(|entry| entry.team_id.as_str()).collect();
    assert_eq!(ids, ["team-00", "team-01", "team-02", "team-03", "team-04"]);
    assert!(table.iter().all(|entry| entry.played == 0 && entry.points == 0));
}

#[test]
fn test_empty_input_gives_empty_table() {
    assert!(build_table(LEAGUE, &[], &[]).is_empty());
}
