use super::models::{Match, TableEntry, Team};
use crate::constants::{POINTS_FOR_DRAW, POINTS_FOR_WIN};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Builds the league table for `league` from the full team roster and match list.
///
/// Teams and matches belonging to other leagues are ignored, as are matches
/// without a final score. The result does not depend on the order of `matches`.
///
/// # Arguments
///
/// * `league` - League identifier to build the table for
/// * `teams` - All known teams; filtered to the league internally
/// * `matches` - All known matches; filtered to completed matches of the league
///
/// # Returns
///
/// Table entries sorted by points, goal difference and goals scored (all
/// descending), ties broken by ascending team identifier. Positions run from 1.
///
/// # Notes
///
/// - A match naming a team that is not on the roster is skipped
/// - A team with no results appears with all-zero statistics
///
/// # Examples
///
/// ```rust
/// use manxhive_football::football::{Team, build_table};
///
/// let teams = vec![
///     Team::new("peel", "Peel AFC", "premier"),
///     Team::new("rushen", "Rushen United", "premier"),
/// ];
/// let table = build_table("premier", &teams, &[]);
/// assert_eq!(table[0].team_id, "peel");
/// assert_eq!(table[1].position, 2);
/// ```
pub fn build_table(league: &str, teams: &[Team], matches: &[Match]) -> Vec<TableEntry> {
    let mut entries: HashMap<&str, TableEntry> = HashMap::new();

    for team in teams.iter().filter(|team| team.league == league) {
        if entries.contains_key(team.id.as_str()) {
            tracing::warn!(
                "Duplicate team id '{}' in league '{}', keeping first definition",
                team.id,
                league
            );
            continue;
        }
        entries.insert(team.id.as_str(), TableEntry::new(team));
    }

    let mut counted = 0usize;
    let mut skipped = 0usize;

    for game in matches.iter().filter(|game| game.league == league) {
        let Some((home_goals, away_goals)) = game.final_score() else {
            continue;
        };

        if game.home == game.away
            || !entries.contains_key(game.home.as_str())
            || !entries.contains_key(game.away.as_str())
        {
            tracing::debug!(
                "Skipping result {} {}-{} {} in league '{}': unknown team reference",
                game.home,
                home_goals,
                away_goals,
                game.away,
                league
            );
            skipped += 1;
            continue;
        }

        if let Some(home) = entries.get_mut(game.home.as_str()) {
            record_result(home, home_goals, away_goals);
        }
        if let Some(away) = entries.get_mut(game.away.as_str()) {
            record_result(away, away_goals, home_goals);
        }
        counted += 1;
    }

    let mut table: Vec<TableEntry> = entries
        .into_values()
        .map(|mut entry| {
            entry.goal_difference = i64::from(entry.goals_for) - i64::from(entry.goals_against);
            entry
        })
        .collect();

    table.sort_by(compare_entries);

    for (index, entry) in table.iter_mut().enumerate() {
        entry.position = index + 1;
    }

    tracing::debug!(
        "Built table for '{}': {} teams, {} results counted, {} skipped",
        league,
        table.len(),
        counted,
        skipped
    );

    table
}

// Totals saturate so absurd scores in a dataset cannot overflow
fn record_result(entry: &mut TableEntry, scored: u32, conceded: u32) {
    entry.played = entry.played.saturating_add(1);
    entry.goals_for = entry.goals_for.saturating_add(scored);
    entry.goals_against = entry.goals_against.saturating_add(conceded);

    match scored.cmp(&conceded) {
        Ordering::Greater => {
            entry.won = entry.won.saturating_add(1);
            entry.points = entry.points.saturating_add(POINTS_FOR_WIN);
        }
        Ordering::Equal => {
            entry.drawn = entry.drawn.saturating_add(1);
            entry.points = entry.points.saturating_add(POINTS_FOR_DRAW);
        }
        Ordering::Less => entry.lost = entry.lost.saturating_add(1),
    }
}

/// Standings order: points, goal difference, goals for (descending), then team id.
fn compare_entries(a: &TableEntry, b: &TableEntry) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team_id.cmp(&b.team_id))
}
