//! Placeholder padding for team pages.
//!
//! Some team pages want a fixed number of rows in the "recent results" and
//! "next fixtures" boxes even early in the season. [`backfill_snapshot`] fills
//! the gaps with synthesised matches against opponents not already listed.
//! Every synthesised match is tagged `MatchOrigin::Placeholder`, carries no
//! score and has a `TBD` venue, so a renderer can never mistake it for a real
//! fixture. The league table and position are never touched.

use super::models::{Match, MatchStatus, SnapshotMatch, Team, TeamSnapshot};
use crate::constants::{DEFAULT_SNAPSHOT_MATCHES, backfill};
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct BackfillOptions {
    /// Minimum length of each list after padding
    pub target_len: usize,
    /// Days between consecutive placeholders
    pub interval_days: i64,
    /// Reference time used when a list has no real matches to count from
    pub anchor: DateTime<Utc>,
}

impl BackfillOptions {
    pub fn new(anchor: DateTime<Utc>) -> Self {
        BackfillOptions {
            target_len: DEFAULT_SNAPSHOT_MATCHES,
            interval_days: backfill::INTERVAL_DAYS,
            anchor,
        }
    }

    pub fn with_target_len(mut self, target_len: usize) -> Self {
        self.target_len = target_len;
        self
    }

    pub fn with_interval_days(mut self, interval_days: i64) -> Self {
        self.interval_days = interval_days;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Backward,
    Forward,
}

/// Pads the snapshot's recent results and upcoming fixtures with placeholders.
///
/// Opponents are drawn from the team's league in ascending id order, skipping
/// the team itself and any opponent already in the list being padded. Padding
/// stops early when no opponents remain.
pub fn backfill_snapshot(
    mut snapshot: TeamSnapshot,
    teams: &[Team],
    options: &BackfillOptions,
) -> TeamSnapshot {
    let mut opponents: Vec<&Team> = teams
        .iter()
        .filter(|team| team.league == snapshot.team.league && team.id != snapshot.team.id)
        .collect();
    opponents.sort_by(|a, b| a.id.cmp(&b.id));
    opponents.dedup_by(|a, b| a.id == b.id);

    let Some(step) = TimeDelta::try_days(options.interval_days.max(1)) else {
        tracing::debug!(
            "Backfill interval of {} days is out of range, leaving '{}' unpadded",
            options.interval_days,
            snapshot.team.id
        );
        return snapshot;
    };

    let added_recent = pad_list(
        &mut snapshot.recent_results,
        &snapshot.team,
        &opponents,
        options,
        step,
        Direction::Backward,
    );
    let added_upcoming = pad_list(
        &mut snapshot.upcoming_fixtures,
        &snapshot.team,
        &opponents,
        options,
        step,
        Direction::Forward,
    );

    if added_recent + added_upcoming > 0 {
        tracing::debug!(
            "Backfilled '{}' with {} recent and {} upcoming placeholders",
            snapshot.team.id,
            added_recent,
            added_upcoming
        );
    }

    snapshot
}

fn pad_list(
    list: &mut Vec<SnapshotMatch>,
    team: &Team,
    opponents: &[&Team],
    options: &BackfillOptions,
    step: TimeDelta,
    direction: Direction,
) -> usize {
    if list.len() >= options.target_len {
        return 0;
    }

    let listed: HashSet<String> = list
        .iter()
        .filter_map(|entry| entry.fixture.opponent_of(&team.id))
        .map(str::to_string)
        .collect();

    let kickoffs = list.iter().map(|entry| entry.fixture.kickoff);
    let mut cursor = match direction {
        Direction::Backward => kickoffs.min(),
        Direction::Forward => kickoffs.max(),
    }
    .unwrap_or(options.anchor);

    let mut available = opponents
        .iter()
        .filter(|opponent| !listed.contains(opponent.id.as_str()));
    let mut added = 0;

    while list.len() < options.target_len {
        let Some(opponent) = available.next() else {
            break;
        };

        // Stop once the next kickoff would fall outside the representable range
        let next = match direction {
            Direction::Backward => cursor.checked_sub_signed(step),
            Direction::Forward => cursor.checked_add_signed(step),
        };
        let Some(next) = next else {
            break;
        };
        cursor = next;

        let (home, away) = if added % 2 == 0 {
            (team.id.clone(), opponent.id.clone())
        } else {
            (opponent.id.clone(), team.id.clone())
        };

        list.push(SnapshotMatch::placeholder(Match {
            league: team.league.clone(),
            kickoff: cursor,
            home,
            away,
            status: MatchStatus::Scheduled,
            home_goals: None,
            away_goals: None,
            venue: Some(backfill::PLACEHOLDER_VENUE.to_string()),
        }));
        added += 1;
    }

    added
}
