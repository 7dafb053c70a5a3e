use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A team on a league roster. Combination sides (reserve teams) are separate
/// entities with their own identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub league: String,
    #[serde(default)]
    pub combination: bool,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, league: impl Into<String>) -> Self {
        Team {
            id: id.into(),
            name: name.into(),
            league: league.into(),
            combination: false,
        }
    }

    pub fn is_combination(&self) -> bool {
        self.combination
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    #[serde(rename = "SCHEDULED")]
    Scheduled,
    // Present in feeds but never counted as a result or a fixture
    #[serde(rename = "LIVE")]
    Live,
    #[serde(rename = "FT")]
    FullTime,
}

/// Result of a completed match from one team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn from_goals(scored: u32, conceded: u32) -> Self {
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Outcome::Win => 'W',
            Outcome::Draw => 'D',
            Outcome::Loss => 'L',
        }
    }
}

/// A fixture or result between two teams of the same league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub league: String,
    pub kickoff: DateTime<Utc>,
    pub home: String,
    pub away: String,
    pub status: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_goals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_goals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

impl Match {
    /// Final score as (home, away). Only full-time matches with both goal
    /// counts recorded count as results.
    pub fn final_score(&self) -> Option<(u32, u32)> {
        match (self.status, self.home_goals, self.away_goals) {
            (MatchStatus::FullTime, Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.final_score().is_some()
    }

    pub fn is_scheduled(&self) -> bool {
        self.status == MatchStatus::Scheduled
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.home == team_id || self.away == team_id
    }

    pub fn is_home(&self, team_id: &str) -> bool {
        self.home == team_id
    }

    pub fn opponent_of(&self, team_id: &str) -> Option<&str> {
        if self.home == team_id {
            Some(&self.away)
        } else if self.away == team_id {
            Some(&self.home)
        } else {
            None
        }
    }

    /// Win/draw/loss for `team_id`, if the match is a completed result involving it.
    pub fn outcome_for(&self, team_id: &str) -> Option<Outcome> {
        let (home_goals, away_goals) = self.final_score()?;
        if self.home == team_id {
            Some(Outcome::from_goals(home_goals, away_goals))
        } else if self.away == team_id {
            Some(Outcome::from_goals(away_goals, home_goals))
        } else {
            None
        }
    }
}

/// One row of a league table. Derived on every calculation, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub team_id: String,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
    pub position: usize,
}

impl TableEntry {
    pub fn new(team: &Team) -> Self {
        TableEntry {
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            position: 0,
        }
    }
}

/// Where a listed match came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOrigin {
    Recorded,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotMatch {
    #[serde(flatten)]
    pub fixture: Match,
    pub origin: MatchOrigin,
}

impl SnapshotMatch {
    pub fn recorded(fixture: Match) -> Self {
        SnapshotMatch {
            fixture,
            origin: MatchOrigin::Recorded,
        }
    }

    pub fn placeholder(fixture: Match) -> Self {
        SnapshotMatch {
            fixture,
            origin: MatchOrigin::Placeholder,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.origin == MatchOrigin::Placeholder
    }
}

/// Everything a team page needs: recent form, next fixtures and where the
/// team sits in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSnapshot {
    pub team: Team,
    pub recent_results: Vec<SnapshotMatch>,
    pub upcoming_fixtures: Vec<SnapshotMatch>,
    pub position: usize,
    pub table: Vec<TableEntry>,
}
