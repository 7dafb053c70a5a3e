use crate::football::{Match, MatchStatus, Team};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Test utilities for creating mock rosters and match lists
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Kickoff time that day offsets are counted from (Saturday 17 Aug 2024, 14:00 UTC)
    pub fn base_kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 17, 14, 0, 0)
            .single()
            .unwrap_or_default()
    }

    /// Kickoff time `day` days after the base kickoff
    pub fn kickoff(day: i64) -> DateTime<Utc> {
        Self::base_kickoff() + Duration::days(day)
    }

    /// Creates a first-team side
    pub fn team(id: &str, name: &str, league: &str) -> Team {
        Team::new(id, name, league)
    }

    /// Creates a combination (reserve) side
    pub fn combination_team(id: &str, name: &str, league: &str) -> Team {
        Team {
            combination: true,
            ..Team::new(id, name, league)
        }
    }

    /// Creates a completed result
    pub fn result(
        league: &str,
        home: &str,
        away: &str,
        home_goals: u32,
        away_goals: u32,
        day: i64,
    ) -> Match {
        Match {
            league: league.to_string(),
            kickoff: Self::kickoff(day),
            home: home.to_string(),
            away: away.to_string(),
            status: MatchStatus::FullTime,
            home_goals: Some(home_goals),
            away_goals: Some(away_goals),
            venue: None,
        }
    }

    /// Creates a scheduled fixture
    pub fn fixture(league: &str, home: &str, away: &str, day: i64) -> Match {
        Match {
            league: league.to_string(),
            kickoff: Self::kickoff(day),
            home: home.to_string(),
            away: away.to_string(),
            status: MatchStatus::Scheduled,
            home_goals: None,
            away_goals: None,
            venue: None,
        }
    }

    /// Creates a match in progress
    pub fn live(
        league: &str,
        home: &str,
        away: &str,
        home_goals: u32,
        away_goals: u32,
        day: i64,
    ) -> Match {
        Match {
            status: MatchStatus::Live,
            ..Self::result(league, home, away, home_goals, away_goals, day)
        }
    }

    /// A four-team premier league roster with a combination side in a second league
    pub fn premier_roster() -> Vec<Team> {
        vec![
            Self::team("corinthians", "Corinthians", "premier"),
            Self::team("peel", "Peel AFC", "premier"),
            Self::team("rushen", "Rushen United", "premier"),
            Self::team("st-marys", "St Marys", "premier"),
            Self::combination_team("peel-comb", "Peel AFC II", "combination-1"),
        ]
    }
}
