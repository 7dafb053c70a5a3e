use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse league dataset: {0}")]
    DatasetParse(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    // Lookup errors surfaced to the presentation layer as "not found" pages
    #[error("No league selected. Use --league or set a default with --set-league")]
    LeagueNotSpecified,

    #[error("League not found: {league}")]
    LeagueNotFound { league: String },

    #[error("Team not found: team_id={team_id}, league={league}")]
    TeamNotFound { league: String, team_id: String },
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a league not found error
    pub fn league_not_found(league: impl Into<String>) -> Self {
        Self::LeagueNotFound {
            league: league.into(),
        }
    }

    /// Create a team not found error
    pub fn team_not_found(league: impl Into<String>, team_id: impl Into<String>) -> Self {
        Self::TeamNotFound {
            league: league.into(),
            team_id: team_id.into(),
        }
    }

    /// Returns true for lookups that the caller should present as a "not found" page
    /// rather than as a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::LeagueNotFound { .. } | AppError::TeamNotFound { .. }
        )
    }
}
