use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("roster error: {0}")]
    Roster(#[from] RosterError),

    #[error("IO error: {0}")]
    IO(#[from] IOError),
}

/// Reasons why a roster could not be split into two teams.
///
/// These are validation-style conditions meant to be shown to the user as
/// they are: the attempt produces no teams and nothing is retried.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    #[error("at least 4 playing players are required to build the teams")]
    InsufficientActivePlayers,
    #[error("at least 2 playing goalkeepers are required to build the teams")]
    InsufficientGoalkeepers,
    #[error("the teams are not balanced")]
    UnbalancedTeams,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("player not found: {0}")]
    PlayerNotFound(Uuid),
    #[error("invalid skill {0}: must be between 1 and 3")]
    InvalidSkill(u8),
    #[error("name cannot be empty")]
    EmptyName,
}

#[derive(Debug, Error)]
pub enum IOError {
    #[error("IO error: {0}")]
    Error(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
    #[error("{0}")]
    Msg(String),
}

impl From<std::io::Error> for IOError {
    fn from(e: std::io::Error) -> Self {
        IOError::Error(e.to_string())
    }
}

impl From<serde_json::Error> for IOError {
    fn from(e: serde_json::Error) -> Self {
        IOError::SerializationError(e.to_string())
    }
}
