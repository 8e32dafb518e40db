//! Game-level error type used across session state and services.
//!
//! Every variant is an expected, locally recoverable rejection surfaced to
//! the acting user. A rejection never mutates session state; the attempted
//! operation is simply not applied. Platform handlers should return
//! `Result<T, crate::error::AppError>` and convert with the provided
//! `From<GameError> for AppError` implementation.

use thiserror::Error;

use crate::errors::error_code::ErrorCode;

/// Central game rejection type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game already started")]
    AlreadyStarted,
    #[error("player already joined")]
    AlreadyJoined,
    #[error("player not in lobby")]
    NotInLobby,
    #[error("caller is not the host")]
    NotHost,
    #[error("no active session in this channel")]
    NoActiveSession,
    #[error("a session already exists in this channel")]
    SessionExists,
    #[error("not enough players (need at least {needed})")]
    NotEnoughPlayers { needed: usize },
    #[error("not this player's turn")]
    NotYourTurn,
    #[error("player already submitted a clue this round")]
    AlreadySubmittedThisRound,
    #[error("clue equals the secret word")]
    ExactWordClue,
    #[error("clue is empty")]
    EmptyClue,
    #[error("clue exceeds {max} characters")]
    ClueTooLong { max: usize },
    #[error("voting is closed")]
    VotingClosed,
    #[error("voter is not a player in this game")]
    NotAPlayer,
    #[error("players cannot vote for themselves")]
    SelfVote,
    #[error("vote target is not a player in this game")]
    UnknownTarget,
}

impl GameError {
    /// Canonical code for this rejection.
    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::AlreadyStarted => ErrorCode::AlreadyStarted,
            GameError::AlreadyJoined => ErrorCode::AlreadyJoined,
            GameError::NotInLobby => ErrorCode::NotInLobby,
            GameError::NotHost => ErrorCode::NotHost,
            GameError::NoActiveSession => ErrorCode::NoActiveSession,
            GameError::SessionExists => ErrorCode::SessionExists,
            GameError::NotEnoughPlayers { .. } => ErrorCode::NotEnoughPlayers,
            GameError::NotYourTurn => ErrorCode::NotYourTurn,
            GameError::AlreadySubmittedThisRound => ErrorCode::AlreadySubmittedThisRound,
            GameError::ExactWordClue => ErrorCode::ExactWordClue,
            GameError::EmptyClue => ErrorCode::EmptyClue,
            GameError::ClueTooLong { .. } => ErrorCode::ClueTooLong,
            GameError::VotingClosed => ErrorCode::VotingClosed,
            GameError::NotAPlayer => ErrorCode::NotAPlayer,
            GameError::SelfVote => ErrorCode::SelfVote,
            GameError::UnknownTarget => ErrorCode::UnknownTarget,
        }
    }

    /// Short rejection message shown privately to the acting user.
    pub fn user_message(&self) -> String {
        match self {
            GameError::AlreadyStarted => "Game already started.".into(),
            GameError::AlreadyJoined => "You're already in the lobby.".into(),
            GameError::NotInLobby => {
                "You're not in this lobby (or the game already started).".into()
            }
            GameError::NotHost => "Only the host can do that.".into(),
            GameError::NoActiveSession => {
                "No game here. Use the start command to create a lobby.".into()
            }
            GameError::SessionExists => "A lobby already exists in this channel.".into(),
            GameError::NotEnoughPlayers { needed } => {
                format!("Not enough players. Need at least {needed}.")
            }
            GameError::NotYourTurn => "Not your turn.".into(),
            GameError::AlreadySubmittedThisRound => "You already submitted this round.".into(),
            GameError::ExactWordClue => "Don't type the exact secret word.".into(),
            GameError::EmptyClue => "Clue can't be empty.".into(),
            GameError::ClueTooLong { max } => format!("Clue is too long (max {max} characters)."),
            GameError::VotingClosed => "Voting is closed.".into(),
            GameError::NotAPlayer => "Only players can do that.".into(),
            GameError::SelfVote => "You can't vote for yourself.".into(),
            GameError::UnknownTarget => "That player isn't in this game.".into(),
        }
    }
}
