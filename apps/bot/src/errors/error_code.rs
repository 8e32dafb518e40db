//! Error codes for the Imposter bot.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! surfaced to the platform layer. Add new codes here; never pass ad-hoc
//! strings as error codes.

use core::fmt;

/// Centralized error codes for the Imposter bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lobby
    /// Game already started in this channel
    AlreadyStarted,
    /// Player is already in the lobby
    AlreadyJoined,
    /// Player is not in the lobby (or the game already started)
    NotInLobby,
    /// Caller is not the session host
    NotHost,
    /// No session exists for this channel
    NoActiveSession,
    /// A session already exists for this channel
    SessionExists,
    /// Roster is below the configured minimum
    NotEnoughPlayers,

    // Turns & clues
    /// Submitter is not the current turn holder
    NotYourTurn,
    /// Submitter already has an accepted clue this round
    AlreadySubmittedThisRound,
    /// Clue text equals the secret word
    ExactWordClue,
    /// Clue text is empty after trimming
    EmptyClue,
    /// Clue text exceeds the configured maximum length
    ClueTooLong,

    // Voting
    /// Voting window is not open
    VotingClosed,
    /// Voter is not a roster member
    NotAPlayer,
    /// Voter targeted themselves
    SelfVote,
    /// Vote target is not a roster member
    UnknownTarget,

    // System
    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Canonical SCREAMING_SNAKE_CASE string for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::AlreadyStarted => "ALREADY_STARTED",
            ErrorCode::AlreadyJoined => "ALREADY_JOINED",
            ErrorCode::NotInLobby => "NOT_IN_LOBBY",
            ErrorCode::NotHost => "NOT_HOST",
            ErrorCode::NoActiveSession => "NO_ACTIVE_SESSION",
            ErrorCode::SessionExists => "SESSION_EXISTS",
            ErrorCode::NotEnoughPlayers => "NOT_ENOUGH_PLAYERS",
            ErrorCode::NotYourTurn => "NOT_YOUR_TURN",
            ErrorCode::AlreadySubmittedThisRound => "ALREADY_SUBMITTED_THIS_ROUND",
            ErrorCode::ExactWordClue => "EXACT_WORD_CLUE",
            ErrorCode::EmptyClue => "EMPTY_CLUE",
            ErrorCode::ClueTooLong => "CLUE_TOO_LONG",
            ErrorCode::VotingClosed => "VOTING_CLOSED",
            ErrorCode::NotAPlayer => "NOT_A_PLAYER",
            ErrorCode::SelfVote => "SELF_VOTE",
            ErrorCode::UnknownTarget => "UNKNOWN_TARGET",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
