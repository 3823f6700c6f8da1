//! Errors raised by the scorer.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Player name {player} does not exist")]
    UnknownPlayer { player: String },

    #[error("Match already finished, won by {winner}")]
    MatchFinished { winner: String },

    #[error("Invalid players: {reason}")]
    InvalidPlayers { reason: String },

    #[error("Invalid scoring rules: {reason}")]
    InvalidRules { reason: String },
}
