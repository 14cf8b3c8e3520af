//! Errors used throughout the Congo engine.
//!
//! `CongoError` is the single error type returned by position parsing, move
//! application, and the engine/command-loop collaborators. Search itself never
//! fails: it always produces a score, so nothing in this module describes a
//! search-internal failure.
//!
//! Usage guidelines:
//! - Parsing and input-related variants (`InvalidCoordinate`,
//!   `InvalidPosition`, `InvalidMove`) are expected at the text boundary and
//!   are suitable for presenting to end users.
//! - `EngineFailure` is raised by engine wrappers that were asked for a move
//!   in a position where they cannot produce one.

use std::fmt;

use thiserror::Error;

/// Unified result alias for fallible engine operations.
pub type CongoResult<T> = Result<T, CongoError>;

/// Why a move was rejected by move application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// Origin or destination index lies outside the 7x7 board.
    OffBoard,
    /// There is no piece on the origin square.
    EmptyOrigin,
    /// The origin piece belongs to the side that is not to move.
    WrongColor,
    /// The destination holds a piece of the mover's own color.
    OwnPieceCapture,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvalidMoveReason::OffBoard => "square is off the board",
            InvalidMoveReason::EmptyOrigin => "no piece to move",
            InvalidMoveReason::WrongColor => "can't move opponent's piece",
            InvalidMoveReason::OwnPieceCapture => "can't take your own piece",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Error)]
pub enum CongoError {
    /// A coordinate outside `a1..g7` (or not two characters long).
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// A move that violates the basic move-application rules.
    #[error("invalid move {notation}: {reason}")]
    InvalidMove {
        notation: String,
        reason: InvalidMoveReason,
    },

    /// Malformed position text.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// An engine could not produce a move.
    #[error("engine failure: {0}")]
    EngineFailure(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CongoError {
    /// Shorthand for building an `InvalidMove` error from any displayable move.
    pub fn invalid_move(notation: impl fmt::Display, reason: InvalidMoveReason) -> Self {
        CongoError::InvalidMove {
            notation: notation.to_string(),
            reason,
        }
    }
}
