//! Error types for plateau and rover operations.

use crate::rover::RoverState;
use glam::IVec2;
use thiserror::Error;

/// Errors raised by the plateau, rovers and the mission parser.
///
/// Spatial errors raised by the [`Plateau`](crate::Plateau) pass through rover
/// operations unchanged, so callers can always match on the kind the plateau reported.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoverError {
    /// Plateau bounds are negative or not integers.
    #[error("invalid plateau dimension: {0}")]
    InvalidDimension(String),

    /// Heading is not one of `N`, `E`, `S`, `W`.
    #[error("invalid heading {0:?}, expected one of 'N', 'E', 'S', 'W'")]
    InvalidHeading(String),

    /// Command string contains a character with no registered operation.
    #[error("invalid command {command:?} at index {index}, expected one of 'L', 'R', 'M'")]
    InvalidCommand {
        /// The offending character.
        command: char,
        /// Character index within the command string.
        index: usize,
    },

    /// Target position lies outside the plateau.
    #[error("position ({}, {}) is outside the plateau", .position.x, .position.y)]
    OutOfBounds {
        /// The rejected position.
        position: IVec2,
    },

    /// Target position is held by another rover.
    #[error("position ({}, {}) is occupied by another rover", .position.x, .position.y)]
    PositionOccupied {
        /// The rejected position.
        position: IVec2,
    },

    /// A move started from a cell this plateau never registered, e.g. a rover
    /// driven on a plateau other than the one it spawned on.
    #[error("position ({}, {}) is not registered on this plateau", .position.x, .position.y)]
    NotRegistered {
        /// The unknown starting position.
        position: IVec2,
    },

    /// A mission plan line could not be parsed.
    #[error("malformed input on line {line}: {reason}")]
    MalformedInput {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
}

impl RoverError {
    /// Creates an invalid dimension error.
    #[must_use]
    pub fn invalid_dimension(reason: impl Into<String>) -> Self {
        Self::InvalidDimension(reason.into())
    }

    /// Creates a malformed input error.
    #[must_use]
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

/// A command string that stopped before its end.
///
/// Carries the rover's state at the point of failure and the index of the
/// command that failed. Commands before `step` keep their effects.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("rover halted at command {step} in state {state}: {error}")]
pub struct NavigationError {
    /// Index of the failing command (or offending character).
    pub step: usize,
    /// Rover state after the last successful command.
    pub state: RoverState,
    /// The underlying error, kind preserved.
    #[source]
    pub error: RoverError,
}

impl NavigationError {
    /// The underlying error, as raised by the plateau or the command parser.
    #[must_use]
    pub const fn kind(&self) -> &RoverError {
        &self.error
    }
}
