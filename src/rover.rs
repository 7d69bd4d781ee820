//! Rover state and the two primitive operations: rotate and move forward.

use crate::error::{NavigationError, RoverError};
use crate::interpreter::NavigationInterpreter;
use crate::plateau::Plateau;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A rover identifier, assigned by the caller.
pub type RoverId = u32;

/// One of the four cardinal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order, starting at North.
    pub const ALL: [Heading; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The heading a quarter turn clockwise.
    pub const fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The heading a quarter turn counter-clockwise.
    pub const fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// The one-cell step taken when moving forward on this heading.
    pub const fn unit_vector(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = RoverError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Self::North),
            'E' => Ok(Self::East),
            'S' => Ok(Self::South),
            'W' => Ok(Self::West),
            _ => Err(RoverError::InvalidHeading(c.to_string())),
        }
    }
}

impl FromStr for Heading {
    type Err = RoverError;

    /// Parses `N`, `E`, `S` or `W` in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(RoverError::InvalidHeading(s.to_string())),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Direction of a quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    Left,
    Right,
}

/// Operations a rover can be commanded to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoverOp {
    /// Quarter turn in place (`L` / `R`).
    Rotate(Rotation),
    /// One cell forward along the current heading (`M`).
    Move,
}

/// Snapshot of a rover's observable state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverState {
    pub position: IVec2,
    pub heading: Heading,
}

impl fmt::Display for RoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)
    }
}

/// A rover deployed on a [`Plateau`].
///
/// The rover does not hold on to its plateau. Every operation that can
/// change occupancy borrows it mutably, so a position check and the write
/// that follows it cannot be interleaved with another rover's.
///
/// Each rover stands for exactly one registered cell, so it cannot be cloned:
///
/// ```compile_fail
/// use glam::IVec2;
/// use plateau_rover::{Heading, Plateau, Rover};
///
/// let mut plateau = Plateau::new(1, 1).unwrap();
/// let rover = Rover::spawn(IVec2::ZERO, Heading::North, &mut plateau, None).unwrap();
/// let twin = rover.clone();
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Rover {
    state: RoverState,
    id: Option<RoverId>,
}

impl Rover {
    /// Places a new rover on `plateau`.
    ///
    /// Fails with [`RoverError::OutOfBounds`] or [`RoverError::PositionOccupied`]
    /// before anything is registered, in which case no rover exists.
    pub fn spawn(
        position: IVec2,
        heading: Heading,
        plateau: &mut Plateau,
        id: Option<RoverId>,
    ) -> Result<Self, RoverError> {
        plateau.register(position)?;
        debug!(?id, x = position.x, y = position.y, %heading, "Rover spawned");
        Ok(Self {
            state: RoverState { position, heading },
            id,
        })
    }

    pub fn position(&self) -> IVec2 {
        self.state.position
    }

    pub fn heading(&self) -> Heading {
        self.state.heading
    }

    pub fn id(&self) -> Option<RoverId> {
        self.id
    }

    pub fn state(&self) -> RoverState {
        self.state
    }

    /// Turns a quarter in place. Position and plateau are untouched.
    pub fn rotate(&mut self, rotation: Rotation) {
        self.state.heading = match rotation {
            Rotation::Left => self.state.heading.left(),
            Rotation::Right => self.state.heading.right(),
        };
    }

    /// Steps one cell along the current heading.
    ///
    /// The plateau validates the target first; on error the rover keeps its
    /// position and heading.
    pub fn move_forward(&mut self, plateau: &mut Plateau) -> Result<(), RoverError> {
        let from = self.state.position;
        let step = self.state.heading.unit_vector();
        let to = match (from.x.checked_add(step.x), from.y.checked_add(step.y)) {
            (Some(x), Some(y)) => IVec2::new(x, y),
            // Past i32 range is past any plateau edge.
            _ => {
                return Err(RoverError::OutOfBounds {
                    position: from.saturating_add(step),
                });
            }
        };
        plateau.move_occupant(from, to)?;
        plateau.mark_trail(from, self.state.heading);
        self.state.position = to;
        debug!(id = ?self.id, x = to.x, y = to.y, "Rover moved");
        Ok(())
    }

    /// Applies a single operation.
    pub fn apply(&mut self, op: RoverOp, plateau: &mut Plateau) -> Result<(), RoverError> {
        match op {
            RoverOp::Rotate(rotation) => {
                self.rotate(rotation);
                Ok(())
            }
            RoverOp::Move => self.move_forward(plateau),
        }
    }

    /// Drives the rover through a command string of `L`, `R` and `M`.
    ///
    /// Shorthand for [`NavigationInterpreter::explore`] with the standard
    /// command set.
    pub fn explore(
        &mut self,
        plateau: &mut Plateau,
        commands: &str,
    ) -> Result<RoverState, NavigationError> {
        NavigationInterpreter::standard().explore(self, plateau, commands)
    }

    /// Human readable one-liner, e.g. `position of rover 1: (1, 3, N)`.
    pub fn summary(&self) -> String {
        let id = self.id.map(|id| id.to_string()).unwrap_or_default();
        format!(
            "position of rover {id}: ({}, {}, {})",
            self.state.position.x, self.state.position.y, self.state.heading
        )
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.state.fmt(f)
    }
}
