//! # plateau-rover
//!
//! Navigation core for rovers exploring a rectangular plateau.
//!
//! A [`Plateau`] owns the bounds and the registry of occupied cells. Each
//! [`Rover`] keeps its own position and [`Heading`] and asks the plateau to
//! referee every move, so two rovers can never share a cell and no rover can
//! drive off the edge. Command strings of `L`, `R` and `M` are validated and
//! executed by a [`NavigationInterpreter`]; [`MissionPlan`] runs a whole
//! batch of rovers from the classic text format.

pub mod error;
pub mod interpreter;
pub mod mission;
pub mod plateau;
pub mod render;
pub mod rover;

pub use error::*;
pub use interpreter::*;
pub use mission::*;
pub use plateau::*;
pub use render::*;
pub use rover::*;
