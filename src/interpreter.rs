//! Interpreter that turns a command string into rover operations.
//!
//! The entry point is [`NavigationInterpreter`]. Configure it with a
//! [`NavigationConfig`], register character-to-operation mappings via
//! [`NavigationInterpreter::set_op`] or
//! [`NavigationInterpreter::populate_standard_commands`], then call
//! [`NavigationInterpreter::explore`] with a rover and its plateau.

use crate::error::{NavigationError, RoverError};
use crate::plateau::Plateau;
use crate::rover::{Rotation, Rover, RoverOp, RoverState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Configuration for navigation runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Attach a rendered map of the final plateau to mission reports.
    pub render_map: bool,
    /// Largest plateau, in cells, that gets a rendered map.
    pub max_map_cells: u64,
    /// Skip the remaining rovers of a mission once one fails to deploy or halts.
    pub abort_on_failure: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            render_map: false,
            max_map_cells: 10_000,
            abort_on_failure: false,
        }
    }
}

/// Interprets command strings and drives rovers through them.
#[derive(Clone, Debug)]
pub struct NavigationInterpreter {
    op_map: HashMap<char, RoverOp>,
    config: NavigationConfig,
}

impl NavigationInterpreter {
    /// Creates a new interpreter with the given configuration and an empty command map.
    ///
    /// Register operations with [`set_op`](Self::set_op) or
    /// [`populate_standard_commands`](Self::populate_standard_commands) before calling
    /// [`explore`](Self::explore).
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            op_map: HashMap::new(),
            config,
        }
    }

    /// Default configuration with `L`, `R` and `M` registered.
    pub fn standard() -> Self {
        let mut interpreter = Self::new(NavigationConfig::default());
        interpreter.populate_standard_commands();
        interpreter
    }

    /// Replaces the entire command map in one step (builder pattern).
    ///
    /// Keys are folded to upper case.
    pub fn with_map(mut self, map: impl IntoIterator<Item = (char, RoverOp)>) -> Self {
        self.op_map = map
            .into_iter()
            .map(|(c, op)| (c.to_ascii_uppercase(), op))
            .collect();
        self
    }

    /// Assigns a [`RoverOp`] to a command character. Lookups ignore ASCII case.
    pub fn set_op(&mut self, command: char, op: RoverOp) {
        self.op_map.insert(command.to_ascii_uppercase(), op);
    }

    /// Registers `L` (rotate left), `R` (rotate right) and `M` (move forward).
    pub fn populate_standard_commands(&mut self) {
        let mappings = [
            ('L', RoverOp::Rotate(Rotation::Left)),
            ('R', RoverOp::Rotate(Rotation::Right)),
            ('M', RoverOp::Move),
        ];

        for (command, op) in mappings {
            self.set_op(command, op);
        }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Translates `commands` into operations, rejecting the whole string on the
    /// first character with no registered mapping.
    pub fn compile(&self, commands: &str) -> Result<Vec<RoverOp>, RoverError> {
        commands
            .chars()
            .enumerate()
            .map(|(index, command)| {
                self.op_map
                    .get(&command.to_ascii_uppercase())
                    .copied()
                    .ok_or(RoverError::InvalidCommand { command, index })
            })
            .collect()
    }

    /// Drives `rover` through `commands` on `plateau`.
    ///
    /// The string is validated in full before the rover moves, so an
    /// [`RoverError::InvalidCommand`] leaves everything untouched. Commands
    /// then run left to right; the first failing move stops the run and is
    /// reported with the rover's state at that point. Earlier commands keep
    /// their effects.
    pub fn explore(
        &self,
        rover: &mut Rover,
        plateau: &mut Plateau,
        commands: &str,
    ) -> Result<RoverState, NavigationError> {
        let ops = self.compile(commands).map_err(|error| {
            let step = match error {
                RoverError::InvalidCommand { index, .. } => index,
                _ => 0,
            };
            NavigationError {
                step,
                state: rover.state(),
                error,
            }
        })?;

        debug!(id = ?rover.id(), commands = ops.len(), "Exploring");

        for (step, op) in ops.into_iter().enumerate() {
            if let Err(error) = rover.apply(op, plateau) {
                warn!(id = ?rover.id(), step, %error, "Rover halted");
                return Err(NavigationError {
                    step,
                    state: rover.state(),
                    error,
                });
            }
        }

        Ok(rover.state())
    }
}

impl Default for NavigationInterpreter {
    fn default() -> Self {
        Self::standard()
    }
}
