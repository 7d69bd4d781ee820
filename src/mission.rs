//! Batch missions: a plateau plus a list of rovers and their command strings.
//!
//! A plan is written as plain text, one value group per line:
//!
//! ```text
//! 5 5
//! 1 2 N
//! LMLMLMLMM
//! 3 3 E
//! MMRMMRMRRM
//! ```
//!
//! The first line holds the plateau's width and height. Each rover then gets
//! a position line (`x y heading`) followed by its command line, which may be
//! blank.

use crate::error::RoverError;
use crate::interpreter::NavigationInterpreter;
use crate::plateau::Plateau;
use crate::render::{cell_count, render_plateau};
use crate::rover::{Heading, Rover, RoverId, RoverState};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

/// Deployment instructions for one rover.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverPlan {
    pub position: IVec2,
    pub heading: Heading,
    pub commands: String,
}

/// A full mission: plateau bounds and the rovers to deploy, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionPlan {
    pub width: i32,
    pub height: i32,
    pub rovers: Vec<RoverPlan>,
}

/// What happened to a single rover during a mission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RoverOutcome {
    /// Every command ran.
    Completed { id: RoverId, state: RoverState },
    /// Command `step` failed or was rejected; the rover stays where it stopped.
    Halted {
        id: RoverId,
        state: RoverState,
        step: usize,
        reason: String,
    },
    /// The spawn was refused.
    NotDeployed { id: RoverId, reason: String },
    /// Never attempted because an earlier rover failed and the mission aborted.
    Skipped { id: RoverId },
}

impl RoverOutcome {
    pub fn id(&self) -> RoverId {
        match self {
            Self::Completed { id, .. }
            | Self::Halted { id, .. }
            | Self::NotDeployed { id, .. }
            | Self::Skipped { id } => *id,
        }
    }

    /// Final state of a rover that made it onto the plateau.
    pub fn final_state(&self) -> Option<RoverState> {
        match self {
            Self::Completed { state, .. } | Self::Halted { state, .. } => Some(*state),
            Self::NotDeployed { .. } | Self::Skipped { .. } => None,
        }
    }

    fn is_failure(&self) -> bool {
        !matches!(self, Self::Completed { .. })
    }
}

impl fmt::Display for RoverOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed { id, state } => write!(
                f,
                "Final position of rover {id}: ({}, {}, {})",
                state.position.x, state.position.y, state.heading
            ),
            Self::Halted {
                id,
                state,
                step,
                reason,
            } => write!(
                f,
                "Final position of rover {id}: ({}, {}, {}) (halted at command {step}: {reason})",
                state.position.x, state.position.y, state.heading
            ),
            Self::NotDeployed { id, reason } => {
                write!(f, "Rover {id} was not deployed: {reason}")
            }
            Self::Skipped { id } => write!(f, "Rover {id} was skipped"),
        }
    }
}

/// Result of running a [`MissionPlan`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionReport {
    /// One entry per planned rover, in plan order.
    pub outcomes: Vec<RoverOutcome>,
    /// Rendered final plateau, when enabled in the [`NavigationConfig`](crate::NavigationConfig).
    pub map: Option<String>,
}

impl MissionReport {
    /// Final states of every rover that made it onto the plateau.
    pub fn final_states(&self) -> Vec<(RoverId, RoverState)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.final_state().map(|s| (o.id(), s)))
            .collect()
    }
}

impl fmt::Display for MissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{outcome}")?;
        }
        Ok(())
    }
}

impl MissionPlan {
    /// Parses the text form of a mission.
    pub fn parse(input: &str) -> Result<Self, RoverError> {
        let mut lines: Vec<&str> = input.lines().map(str::trim).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let Some(first) = lines.first() else {
            return Err(RoverError::malformed(1, "missing plateau dimensions"));
        };
        let (width, height) = parse_dimensions(first)?;

        let rovers = lines[1..]
            .chunks(2)
            .enumerate()
            .map(|(i, chunk)| {
                let line = 2 + i * 2;
                let (position, heading) = parse_position(chunk[0], line)?;
                let commands = chunk.get(1).copied().unwrap_or_default().to_string();
                Ok(RoverPlan {
                    position,
                    heading,
                    commands,
                })
            })
            .collect::<Result<Vec<_>, RoverError>>()?;

        Ok(Self {
            width,
            height,
            rovers,
        })
    }

    /// Deploys and drives every rover in plan order.
    ///
    /// Only an invalid plateau fails the whole run. Per-rover failures are
    /// recorded in the report; a halted rover keeps its cell, so it can block
    /// rovers deployed after it.
    pub fn run(&self, interpreter: &NavigationInterpreter) -> Result<MissionReport, RoverError> {
        let mut plateau = Plateau::new(self.width, self.height)?;
        let mut rovers = Vec::with_capacity(self.rovers.len());
        let mut report = MissionReport::default();
        let mut aborted = false;

        for (i, plan) in self.rovers.iter().enumerate() {
            let id = rover_id(i)?;
            if aborted {
                report.outcomes.push(RoverOutcome::Skipped { id });
                continue;
            }

            let outcome = match Rover::spawn(plan.position, plan.heading, &mut plateau, Some(id)) {
                Err(error) => {
                    warn!(id, %error, "Rover not deployed");
                    RoverOutcome::NotDeployed {
                        id,
                        reason: error.to_string(),
                    }
                }
                Ok(mut rover) => {
                    let outcome = match interpreter.explore(&mut rover, &mut plateau, &plan.commands)
                    {
                        Ok(state) => RoverOutcome::Completed { id, state },
                        Err(halt) => RoverOutcome::Halted {
                            id,
                            state: halt.state,
                            step: halt.step,
                            reason: halt.error.to_string(),
                        },
                    };
                    rovers.push(rover);
                    outcome
                }
            };

            aborted = outcome.is_failure() && interpreter.config().abort_on_failure;
            report.outcomes.push(outcome);
        }

        let config = interpreter.config();
        if config.render_map {
            if cell_count(&plateau) <= config.max_map_cells {
                report.map = Some(render_plateau(&plateau, &rovers));
            } else {
                warn!(
                    cells = cell_count(&plateau),
                    limit = config.max_map_cells,
                    "Plateau too large to render"
                );
            }
        }

        info!(
            rovers = self.rovers.len(),
            deployed = rovers.len(),
            "Mission complete"
        );
        Ok(report)
    }
}

/// 1-based id for the rover at plan index `index`.
fn rover_id(index: usize) -> Result<RoverId, RoverError> {
    index
        .checked_add(1)
        .and_then(|n| RoverId::try_from(n).ok())
        .ok_or_else(|| {
            RoverError::malformed(
                index.saturating_mul(2).saturating_add(2),
                format!("more than {} rovers", RoverId::MAX),
            )
        })
}

fn parse_dimensions(line: &str) -> Result<(i32, i32), RoverError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [w, h] = fields[..] else {
        return Err(RoverError::malformed(
            1,
            format!("expected 'width height', got {line:?}"),
        ));
    };
    let parse = |s: &str| {
        s.parse::<i32>().map_err(|_| {
            RoverError::invalid_dimension(format!("{s:?} is not an integer"))
        })
    };
    let (width, height) = (parse(w)?, parse(h)?);
    if width < 0 || height < 0 {
        return Err(RoverError::invalid_dimension(format!(
            "plateau dimensions must be non-negative, got {width} x {height}"
        )));
    }
    Ok((width, height))
}

fn parse_position(line: &str, line_no: usize) -> Result<(IVec2, Heading), RoverError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [x, y, heading] = fields[..] else {
        return Err(RoverError::malformed(
            line_no,
            format!("expected 'x y heading', got {line:?}"),
        ));
    };
    let coord = |s: &str| {
        s.parse::<i32>()
            .map_err(|_| RoverError::malformed(line_no, format!("{s:?} is not an integer")))
    };
    Ok((IVec2::new(coord(x)?, coord(y)?), heading.parse()?))
}
