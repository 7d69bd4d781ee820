use crate::error::RoverError;
use crate::rover::Heading;
use glam::IVec2;
use std::collections::{HashMap, HashSet};

/// The bounded grid rovers explore, spanning `0..=width` by `0..=height`.
///
/// The plateau is the authoritative registry of occupied cells. Rovers do not
/// live here; they register their positions and ask the plateau to referee
/// every move.
#[derive(Clone, Debug)]
pub struct Plateau {
    width: i32,
    height: i32,

    /// Cells currently held by a rover.
    occupied: HashSet<IVec2>,

    /// Cells a rover has driven out of, with the heading it left on.
    trail: HashMap<IVec2, Heading>,
}

impl Plateau {
    /// Creates an empty plateau. Both bounds are inclusive and must be non-negative.
    pub fn new(width: i32, height: i32) -> Result<Self, RoverError> {
        if width < 0 || height < 0 {
            return Err(RoverError::invalid_dimension(format!(
                "plateau dimensions must be non-negative, got {width} x {height}"
            )));
        }
        Ok(Self {
            width,
            height,
            occupied: HashSet::new(),
            trail: HashMap::new(),
        })
    }

    /// Largest valid x coordinate.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Largest valid y coordinate.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Bounds check only; says nothing about occupancy.
    pub fn contains(&self, position: IVec2) -> bool {
        (0..=self.width).contains(&position.x) && (0..=self.height).contains(&position.y)
    }

    /// Whether a rover currently holds `position`.
    pub fn is_occupied(&self, position: IVec2) -> bool {
        self.occupied.contains(&position)
    }

    /// Iterates over every registered position, in no particular order.
    pub fn occupied(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.occupied.iter().copied()
    }

    /// Heading of the last rover that drove out of `position`, if any.
    pub fn trail_at(&self, position: IVec2) -> Option<Heading> {
        self.trail.get(&position).copied()
    }

    /// Checks that `position` is inside the plateau and free.
    fn check_free(&self, position: IVec2) -> Result<(), RoverError> {
        if !self.contains(position) {
            return Err(RoverError::OutOfBounds { position });
        }
        if self.is_occupied(position) {
            return Err(RoverError::PositionOccupied { position });
        }
        Ok(())
    }

    /// Claims `position` for a rover. Nothing is recorded on failure.
    pub fn register(&mut self, position: IVec2) -> Result<(), RoverError> {
        self.check_free(position)?;
        self.occupied.insert(position);
        Ok(())
    }

    /// Releases `position`. Returns whether it was registered.
    pub fn unregister(&mut self, position: IVec2) -> bool {
        self.occupied.remove(&position)
    }

    /// Moves an occupancy from `from` to `to`.
    ///
    /// `from` must be registered on this plateau. `to` is validated before
    /// anything changes, so on error `from` is still held.
    pub fn move_occupant(&mut self, from: IVec2, to: IVec2) -> Result<(), RoverError> {
        if !self.is_occupied(from) {
            return Err(RoverError::NotRegistered { position: from });
        }
        self.check_free(to)?;
        self.occupied.remove(&from);
        self.occupied.insert(to);
        Ok(())
    }

    pub(crate) fn mark_trail(&mut self, position: IVec2, heading: Heading) {
        self.trail.insert(position, heading);
    }
}
