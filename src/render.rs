//! Character-matrix rendering of a plateau, for display only.

use crate::plateau::Plateau;
use crate::rover::{Heading, Rover};
use glam::IVec2;
use std::collections::HashMap;

const EMPTY_CELL: &str = "▢";

/// Number of cells on `plateau`.
pub fn cell_count(plateau: &Plateau) -> u64 {
    (plateau.width() as u64 + 1) * (plateau.height() as u64 + 1)
}

/// Glyph drawn on a cell held by a rover.
pub fn rover_glyph(heading: Heading) -> &'static str {
    match heading {
        Heading::North => "▲",
        Heading::East => "▶",
        Heading::South => "▼",
        Heading::West => "◀",
    }
}

/// Glyph drawn on a cell a rover drove out of.
pub fn trail_glyph(heading: Heading) -> &'static str {
    match heading {
        Heading::North | Heading::South => "|",
        Heading::East | Heading::West => "–",
    }
}

/// Draws the plateau top row first, with row labels on the left and column
/// labels along the bottom.
///
/// Rovers are drawn over trail marks. `rovers` should be the rovers deployed
/// on `plateau`; others are drawn wherever they claim to be if that cell is
/// inside the bounds.
pub fn render_plateau(plateau: &Plateau, rovers: &[Rover]) -> String {
    let headings: HashMap<IVec2, Heading> =
        rovers.iter().map(|r| (r.position(), r.heading())).collect();
    let mut out = String::new();

    for y in (0..=plateau.height()).rev() {
        let mut row = vec![y.to_string()];
        for x in 0..=plateau.width() {
            let cell = IVec2::new(x, y);
            let glyph = headings
                .get(&cell)
                .map(|&h| rover_glyph(h))
                .or_else(|| plateau.trail_at(cell).map(trail_glyph))
                .unwrap_or(EMPTY_CELL);
            row.push(glyph.to_string());
        }
        out.push_str(&row.join(" "));
        out.push('\n');
    }

    let mut labels = vec![" ".to_string()];
    labels.extend((0..=plateau.width()).map(|x| x.to_string()));
    out.push_str(&labels.join(" "));
    out.push('\n');

    out
}
