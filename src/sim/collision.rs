//! Collision classification against the nearest line
//!
//! Pure classification over numeric state: given the closest qualifying line,
//! is the player resting on it or falling past it? The passable x-range
//! shrinks by the player radius on both sides so the whole circle, not just
//! its center, must clear the gap.

use glam::IVec2;

use super::track::Line;
use crate::consts::CONTACT_BAND;

/// Outcome of checking the player against the closest line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Resting on the line; the scroll carries the player upward
    Blocked,
    /// Clear of the line (not yet at it, or through the hole)
    Passing,
}

/// Effective passable x-range for a player of the given radius
///
/// Touching either bound counts as blocked; only strictly inside passes.
#[inline]
pub fn passable_span(line: &Line, player_radius: i32) -> (i32, i32) {
    (
        line.hole_start + player_radius,
        line.hole_end() - player_radius,
    )
}

/// Classify the player against the closest line
pub fn resolve(line: &Line, pos: IVec2, radius: i32) -> Collision {
    let on_line = (pos.y - line.y + radius).abs() < CONTACT_BAND;

    let (hole_min_x, hole_max_x) = passable_span(line, radius);
    let in_hole = pos.x > hole_min_x && pos.x < hole_max_x;

    if on_line && !in_hole {
        Collision::Blocked
    } else {
        Collision::Passing
    }
}
