//! Keyboard input handling
//!
//! Translates discrete key-press events into horizontal player displacement.
//! Runs independently of the tick cadence; the next tick reads whatever
//! position the last key press left behind.

use crate::consts::INPUT_STEP;
use crate::sim::GameSession;

/// Horizontal direction for a recognized movement key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Left,
    Right,
}

/// Map a DOM `KeyboardEvent::key` value to a movement direction
///
/// Arrow keys, a/d, and numeric keypad 4/6 are aliases. Anything else is
/// unrecognized.
pub fn dir_for_key(key: &str) -> Option<Dir> {
    match key {
        "ArrowLeft" | "a" | "A" | "4" => Some(Dir::Left),
        "ArrowRight" | "d" | "D" | "6" => Some(Dir::Right),
        _ => None,
    }
}

/// Apply a key press to the session
///
/// Unrecognized keys are ignored, as is all input once the session is over.
/// The displacement is clamped so the player circle stays on screen.
pub fn handle_key(session: &mut GameSession, key: &str) {
    if session.is_over() {
        return;
    }
    let Some(dir) = dir_for_key(key) else {
        return;
    };
    let dx = match dir {
        Dir::Left => -INPUT_STEP,
        Dir::Right => INPUT_STEP,
    };
    session.player.nudge(dx, session.width);
}
