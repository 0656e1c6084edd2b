//! Game session and player state

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::track::LineTrack;
use crate::consts::PLAYER_RADIUS;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; terminal
    Over,
}

/// The player-controlled circle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    /// Center position
    pub pos: IVec2,
    /// Circle radius
    pub radius: i32,
}

impl Player {
    /// Player centered in a playfield of the given size
    pub fn centered(width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(width / 2, height / 2),
            radius: PLAYER_RADIUS,
        }
    }

    /// Apply a horizontal displacement, clamped so the full circle stays
    /// inside `[0, width]`
    pub fn nudge(&mut self, dx: i32, width: i32) {
        self.pos.x = (self.pos.x + dx).clamp(self.radius, width - self.radius);
    }
}

/// Complete state for one play-through
///
/// Created once per game, mutated only by the tick and the input handler,
/// read by the renderer. Terminal once `phase` reaches `Over`: ticks become
/// no-ops and input is ignored, leaving the final frame readable.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Playfield width in pixels
    pub width: i32,
    /// Playfield height in pixels
    pub height: i32,
    /// Score, incremented once per tick while running
    pub score: u64,
    /// Simulation tick counter
    pub ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player circle
    pub player: Player,
    /// Scrolling obstacle lines
    pub track: LineTrack,
    /// Session RNG (drives hole placement)
    pub(crate) rng: Pcg32,
}

impl GameSession {
    /// Create a new session with the player centered in the playfield
    pub fn new(width: i32, height: i32, seed: u64) -> Self {
        Self {
            seed,
            width,
            height,
            score: 0,
            ticks: 0,
            phase: GamePhase::Running,
            player: Player::centered(width, height),
            track: LineTrack::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }
}
