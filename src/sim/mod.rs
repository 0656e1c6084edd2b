//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed integer timestep only
//! - Seeded RNG only
//! - Stable track order (oldest line first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod track;

pub use collision::{Collision, resolve};
pub use state::{GamePhase, GameSession, Player};
pub use tick::tick;
pub use track::{Line, LineTrack};
