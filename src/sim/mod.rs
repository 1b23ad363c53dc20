//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies beyond the `Platform` trait

pub mod autopilot;
pub mod collision;
pub mod flyer;
pub mod pipe;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Collision, check_collision, collides};
pub use flyer::{Flyer, tilt_for_velocity};
pub use pipe::{Pipe, PipeSegment};
pub use rect::Rect;
pub use state::{GamePhase, GameState};
pub use tick::{InputEvent, TickInput, TickOutcome, render_game_over, render_playing, tick};
