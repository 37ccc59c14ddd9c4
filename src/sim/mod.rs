//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (entity list order)
//! - No rendering or platform dependencies

pub mod geometry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use geometry::{Rect, draw_position, heading_from_degrees, rotated_extent};
pub use state::{Blast, GameEvent, GamePhase, GameState, Rock, Ship};
pub use tick::{TickInput, tick};
