//! Blasteroids - an asteroids-style arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, game state)
//! - `game`: Session runner (Title / Playing / GameOver state machine)
//! - `platform`: Collaborator traits a frontend implements (render, audio, input, clock)
//! - `topscore`: Process-scoped top score carried across rounds

pub mod game;
pub mod platform;
pub mod sim;
pub mod topscore;

pub use game::Session;
pub use topscore::TopScore;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Screen dimensions in pixels
    pub const SCREEN_W: f32 = 640.0;
    pub const SCREEN_H: f32 = 480.0;

    /// Unrotated sprite sizes
    pub const SHIP_SIZE: Vec2 = Vec2::new(17.0, 21.0);
    pub const ROCK_SIZE: Vec2 = Vec2::new(51.0, 41.0);
    pub const BLAST_SIZE: Vec2 = Vec2::new(3.0, 11.0);

    /// Rocks present when a round starts
    pub const NUM_OF_ROCKS: usize = 3;
    /// Hit count at which a rock is removed instead of split again
    pub const NUM_OF_ROCK_SPLIT: u8 = 5;
    /// Frames between off-screen edge spawns (a frame count, not wall clock)
    pub const ADD_NEW_ROCK_RATE: u32 = 300;

    /// Ship speed change per frame the thrust key is held
    pub const SPEED_INCREMENT: f32 = 6.0;
    /// Ship speed change per frame the brake key is held
    pub const SPEED_DECREMENT: f32 = 13.0;
    /// Ship forward speed ceiling, pixels per second
    pub const MAX_SPEED: f32 = 200.0;
    /// Ship turn rate, degrees per second
    pub const SHIP_ROT_SPEED: f32 = 360.0;
    /// Where the ship (re)spawns
    pub const SHIP_SPAWN: Vec2 = Vec2::new(200.0, 150.0);

    /// Blast speed, pixels per second
    pub const BLAST_SPEED: f32 = MAX_SPEED * 3.0;

    /// Forward motion sign shared by the ship and its blasts
    pub const MOVE_DIRECTION: f32 = -1.0;

    /// Rock drift speed range, pixels per second
    pub const ROCK_SPEED_MIN: f32 = 20.0;
    pub const ROCK_SPEED_MAX: f32 = 80.0;
    /// Rock spin rate range, degrees per second
    pub const ROCK_ROT_SPEED_MIN: f32 = 90.0;
    pub const ROCK_ROT_SPEED_MAX: f32 = 180.0;

    /// Respawn grace period in seconds
    pub const INVULN_SECS: f32 = 5.0;
    /// Score awarded per rock hit
    pub const SCORE_PER_HIT: u32 = 100;
    /// Lives at round start
    pub const START_LIVES: u32 = 3;

    /// Frame rate cap the clock collaborator enforces
    pub const TARGET_FPS: u32 = 30;
    /// How long each end-of-round banner stays up, milliseconds
    pub const BANNER_HOLD_MS: u32 = 4000;

    /// Palette
    pub type Color = [u8; 3];
    pub const BLACK: Color = [0, 0, 0];
    pub const WHITE: Color = [255, 255, 255];
    pub const GREEN: Color = [0, 255, 0];
    pub const CARNATION: Color = [255, 166, 201];
}
