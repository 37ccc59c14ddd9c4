//! Game state and core entity records
//!
//! Plain data records for the ship, rocks, and blasts, plus the per-round
//! `GameState` that owns them. Entities carry only kinematic state and a
//! sprite size; rotated geometry is re-derived from angle and position every
//! frame.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::geometry::Rect;
use super::spawn;
use crate::consts::*;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives exhausted; the session shows the banners and restarts
    GameOver,
}

/// Things that happened during a tick the frontend may want to react to
/// (fire-and-forget sound triggers, mostly).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A blast left the ship's cannon
    BlastFired,
    /// A blast struck a rock
    RockHit,
    /// The ship collided with a rock and respawned
    ShipDestroyed,
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Ship {
    /// Logical center position
    pub pos: Vec2,
    /// Rotation in degrees; only sine/cosine consume it, so no wrapping
    pub rot: f32,
    /// Forward speed, clamped to [0, MAX_SPEED]
    pub speed: f32,
    /// Turn rate, degrees per second
    pub rot_speed: f32,
    /// Collisions are ignored while set
    pub invulnerable: bool,
}

impl Ship {
    /// Whether the respawn blink hides the ship this frame.
    ///
    /// Five half-second windows inside the grace period: (0.5,1), (1.5,2),
    /// (2.5,3), (3.5,4), (4.5,5) seconds of round time. Cosmetic only.
    pub fn blink_hidden(&self, elapsed_secs: f32) -> bool {
        self.invulnerable
            && elapsed_secs > 0.0
            && elapsed_secs < INVULN_SECS
            && elapsed_secs.fract() > 0.5
    }
}

/// A drifting asteroid
#[derive(Debug, Clone)]
pub struct Rock {
    pub pos: Vec2,
    pub rot: f32,
    /// Spin rate, degrees per second
    pub rot_speed: f32,
    /// Spin direction, +1 or -1
    pub rot_dir: f32,
    /// Horizontal drift speed, constant per rock
    pub speed: f32,
    /// Sprite size; shrinks to 75% of the rotated extent on each split
    pub size: Vec2,
    /// Times this rock has been hit, in [0, NUM_OF_ROCK_SPLIT]
    pub hits: u8,
    /// Bounding rect from the last frame's rotated extent
    pub rect: Rect,
}

/// A player-fired projectile
#[derive(Debug, Clone)]
pub struct Blast {
    pub pos: Vec2,
    /// Inherited from the firing ship at creation
    pub rot: f32,
    pub speed: f32,
    pub size: Vec2,
}

/// Complete per-round state. The tick owns and exclusively mutates the rock
/// and blast lists; the session owns the score/lives read-out and restart.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Round seed for reproducibility
    pub seed: u64,
    /// Seeded RNG feeding every randomized spawn this round
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub ship: Ship,
    pub rocks: Vec<Rock>,
    pub blasts: Vec<Blast>,
    /// Monotonically increasing, +SCORE_PER_HIT per rock hit
    pub score: u32,
    pub lives: u32,
    /// Round timer; gates the invulnerability window and the blink
    pub elapsed_secs: f32,
    /// Frames since the last edge spawn
    pub rock_add_counter: u32,
    /// Events from the most recent tick, drained by the session
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh round: new ship, the fixed initial rock field, zero score.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let rocks = (0..NUM_OF_ROCKS).map(|_| spawn::rock(&mut rng)).collect();
        Self {
            seed,
            rng,
            phase: GamePhase::Playing,
            ship: spawn::ship(),
            rocks,
            blasts: Vec::new(),
            score: 0,
            lives: START_LIVES,
            elapsed_secs: 0.0,
            rock_add_counter: 0,
            events: Vec::new(),
        }
    }
}
