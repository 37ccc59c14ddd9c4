//! Platform abstraction layer
//!
//! The simulation is headless; everything that touches the real world goes
//! through these collaborator traits. A frontend (SDL, terminal, test
//! harness) implements them and hands itself to [`crate::Session`]:
//! - `InputSource`: per-frame key snapshot plus the quit signal
//! - `Clock`: frame pacing and measured delta-time
//! - `Renderer`: sprite/text drawing on a cleared-and-presented surface
//! - `Audio`: fire-and-forget sound triggers

use std::error::Error;
use std::fmt;

use glam::Vec2;

use crate::consts::Color;

/// Boolean key state sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub escape: bool,
    /// Any key went down this frame (title screen dismissal)
    pub any_key: bool,
    /// Window close or equivalent, independent of key state
    pub quit: bool,
}

/// Sprite handles the renderer knows how to draw.
///
/// Entities carry their own size; the renderer scales its base sprite to the
/// requested size, rotates it, and places the bounding box at the given
/// top-left position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Ship,
    Rock,
    Blast,
}

/// Text style classes (the frontend owns the actual fonts)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Large banner text (title, game over)
    Title,
    /// Prompts and secondary lines
    Text,
    /// The in-round score read-out
    Score,
}

/// Sound effect handles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Title screen greeting
    Welcome,
    /// Blast leaving the cannon
    Fire,
    /// Blast striking a rock
    RockHit,
    /// Ship-rock collision
    ShipExplode,
}

/// Per-frame input sampling.
pub trait InputSource {
    fn poll(&mut self) -> InputSnapshot;
}

/// Frame pacing. `tick` sleeps as needed to hold the frame cap and reports
/// the real elapsed interval, which becomes the frame's delta-time.
pub trait Clock {
    /// Milliseconds since the previous call.
    fn tick(&mut self) -> u32;
    /// Block for a banner hold.
    fn wait(&mut self, ms: u32);
}

/// Drawing surface. Calls between `clear` and `present` compose one frame.
pub trait Renderer {
    fn clear(&mut self);
    fn draw_sprite(&mut self, sprite: SpriteId, size: Vec2, top_left: Vec2, rot_degrees: f32);
    fn draw_text(&mut self, text: &str, style: TextStyle, pos: Vec2, color: Color);
    /// Rendered extent of `text`, for centering.
    fn measure_text(&self, text: &str, style: TextStyle) -> Vec2;
    fn present(&mut self);
}

/// Fire-and-forget sound playback.
pub trait Audio {
    fn play(&mut self, sound: Sound);
}

/// Fatal startup failure. Frontends return this from their constructors; the
/// binary logs it and exits non-zero. There is no retry path.
#[derive(Debug)]
pub enum InitError {
    /// A required asset (font, sound) could not be loaded
    MissingAsset(String),
    /// Display or audio device initialization failed
    Device(String),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::MissingAsset(what) => write!(f, "missing asset: {what}"),
            InitError::Device(what) => write!(f, "device init failed: {what}"),
        }
    }
}

impl Error for InitError {}
