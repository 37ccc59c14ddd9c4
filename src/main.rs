//! Blasteroids entry point
//!
//! The windowed frontend (SDL or similar) lives outside this crate; the
//! binary wires the session to a headless frontend and runs a short scripted
//! demo, which doubles as a smoke test of the whole loop.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use blasteroids::Session;
use blasteroids::consts::{Color, TARGET_FPS};
use blasteroids::platform::{
    Audio, Clock, InitError, InputSnapshot, InputSource, Renderer, Sound, SpriteId, TextStyle,
};

/// Frontend with no window: scripted input, a fixed frame interval, and
/// draw/sound counters instead of output.
struct Headless {
    frames: u32,
    max_frames: u32,
    sprites_drawn: u64,
    frames_presented: u64,
    sounds_played: u64,
}

impl Headless {
    fn new(max_frames: u32) -> Result<Self, InitError> {
        Ok(Self {
            frames: 0,
            max_frames,
            sprites_drawn: 0,
            frames_presented: 0,
            sounds_played: 0,
        })
    }
}

impl InputSource for Headless {
    fn poll(&mut self) -> InputSnapshot {
        self.frames += 1;
        if self.frames > self.max_frames {
            return InputSnapshot {
                quit: true,
                ..InputSnapshot::default()
            };
        }
        // Spin and shoot: enough to exercise thrust, splitting, and scoring.
        InputSnapshot {
            any_key: true,
            left: self.frames % 7 != 0,
            up: self.frames % 3 == 0,
            fire: self.frames % 2 == 0,
            ..InputSnapshot::default()
        }
    }
}

impl Clock for Headless {
    fn tick(&mut self) -> u32 {
        // No real sleeping headless; report the target interval.
        1000 / TARGET_FPS
    }

    fn wait(&mut self, _ms: u32) {}
}

impl Renderer for Headless {
    fn clear(&mut self) {}

    fn draw_sprite(&mut self, _sprite: SpriteId, _size: Vec2, _top_left: Vec2, _rot: f32) {
        self.sprites_drawn += 1;
    }

    fn draw_text(&mut self, _text: &str, _style: TextStyle, _pos: Vec2, _color: Color) {}

    fn measure_text(&self, text: &str, style: TextStyle) -> Vec2 {
        let scale = match style {
            TextStyle::Title => 36.0,
            TextStyle::Text | TextStyle::Score => 18.0,
        };
        Vec2::new(text.len() as f32 * scale / 2.0, scale)
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

impl Audio for Headless {
    fn play(&mut self, _sound: Sound) {
        self.sounds_played += 1;
    }
}

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Blasteroids starting (seed {seed})");

    // Two simulated minutes at the target frame rate.
    let platform = match Headless::new(TARGET_FPS * 120) {
        Ok(platform) => platform,
        Err(err) => {
            log::error!("startup failed: {err}");
            std::process::exit(1);
        }
    };

    let mut session = Session::new(platform, seed);
    session.run();

    let top = session.top_score();
    let platform = session.into_platform();
    log::info!(
        "demo finished: top score {top}, {} frames presented, {} sprites drawn, {} sounds",
        platform.frames_presented,
        platform.sprites_drawn,
        platform.sounds_played,
    );
}
