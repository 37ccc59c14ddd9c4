//! Session runner: the Title → Playing → GameOver state machine
//!
//! Owns the platform collaborators and the process-scoped top score, runs the
//! simulation tick every frame with the clock's measured delta-time, and
//! draws the HUD, title screen, and end-of-round banners.

use glam::Vec2;

use crate::consts::*;
use crate::platform::{Audio, Clock, InputSnapshot, InputSource, Renderer, Sound, SpriteId, TextStyle};
use crate::sim::{
    GameEvent, GamePhase, GameState, TickInput, draw_position, rotated_extent, tick,
};
use crate::topscore::TopScore;

/// Control flow out of a session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A play session: repeated rounds against one platform, carrying the top
/// score forward until the player quits.
pub struct Session<P> {
    platform: P,
    top_score: TopScore,
    next_seed: u64,
}

impl<P> Session<P>
where
    P: InputSource + Clock + Renderer + Audio,
{
    pub fn new(platform: P, seed: u64) -> Self {
        Self {
            platform,
            top_score: TopScore::new(),
            next_seed: seed,
        }
    }

    /// Best score seen this session.
    pub fn top_score(&self) -> u32 {
        self.top_score.get()
    }

    /// Give the platform back, e.g. to read stats after the session ends.
    pub fn into_platform(self) -> P {
        self.platform
    }

    /// Run until the player quits. An explicit outer loop rather than
    /// re-entering the session recursively, so long sessions cannot grow the
    /// call stack round by round.
    pub fn run(&mut self) {
        loop {
            if self.title_screen() == Flow::Quit {
                return;
            }
            if self.play_round() == Flow::Quit {
                return;
            }
        }
    }

    /// Title screen: name, prompt, prior top score when there is one. Waits
    /// frame by frame for any key; escape or quit leaves immediately.
    fn title_screen(&mut self) -> Flow {
        let title = "Blasteroids";
        let prompt = "Press any key to start";
        let title_size = self.platform.measure_text(title, TextStyle::Title);
        let prompt_size = self.platform.measure_text(prompt, TextStyle::Text);
        let center = Vec2::new(SCREEN_W / 2.0, SCREEN_H / 2.0);

        self.platform.clear();
        self.platform.draw_text(
            title,
            TextStyle::Title,
            Vec2::new(
                center.x - title_size.x / 2.0,
                center.y - (title_size.y + prompt_size.y + 10.0) / 2.0,
            ),
            GREEN,
        );
        self.platform.draw_text(
            prompt,
            TextStyle::Text,
            Vec2::new(center.x - prompt_size.x / 2.0, center.y + 10.0),
            GREEN,
        );
        if self.top_score.get() > 0 {
            let line = format!("Top score: {}", self.top_score.get());
            self.platform
                .draw_text(&line, TextStyle::Text, Vec2::new(20.0, 10.0), CARNATION);
        }
        self.platform.present();
        self.platform.play(Sound::Welcome);

        loop {
            let input = self.platform.poll();
            if input.quit || input.escape {
                return Flow::Quit;
            }
            if input.any_key {
                return Flow::Continue;
            }
            // Keep the frame cap while idling on the title screen.
            self.platform.tick();
        }
    }

    /// One round: tick, sound routing, render, until game over or quit.
    fn play_round(&mut self) -> Flow {
        let seed = self.next_seed;
        self.next_seed = self.next_seed.wrapping_add(1);
        let mut state = GameState::new(seed);
        log::info!("round started (seed {seed})");

        loop {
            let input = self.platform.poll();
            if input.quit || input.escape {
                return Flow::Quit;
            }
            let dt = self.platform.tick() as f32 / 1000.0;
            tick(&mut state, &tick_input(&input), dt);
            for event in state.events.drain(..) {
                self.platform.play(sound_for(event));
            }
            self.render_frame(&state);
            if state.phase == GamePhase::GameOver {
                self.game_over(&state);
                return Flow::Continue;
            }
        }
    }

    /// Draw one frame: blasts, rocks, ship (unless blinked out), score, and
    /// one ship icon per remaining life.
    fn render_frame(&mut self, state: &GameState) {
        self.platform.clear();
        for blast in &state.blasts {
            let extent = rotated_extent(blast.size, blast.rot);
            self.platform.draw_sprite(
                SpriteId::Blast,
                blast.size,
                draw_position(blast.pos, extent),
                blast.rot,
            );
        }
        for rock in &state.rocks {
            let extent = rotated_extent(rock.size, rock.rot);
            self.platform.draw_sprite(
                SpriteId::Rock,
                rock.size,
                draw_position(rock.pos, extent),
                rock.rot,
            );
        }
        if !state.ship.blink_hidden(state.elapsed_secs) {
            let extent = rotated_extent(SHIP_SIZE, state.ship.rot);
            self.platform.draw_sprite(
                SpriteId::Ship,
                SHIP_SIZE,
                draw_position(state.ship.pos, extent),
                state.ship.rot,
            );
        }

        self.platform.draw_text(
            &state.score.to_string(),
            TextStyle::Score,
            Vec2::new(20.0, 5.0),
            CARNATION,
        );
        let mut x = 28.0;
        for _ in 0..state.lives {
            self.platform
                .draw_sprite(SpriteId::Ship, SHIP_SIZE, Vec2::new(x, 60.0), 0.0);
            x += SHIP_SIZE.x + 10.0;
        }
        self.platform.present();
    }

    /// End-of-round banners over the frozen final frame: a "new top score"
    /// banner first when earned, then the game-over banner, each held for the
    /// banner pause.
    fn game_over(&mut self, state: &GameState) {
        if self.top_score.record(state.score) {
            let line = format!("New Top Score: {}!", state.score);
            let size = self.platform.measure_text(&line, TextStyle::Text);
            self.platform.draw_text(
                &line,
                TextStyle::Text,
                Vec2::new(SCREEN_W / 2.0 - size.x / 2.0, 100.0),
                GREEN,
            );
            self.platform.present();
            self.platform.wait(BANNER_HOLD_MS);
        }

        let banner = "Game Over!";
        let size = self.platform.measure_text(banner, TextStyle::Title);
        self.platform.draw_text(
            banner,
            TextStyle::Title,
            Vec2::new(
                SCREEN_W / 2.0 - size.x / 2.0,
                SCREEN_H / 2.0 - size.y / 2.0,
            ),
            GREEN,
        );
        self.platform.present();
        self.platform.wait(BANNER_HOLD_MS);
        log::info!(
            "round over: score {}, top score {}",
            state.score,
            self.top_score.get()
        );
    }
}

fn tick_input(snapshot: &InputSnapshot) -> TickInput {
    TickInput {
        left: snapshot.left,
        right: snapshot.right,
        up: snapshot.up,
        down: snapshot.down,
        fire: snapshot.fire,
    }
}

fn sound_for(event: GameEvent) -> Sound {
    match event {
        GameEvent::BlastFired => Sound::Fire,
        GameEvent::RockHit => Sound::RockHit,
        GameEvent::ShipDestroyed => Sound::ShipExplode,
    }
}
