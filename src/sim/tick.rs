//! Per-frame simulation step
//!
//! Advances one variable-timestep frame: input, firing, edge spawning, the
//! blast pass, the rock pass, the ship pass, then the game-over check. The
//! pass order is load-bearing; collisions always test against rects derived
//! from this frame's integrated positions.

use glam::Vec2;

use super::geometry::{Rect, draw_position, heading_from_degrees, rotated_extent};
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// Advance the game state by one frame of `dt` seconds.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    if state.phase != GamePhase::Playing {
        return;
    }
    state.elapsed_secs += dt;

    // Left checked first; holding both keys turns left.
    let rot_direction = if input.left {
        1.0
    } else if input.right {
        -1.0
    } else {
        0.0
    };
    // Thrust changes are per frame held, not dt-scaled, and there is no drag.
    if input.up {
        state.ship.speed = (state.ship.speed + SPEED_INCREMENT).min(MAX_SPEED);
    } else if input.down {
        state.ship.speed = (state.ship.speed - SPEED_DECREMENT).max(0.0);
    }

    // One blast per frame the key is held. Deliberately unthrottled: the fire
    // rate is frame-paced, which preserves the original game's pacing.
    if input.fire {
        state
            .blasts
            .push(spawn::blast(state.ship.pos, state.ship.rot));
        state.events.push(GameEvent::BlastFired);
    }

    // Edge spawns run on a frame count, not wall clock.
    state.rock_add_counter += 1;
    if state.rock_add_counter == ADD_NEW_ROCK_RATE {
        state.rock_add_counter = 0;
        let rock = spawn::edge_rock(&mut state.rng);
        state.rocks.push(rock);
    }

    update_blasts(state, dt);
    update_rocks(state, dt);
    update_ship(state, rot_direction, dt);

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
    }
}

/// Integrate every blast, cull the ones that left the screen, and resolve at
/// most one rock hit per blast (first rock in list order wins).
fn update_blasts(state: &mut GameState, dt: f32) {
    let mut survivors = Vec::with_capacity(state.blasts.len());
    for mut blast in std::mem::take(&mut state.blasts) {
        let extent = rotated_extent(blast.size, blast.rot);
        let heading = heading_from_degrees(blast.rot) * MOVE_DIRECTION;
        blast.pos += heading * blast.speed * dt;

        if blast.pos.y < 0.0
            || blast.pos.y + extent.y > SCREEN_H
            || blast.pos.x < 0.0
            || blast.pos.x + extent.x > SCREEN_W
        {
            continue;
        }

        let rect = Rect::from_pos_extent(draw_position(blast.pos, extent), extent);
        if let Some(idx) = state.rocks.iter().position(|r| rect.intersects(&r.rect)) {
            split_rock(state, idx);
            state.score += SCORE_PER_HIT;
            state.events.push(GameEvent::RockHit);
            continue;
        }
        survivors.push(blast);
    }
    state.blasts = survivors;
}

/// Split the rock at `idx` after a blast hit.
///
/// The original shifts up, a fresh half shifts down, both take 75% of the
/// rotated extent as their new sprite, and the hit count increments. A rock
/// that reaches NUM_OF_ROCK_SPLIT is removed outright and its half is
/// discarded with it; otherwise the half inherits the incremented count.
fn split_rock(state: &mut GameState, idx: usize) {
    let mut half = spawn::rock(&mut state.rng);
    let rock = &mut state.rocks[idx];

    let extent = rotated_extent(rock.size, rock.rot);
    let offset = extent.y + extent.y / 2.0;
    half.pos = rock.pos;
    rock.pos.y -= offset;
    half.pos.y += offset;

    // Floored so repeated splits can never collapse to a degenerate sprite.
    let shrunk = (extent * 0.75).max(Vec2::ONE);
    rock.size = shrunk;
    half.size = shrunk;
    let rock_extent = rotated_extent(shrunk, rock.rot);
    rock.rect = Rect::from_pos_extent(draw_position(rock.pos, rock_extent), rock_extent);

    rock.hits += 1;
    let hits = rock.hits;
    if hits >= NUM_OF_ROCK_SPLIT {
        state.rocks.remove(idx);
    } else {
        half.hits = hits;
        half.rect = Rect::from_pos_extent(draw_position(half.pos, shrunk), shrunk);
        state.rocks.push(half);
    }
}

/// Spin and drift every rock, despawn vertical leavers, wrap horizontal ones,
/// and refresh each survivor's bounding rect.
fn update_rocks(state: &mut GameState, dt: f32) {
    let mut survivors = Vec::with_capacity(state.rocks.len());
    for mut rock in std::mem::take(&mut state.rocks) {
        rock.rot += rock.rot_dir * rock.rot_speed * dt;
        rock.pos.x += rock.speed * dt;
        let extent = rotated_extent(rock.size, rock.rot);

        // Drifted off the top or bottom: gone for good.
        if rock.pos.y < 0.0 || rock.pos.y + extent.y > SCREEN_H {
            continue;
        }
        // Off the right edge: wrap back to just off the left.
        if rock.pos.x > SCREEN_W + ROCK_SIZE.x {
            rock.pos.x = -ROCK_SIZE.x;
        }

        rock.rect = Rect::from_pos_extent(draw_position(rock.pos, extent), extent);
        survivors.push(rock);
    }
    state.rocks = survivors;
}

/// Integrate the ship, clamp it to the screen, expire the invulnerability
/// window, and resolve at most one ship-rock collision.
fn update_ship(state: &mut GameState, rot_direction: f32, dt: f32) {
    if state.elapsed_secs >= INVULN_SECS {
        state.ship.invulnerable = false;
        state.elapsed_secs = 0.0;
    }

    let ship = &mut state.ship;
    ship.rot += rot_direction * ship.rot_speed * dt;
    let extent = rotated_extent(SHIP_SIZE, ship.rot);
    let heading = heading_from_degrees(ship.rot) * MOVE_DIRECTION;
    ship.pos += heading * ship.speed * dt;

    // Hard clamp, not wrap: the rotated sprite never crosses a screen edge.
    if ship.pos.y < extent.y {
        ship.pos.y = extent.y;
    }
    if ship.pos.y + extent.y > SCREEN_H {
        ship.pos.y = SCREEN_H - extent.y;
    }
    if ship.pos.x < extent.x {
        ship.pos.x = extent.x;
    }
    if ship.pos.x + extent.x > SCREEN_W {
        ship.pos.x = SCREEN_W - extent.x;
    }

    let rect = Rect::from_pos_extent(draw_position(ship.pos, extent), extent);
    if !ship.invulnerable && state.rocks.iter().any(|r| rect.intersects(&r.rect)) {
        // The colliding rock persists; only the ship resets.
        state.lives = state.lives.saturating_sub(1);
        state.elapsed_secs = 0.0;
        state.ship = spawn::ship();
        state.events.push(GameEvent::ShipDestroyed);
    }
}
