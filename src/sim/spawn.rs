//! Entity spawners
//!
//! Every randomized parameter is drawn from the round's seeded RNG so spawn
//! sequences replay exactly for a given seed.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::geometry::{Rect, draw_position};
use super::state::{Blast, Rock, Ship};
use crate::consts::*;

/// Ship at the fixed spawn point: stationary, pointing up, invulnerable.
pub fn ship() -> Ship {
    Ship {
        pos: SHIP_SPAWN,
        rot: 0.0,
        speed: 0.0,
        rot_speed: SHIP_ROT_SPEED,
        invulnerable: true,
    }
}

/// Rock at a uniformly random on-screen position with randomized drift and spin.
pub fn rock(rng: &mut Pcg32) -> Rock {
    let pos = Vec2::new(
        rng.random_range(0.0..=SCREEN_W - ROCK_SIZE.x),
        rng.random_range(0.0..=SCREEN_H - ROCK_SIZE.y),
    );
    let speed = rng.random_range(ROCK_SPEED_MIN..ROCK_SPEED_MAX);
    let rot_speed = rng.random_range(ROCK_ROT_SPEED_MIN..ROCK_ROT_SPEED_MAX);
    let rot_dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let rect = Rect::from_pos_extent(draw_position(pos, ROCK_SIZE), ROCK_SIZE);
    Rock {
        pos,
        rot: 0.0,
        rot_speed,
        rot_dir,
        speed,
        size: ROCK_SIZE,
        hits: 0,
        rect,
    }
}

/// Periodic spawn variant: a fresh rock just off the left edge at a random
/// height, drifting onto the screen.
pub fn edge_rock(rng: &mut Pcg32) -> Rock {
    let mut rock = rock(rng);
    rock.pos = Vec2::new(-ROCK_SIZE.x, rng.random_range(0.0..=SCREEN_H - ROCK_SIZE.y));
    rock.rect = Rect::from_pos_extent(draw_position(rock.pos, ROCK_SIZE), ROCK_SIZE);
    rock
}

/// Blast fired from `pos` with heading `rot`, at triple the ship's top speed.
pub fn blast(pos: Vec2, rot: f32) -> Blast {
    Blast {
        pos,
        rot,
        speed: BLAST_SPEED,
        size: BLAST_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn ship_spawns_at_defaults() {
        let s = ship();
        assert_eq!(s.pos, SHIP_SPAWN);
        assert_eq!(s.rot, 0.0);
        assert_eq!(s.speed, 0.0);
        assert!(s.invulnerable);
    }

    #[test]
    fn rocks_spawn_inside_the_screen_with_parameters_in_range() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..500 {
            let r = rock(&mut rng);
            assert!(r.pos.x >= 0.0 && r.pos.x <= SCREEN_W - ROCK_SIZE.x);
            assert!(r.pos.y >= 0.0 && r.pos.y <= SCREEN_H - ROCK_SIZE.y);
            assert!(r.speed >= ROCK_SPEED_MIN && r.speed < ROCK_SPEED_MAX);
            assert!(r.rot_speed >= ROCK_ROT_SPEED_MIN && r.rot_speed < ROCK_ROT_SPEED_MAX);
            assert!(r.rot_dir == 1.0 || r.rot_dir == -1.0);
            assert_eq!(r.hits, 0);
        }
    }

    #[test]
    fn edge_rocks_start_just_off_the_left_edge() {
        let mut rng = Pcg32::seed_from_u64(2);
        for _ in 0..100 {
            let r = edge_rock(&mut rng);
            assert_eq!(r.pos.x, -ROCK_SIZE.x);
            assert!(r.pos.y >= 0.0 && r.pos.y <= SCREEN_H - ROCK_SIZE.y);
        }
    }

    #[test]
    fn blasts_inherit_the_firing_pose() {
        let b = blast(Vec2::new(123.0, 45.0), 271.0);
        assert_eq!(b.pos, Vec2::new(123.0, 45.0));
        assert_eq!(b.rot, 271.0);
        assert_eq!(b.speed, MAX_SPEED * 3.0);
        assert_eq!(b.size, BLAST_SIZE);
    }
}
