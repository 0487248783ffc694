//! Per-frame simulation tick
//!
//! One tick per animation frame: steer, move, collide, recycle, score.

use rand::Rng;

use super::collision::overlaps;
use super::spawn;
use super::state::{Facing, World};

/// Horizontal steering command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Steer {
    Left { speed: f32 },
    Right { speed: f32 },
    /// Stop horizontal movement (touch released without dragging)
    Halt,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Steering from keyboard/touch; `None` leaves velocity unchanged
    pub steer: Option<Steer>,
    /// Restart request; honored only while game over
    pub restart: bool,
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &TickInput) {
    if input.restart && world.game_over {
        world.restart();
        return;
    }
    if world.game_over {
        return;
    }

    if let Some(steer) = input.steer {
        apply_steer(world, steer);
    }

    world.time_ticks += 1;

    // Horizontal move with edge wrap
    world.ball.pos.x += world.vel.x;
    if world.ball.pos.x > world.board.width {
        world.ball.pos.x = 0.0;
    } else if world.ball.pos.x + world.ball.size.x < 0.0 {
        world.ball.pos.x = world.board.width;
    }

    // Gravity and vertical move
    world.vel.y += world.tuning.gravity;
    world.ball.pos.y += world.vel.y;
    if world.ball.pos.y > world.board.height {
        // Terminal state; the rest of this frame still runs, the early
        // return above kicks in next tick
        world.game_over = true;
        log::info!("Game over at score {}", world.score);
    }

    // Single platform pass, same order as the frame loop it replaces:
    // scroll platforms down while the ball climbs above the 3/4 line,
    // then bounce off anything the falling ball overlaps
    let scroll_line = world.board.scroll_line();
    let jump_impulse = world.tuning.jump_impulse;
    let ball_box = world.ball.aabb();
    for platform in &mut world.platforms {
        if world.vel.y < 0.0 && world.ball.pos.y < scroll_line {
            platform.pos.y -= jump_impulse;
        }
        if overlaps(&ball_box, &platform.aabb()) && world.vel.y >= 0.0 {
            world.vel.y = jump_impulse;
        }
    }

    spawn::recycle_platforms(world);
    update_score(world);
}

fn apply_steer(world: &mut World, steer: Steer) {
    match steer {
        Steer::Right { speed } => {
            world.vel.x = speed;
            world.ball.facing = Facing::Right;
        }
        Steer::Left { speed } => {
            world.vel.x = -speed;
            world.ball.facing = Facing::Left;
        }
        Steer::Halt => world.vel.x = 0.0,
    }
}

/// Noisy high-water scoring. Climbing adds a random roll to `max_score`
/// and raises the displayed score to it; falling subtracts the roll from
/// `max_score` but never lowers the displayed score. The descent
/// subtraction silently eats into future ascents - kept as shipped.
fn update_score(world: &mut World) {
    let points = world.rng.random_range(0..world.tuning.score_roll_max.max(1));
    if world.vel.y < 0.0 {
        world.max_score += points;
        if world.score < world.max_score {
            world.score = world.max_score;
        }
    } else {
        world.max_score -= points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{JUMP_IMPULSE, KEY_STEER_SPEED};
    use crate::sim::spawn::initial_platform_count;
    use crate::sim::state::{Board, Platform};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn world_1080() -> World {
        World::new(12345, Board::new(1080.0, 700.0))
    }

    /// World with no platforms in reach, so the ball free-falls
    fn airborne_world() -> World {
        let mut world = world_1080();
        world.platforms.clear();
        world.platforms.push(Platform {
            pos: Vec2::new(0.0, -5000.0),
            size: Vec2::new(80.0, 28.0),
        });
        world
    }

    #[test]
    fn test_gravity_accumulates_each_tick() {
        let mut world = airborne_world();
        let input = TickInput::default();

        tick(&mut world, &input);
        assert!((world.vel.y - (JUMP_IMPULSE + 0.4)).abs() < 1e-5);

        tick(&mut world, &input);
        assert!((world.vel.y - (JUMP_IMPULSE + 0.8)).abs() < 1e-5);
    }

    #[test]
    fn test_wrap_right_edge() {
        let mut world = airborne_world();
        world.ball.pos.x = 1075.0;
        world.vel.x = 10.0;

        tick(&mut world, &TickInput::default());
        assert_eq!(world.ball.pos.x, 0.0);
    }

    #[test]
    fn test_wrap_left_edge() {
        let mut world = airborne_world();
        world.ball.pos.x = 0.0;
        world.vel.x = -60.0;

        tick(&mut world, &TickInput::default());
        assert_eq!(world.ball.pos.x, 1080.0);
    }

    #[test]
    fn test_bounce_resets_velocity_to_jump_impulse() {
        // Ball at rest, overlapping a platform, on a 1080-wide board
        let mut world = world_1080();
        world.platforms.clear();
        world.vel = Vec2::ZERO;
        world.platforms.push(Platform {
            pos: world.ball.pos,
            size: Vec2::new(80.0, 28.0),
        });

        tick(&mut world, &TickInput::default());
        assert_eq!(world.vel.y, -8.0);
    }

    #[test]
    fn test_bounce_overrides_any_fall_speed() {
        let mut world = world_1080();
        world.platforms.clear();
        world.vel = Vec2::new(0.0, 37.5);
        let mut pos = world.ball.pos;
        pos.y += 37.9; // where the ball lands this tick
        world.platforms.push(Platform {
            pos,
            size: Vec2::new(80.0, 28.0),
        });

        tick(&mut world, &TickInput::default());
        assert_eq!(world.vel.y, -8.0);
    }

    #[test]
    fn test_platforms_scroll_down_while_climbing_high() {
        let mut world = airborne_world();
        world.ball.pos.y = 100.0; // well above the 525 scroll line
        world.vel.y = -8.0;
        let before = world.platforms[0].pos.y;

        tick(&mut world, &TickInput::default());
        assert_eq!(world.platforms[0].pos.y, before + 8.0);
    }

    #[test]
    fn test_platforms_hold_still_below_scroll_line() {
        let mut world = airborne_world();
        world.ball.pos.y = 600.0;
        world.vel.y = -8.0;
        let before = world.platforms[0].pos.y;

        tick(&mut world, &TickInput::default());
        assert_eq!(world.platforms[0].pos.y, before);
    }

    #[test]
    fn test_falling_below_board_is_game_over_and_sticky() {
        let mut world = airborne_world();
        world.ball.pos.y = 699.0;
        world.vel.y = 20.0;

        tick(&mut world, &TickInput::default());
        assert!(world.game_over);

        // Further ticks freeze the world
        let ticks = world.time_ticks;
        let pos = world.ball.pos;
        tick(&mut world, &TickInput::default());
        assert!(world.game_over);
        assert_eq!(world.time_ticks, ticks);
        assert_eq!(world.ball.pos, pos);
    }

    #[test]
    fn test_restart_only_honored_while_game_over() {
        let mut world = airborne_world();
        let input = TickInput {
            restart: true,
            ..Default::default()
        };

        tick(&mut world, &input);
        assert_eq!(world.time_ticks, 1); // still playing, restart ignored
    }

    #[test]
    fn test_restart_resets_world() {
        let mut world = world_1080();
        world.score = 900;
        world.max_score = 450;
        world.ball.pos.y = 800.0;
        world.vel = Vec2::new(4.0, 30.0);
        world.game_over = true;
        world.ball.facing = Facing::Left;

        let input = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut world, &input);

        assert!(!world.game_over);
        assert_eq!(world.score, 0);
        assert_eq!(world.max_score, 0);
        assert_eq!(world.vel, Vec2::new(0.0, -8.0));
        assert_eq!(world.ball.facing, Facing::Right);
        assert_eq!(world.ball.pos, world.board.ball_start(world.ball.size));
        assert_eq!(world.platforms.len(), initial_platform_count(1080.0));
    }

    #[test]
    fn test_steer_sets_velocity_and_facing() {
        let mut world = airborne_world();

        let input = TickInput {
            steer: Some(Steer::Left { speed: KEY_STEER_SPEED }),
            ..Default::default()
        };
        tick(&mut world, &input);
        assert_eq!(world.vel.x, -4.0);
        assert_eq!(world.ball.facing, Facing::Left);

        // Velocity persists with no further steering
        tick(&mut world, &TickInput::default());
        assert_eq!(world.vel.x, -4.0);

        let input = TickInput {
            steer: Some(Steer::Halt),
            ..Default::default()
        };
        tick(&mut world, &input);
        assert_eq!(world.vel.x, 0.0);
        assert_eq!(world.ball.facing, Facing::Left); // halt keeps the sprite
    }

    #[test]
    fn test_steer_speeds_come_from_tuning() {
        let tuning = Tuning {
            key_steer_speed: 7.0,
            touch_steer_speed: 9.0,
            ..Default::default()
        };
        let mut world = World::with_tuning(1, Board::new(1080.0, 700.0), tuning);
        world.platforms.clear();

        let input = TickInput {
            steer: Some(Steer::Right { speed: world.tuning.key_steer_speed }),
            ..Default::default()
        };
        tick(&mut world, &input);
        assert_eq!(world.vel.x, 7.0);

        let input = TickInput {
            steer: Some(Steer::Left { speed: world.tuning.touch_steer_speed }),
            ..Default::default()
        };
        tick(&mut world, &input);
        assert_eq!(world.vel.x, -9.0);
    }

    #[test]
    fn test_score_rises_while_climbing() {
        let mut world = airborne_world();
        world.ball.pos.y = 600.0; // below the scroll line, safely airborne

        // Fresh worlds climb for ~20 ticks on the start impulse
        for _ in 0..10 {
            tick(&mut world, &TickInput::default());
        }
        assert!(world.score > 0);
        assert_eq!(world.score, world.max_score);
    }

    /// Accepted quirk: descent drains `max_score` (possibly below zero)
    /// while the displayed score holds at its high-water mark.
    #[test]
    fn test_descent_drains_max_score_but_not_display() {
        let mut world = airborne_world();
        world.score = 500;
        world.max_score = 500;
        world.vel.y = 5.0;
        world.ball.pos.y = 100.0;

        for _ in 0..30 {
            tick(&mut world, &TickInput::default());
        }
        assert_eq!(world.score, 500);
        assert!(world.max_score < 500);
    }

    #[test]
    fn test_determinism() {
        let mut a = world_1080();
        let mut b = world_1080();

        let inputs = [
            TickInput {
                steer: Some(Steer::Right { speed: 4.0 }),
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                steer: Some(Steer::Left { speed: 5.0 }),
                ..Default::default()
            },
            TickInput::default(),
        ];

        for input in inputs.iter().cycle().take(200) {
            tick(&mut a, input);
            tick(&mut b, input);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.score, b.score);
        assert_eq!(a.max_score, b.max_score);
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.platforms, b.platforms);
    }
}
