//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which way the ball sprite faces. Resolved to an image handle at render
/// time only; the sim never touches sprite data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// The visible play area, sized to the window on wasm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub width: f32,
    pub height: f32,
}

impl Board {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Ball start position. The original centers on the ball *height*,
    /// so that quirk is kept.
    pub fn ball_start(&self, ball_size: Vec2) -> Vec2 {
        Vec2::new(
            self.width / 2.0 - ball_size.y / 2.0,
            self.height * 7.0 / 8.0 - ball_size.y,
        )
    }

    /// Ball size scaled proportionally from the 1080x700 reference layout
    pub fn scaled_ball_size(&self) -> Vec2 {
        let width_ratio = self.width / REF_BOARD_WIDTH;
        let height_ratio = self.height / REF_BOARD_HEIGHT;
        Vec2::new(BALL_BASE_WIDTH * width_ratio, BALL_HEIGHT * height_ratio)
    }

    /// Above this line, climbing scrolls the platforms down instead of
    /// moving a camera
    pub fn scroll_line(&self) -> f32 {
        self.height * SCROLL_LINE_FRACTION
    }
}

/// The player's ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub size: Vec2,
    pub facing: Facing,
}

impl Ball {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A static platform the ball bounces off
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Platform {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Complete game state. Owned by the frame loop, mutated only through
/// [`tick`](super::tick::tick).
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    pub board: Board,
    pub tuning: Tuning,
    pub ball: Ball,
    /// Ball velocity, applied each tick
    pub vel: Vec2,
    /// Spawn order; index 0 is the oldest (lowest) platform
    pub platforms: Vec<Platform>,
    /// Displayed score; only ever raised during play
    pub score: i64,
    /// Running maximum; descent subtracts from it (see `update_score`)
    pub max_score: i64,
    pub game_over: bool,
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl World {
    /// Create a new world with default tuning
    pub fn new(seed: u64, board: Board) -> Self {
        Self::with_tuning(seed, board, Tuning::default())
    }

    pub fn with_tuning(seed: u64, board: Board, tuning: Tuning) -> Self {
        let ball_size = Vec2::new(BALL_WIDTH, BALL_HEIGHT);
        let mut world = Self {
            seed,
            board,
            ball: Ball {
                pos: board.ball_start(ball_size),
                size: ball_size,
                facing: Facing::Right,
            },
            vel: Vec2::new(0.0, tuning.jump_impulse),
            platforms: Vec::new(),
            score: 0,
            max_score: 0,
            game_over: false,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        };
        super::spawn::place_platforms(&mut world);
        world
    }

    /// Reset everything except the board, tuning and RNG stream
    pub fn restart(&mut self) {
        self.ball.pos = self.board.ball_start(self.ball.size);
        self.ball.facing = Facing::Right;
        self.vel = Vec2::new(0.0, self.tuning.jump_impulse);
        self.score = 0;
        self.max_score = 0;
        self.game_over = false;
        super::spawn::place_platforms(self);
        log::info!("Restarted (seed {})", self.seed);
    }
}
