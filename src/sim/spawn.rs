//! Platform placement and recycling
//!
//! Initial layout depends on board width: wider boards get more,
//! closer-spaced platforms. Platforms that scroll below the board are
//! replaced one-for-one at the top.

use glam::Vec2;
use rand::Rng;

use super::state::{Platform, World};
use crate::consts::*;

/// Initial layout for a board-width bucket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Platforms stacked above the starting one
    pub count: usize,
    /// Vertical gap between consecutive platforms
    pub spacing: f32,
    /// Distance of the first stacked platform from the board bottom
    pub offset: f32,
}

/// Single lookup replacing the per-width branches of the original.
/// Only two buckets are observable: every board up to 560 px gets the
/// phone layout, everything wider the dense one.
pub fn layout_for_width(width: f32) -> Layout {
    if width <= 560.0 {
        Layout { count: 15, spacing: 100.0, offset: 30.0 }
    } else {
        Layout { count: 50, spacing: 30.0, offset: 50.0 }
    }
}

/// Total platform count right after placement (stacked ones plus the
/// starting platform)
pub fn initial_platform_count(width: f32) -> usize {
    layout_for_width(width).count + 1
}

/// Rebuild the platform list for the current board
pub fn place_platforms(world: &mut World) {
    world.platforms.clear();

    let (width, height) = (world.board.width, world.board.height);
    let size = Vec2::new(world.tuning.platform_width, world.tuning.platform_height);

    // Starting platform centered near the bottom
    world.platforms.push(Platform {
        pos: Vec2::new(width / 2.0, height - START_PLATFORM_BOTTOM_OFFSET),
        size,
    });

    let layout = layout_for_width(width);
    for i in 0..layout.count {
        let x = random_spawn_x(world);
        world.platforms.push(Platform {
            pos: Vec2::new(x, height - layout.spacing * i as f32 - layout.offset),
            size,
        });
    }
}

/// Drop platforms that scrolled below the board, appending one fresh
/// platform at the top per removal. List length is unchanged.
pub fn recycle_platforms(world: &mut World) {
    let height = world.board.height;
    while world.platforms.first().is_some_and(|p| p.pos.y >= height) {
        world.platforms.remove(0);
        push_top_platform(world);
    }
}

fn push_top_platform(world: &mut World) {
    let size = Vec2::new(world.tuning.platform_width, world.tuning.platform_height);
    let x = random_spawn_x(world);
    world.platforms.push(Platform {
        pos: Vec2::new(x, -size.y),
        size,
    });
}

fn random_spawn_x(world: &mut World) -> f32 {
    let span = world.board.width * SPAWN_X_FRACTION;
    world.rng.random_range(0.0..span).floor()
}
