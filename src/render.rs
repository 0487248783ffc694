//! Canvas 2D rendering collaborator
//!
//! Draws the world each frame: ball sprite (facing-resolved), platform
//! sprites, score text and the game-over banner. The sim never sees any
//! of this; it only exposes positions, sizes and flags.

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::sim::{Facing, World};

/// Boards at most this wide get the mobile banner text and font
const MOBILE_BANNER_WIDTH: f32 = 560.0;

const BANNER_FONT_PX: f64 = 20.0;
const MOBILE_BANNER_FONT_PX: f64 = 17.0;

/// Opaque sprite handles supplied by the asset loader in `main`
pub struct SpriteAssets {
    pub ball_left: HtmlImageElement,
    pub ball_right: HtmlImageElement,
    pub platform: HtmlImageElement,
}

impl SpriteAssets {
    fn ball_for(&self, facing: Facing) -> &HtmlImageElement {
        match facing {
            Facing::Left => &self.ball_left,
            Facing::Right => &self.ball_right,
        }
    }
}

/// Draw one frame of the current world
pub fn draw_frame(ctx: &CanvasRenderingContext2d, world: &World, assets: &SpriteAssets) {
    ctx.clear_rect(0.0, 0.0, world.board.width as f64, world.board.height as f64);

    let ball = &world.ball;
    let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
        assets.ball_for(ball.facing),
        ball.pos.x as f64,
        ball.pos.y as f64,
        ball.size.x as f64,
        ball.size.y as f64,
    );

    for platform in &world.platforms {
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &assets.platform,
            platform.pos.x as f64,
            platform.pos.y as f64,
            platform.size.x as f64,
            platform.size.y as f64,
        );
    }

    ctx.set_fill_style_str("white");
    ctx.set_font("20px Arial");
    let _ = ctx.fill_text(&world.score.to_string(), 5.0, 20.0);

    if world.game_over {
        draw_game_over_banner(ctx, world);
    }
}

/// Centered banner with a black backing box, mobile/desktop text variants.
/// The box width and centering always use the desktop text measured at
/// the score font's 20px, even when the mobile variant draws at 17px.
fn draw_game_over_banner(ctx: &CanvasRenderingContext2d, world: &World) {
    let desktop_text = "Game over: Press 'Space' to Restart";
    let text_width = ctx
        .measure_text(desktop_text)
        .map(|m| m.width())
        .unwrap_or_default();
    let x = (world.board.width as f64 - text_width) / 2.0;
    let y = world.board.height as f64 * 7.0 / 8.0;

    let (text, font_px) = if world.board.width <= MOBILE_BANNER_WIDTH {
        ctx.set_font("17px Arial");
        ("Game over: 'Touch' the screen to Restart", MOBILE_BANNER_FONT_PX)
    } else {
        (desktop_text, BANNER_FONT_PX)
    };

    let box_width = text_width + 20.0;
    let box_height = font_px + 20.0;
    ctx.set_fill_style_str("black");
    ctx.fill_rect(x - 10.0, y - box_height, box_width, box_height);

    ctx.set_fill_style_str("white");
    let text_x = x - 10.0 + (box_width - text_width) / 2.0;
    let text_y = y - (box_height - font_px) / 2.0;
    let _ = ctx.fill_text(text, text_x, text_y);
}
