//! Sky Bounce entry point
//!
//! Wires the browser canvas, input events and the frame loop around the
//! deterministic sim. Native builds run a short headless smoke loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, TouchEvent};

    use sky_bounce::render::{SpriteAssets, draw_frame};
    use sky_bounce::sim::{Board, Steer, TickInput, World, tick};

    /// Delay before the one-time first-load reload and after a resize
    const RELOAD_DELAY_MS: i32 = 3000;
    const HAS_REFRESHED_KEY: &str = "has_refreshed";

    /// Game instance holding all state
    struct Game {
        world: World,
        input: TickInput,
        ctx: CanvasRenderingContext2d,
        assets: SpriteAssets,
        touch_start_x: Option<f32>,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Sky Bounce starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Board fills the window, minus a little space at the bottom
        let board_width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0) as f32;
        let board_height =
            window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0) as f32 - 4.0;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("board")
            .expect("no board canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(board_width as u32);
        canvas.set_height(board_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let assets = load_sprites();

        let seed = js_sys::Date::now() as u64;
        let world = World::new(seed, Board::new(board_width, board_height));
        log::info!("Game initialized with seed: {seed}");

        let game = Rc::new(RefCell::new(Game {
            world,
            input: TickInput::default(),
            ctx,
            assets,
            touch_start_x: None,
        }));

        setup_keyboard(game.clone());
        setup_touch(game.clone());
        setup_resize_reload(game.clone(), canvas);
        schedule_first_load_refresh();

        request_animation_frame(game);

        log::info!("Sky Bounce running!");
    }

    /// Both ball sprites come from the same file; left/right stay separate
    /// handles so an alternate left-facing art drop needs no code change.
    fn load_sprites() -> SpriteAssets {
        let ball_right = HtmlImageElement::new().expect("image alloc");
        ball_right.set_src("./assets/ball.png");
        let ball_left = HtmlImageElement::new().expect("image alloc");
        ball_left.set_src("./assets/ball.png");
        let platform = HtmlImageElement::new().expect("image alloc");
        platform.set_src("./assets/support2.png");
        SpriteAssets {
            ball_left,
            ball_right,
            platform,
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();

            let input = g.input;
            tick(&mut g.world, &input);

            // Clear one-shot inputs after processing; steering velocity
            // itself persists inside the world
            g.input.steer = None;
            g.input.restart = false;

            draw_frame(&g.ctx, &g.world, &g.assets);
        }

        request_animation_frame(game);
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let mut g = game.borrow_mut();
            let speed = g.world.tuning.key_steer_speed;
            match event.code().as_str() {
                "ArrowRight" | "KeyD" => {
                    g.input.steer = Some(Steer::Right { speed });
                }
                "ArrowLeft" | "KeyA" => {
                    g.input.steer = Some(Steer::Left { speed });
                }
                "Space" => g.input.restart = true,
                _ => {}
            }
        });
        let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_touch(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Touch start: remember where the drag began
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().touch_start_x = Some(touch.client_x() as f32);
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move: drag direction steers, a stationary finger halts
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let mut g = game.borrow_mut();
                let Some(start_x) = g.touch_start_x else {
                    return;
                };
                if let Some(touch) = event.touches().get(0) {
                    let delta = touch.client_x() as f32 - start_x;
                    let speed = g.world.tuning.touch_steer_speed;
                    g.input.steer = Some(if delta > 0.0 {
                        Steer::Right { speed }
                    } else if delta < 0.0 {
                        Steer::Left { speed }
                    } else {
                        Steer::Halt
                    });
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end: stop steering, or restart after a game over
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                let mut g = game.borrow_mut();
                g.touch_start_x = None;
                if g.world.game_over {
                    g.input.restart = true;
                } else {
                    g.input.steer = Some(Steer::Halt);
                }
            });
            let _ = document
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Resize the canvas and rescale the ball immediately, then reload the
    /// page once the window has settled for a few seconds.
    fn setup_resize_reload(game: Rc<RefCell<Game>>, canvas: HtmlCanvasElement) {
        let window = web_sys::window().unwrap();
        let timer: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0) as f32;
            let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0) as f32;

            canvas.set_width(width as u32);
            canvas.set_height(height as u32);

            {
                let mut g = game.borrow_mut();
                g.world.board = Board::new(width, height);
                g.world.ball.size = g.world.board.scaled_ball_size();
            }

            // Debounce the reload
            if let Some(id) = timer.borrow_mut().take() {
                window.clear_timeout_with_handle(id);
            }
            let reload = Closure::once_into_js(move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            });
            if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                reload.unchecked_ref(),
                RELOAD_DELAY_MS,
            ) {
                *timer.borrow_mut() = Some(id);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// First visit only: reload once after the fonts/sprites settle, and
    /// remember that in LocalStorage so it never repeats.
    fn schedule_first_load_refresh() {
        let window = web_sys::window().unwrap();
        let storage = window.local_storage().ok().flatten();
        let Some(storage) = storage else {
            return;
        };

        let has_refreshed = matches!(storage.get_item(HAS_REFRESHED_KEY), Ok(Some(_)));
        if has_refreshed {
            return;
        }

        let reload = Closure::once_into_js(move || {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            reload.unchecked_ref(),
            RELOAD_DELAY_MS,
        );
        let _ = storage.set_item(HAS_REFRESHED_KEY, "true");
        log::info!("First load, scheduling one-time refresh");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sky_bounce::sim::{Board, Steer, TickInput, World, tick};

    env_logger::init();
    log::info!("Sky Bounce (native) starting...");
    log::info!("Native mode is a headless smoke run - build for wasm32 to play");

    let mut world = World::new(0x5EED, Board::new(1080.0, 700.0));
    let mut input = TickInput::default();

    for frame in 0u32..1200 {
        // Wobble left and right so the run covers both steer paths
        if frame.is_multiple_of(60) {
            input.steer = Some(if frame.is_multiple_of(120) {
                Steer::Right { speed: 4.0 }
            } else {
                Steer::Left { speed: 4.0 }
            });
        } else {
            input.steer = None;
        }
        tick(&mut world, &input);
        if world.game_over {
            break;
        }
    }

    log::info!(
        "Smoke run done: {} ticks, score {}, game over: {}",
        world.time_ticks,
        world.score,
        world.game_over
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
