//! Paddle Ball entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use paddle_ball::platform::BrowserClock;
    use paddle_ball::platform::input::attach_keyboard;
    use paddle_ball::platform::overlay::attach_coordinate_readout;
    use paddle_ball::scheduler::{self, LoopExit};
    use paddle_ball::surface::{CanvasSurface, Surface};
    use paddle_ball::{GameController, Settings};

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Trace).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        let settings = Settings::load();
        log::set_max_level(settings.level().to_level_filter());
        log::info!("Paddle Ball starting...");

        let surface = match CanvasSurface::from_id(&settings.canvas_id) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Cannot start: {}", e);
                return;
            }
        };

        if settings.show_coordinates {
            if let Err(e) = attach_coordinate_readout(surface.canvas()) {
                log::warn!("Coordinate readout unavailable: {:?}", e);
            }
        }

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let game = Rc::new(RefCell::new(GameController::new(surface.bounds(), seed)));
        log::info!("Game initialized with seed: {}", seed);

        let Some(mut clock) = BrowserClock::new() else {
            log::error!("Cannot start: no window");
            return;
        };

        if let Err(e) = attach_keyboard(game.clone(), clock.handle()) {
            log::error!("Failed to attach keyboard handlers: {:?}", e);
        }

        wasm_bindgen_futures::spawn_local(async move {
            let mut surface = surface;
            let exit = scheduler::run(&game, &mut surface, &mut clock).await;
            log::info!("Loop stopped: {:?}", exit);

            if exit == LoopExit::GameOver {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("GAME OVER");
                }
            }
        });

        log::info!("Paddle Ball running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::cell::RefCell;
    use std::time::{SystemTime, UNIX_EPOCH};

    use paddle_ball::scheduler::{ManualClock, block_on_ready, run};
    use paddle_ball::surface::RecordingSurface;
    use paddle_ball::{Bounds, GameController, Key, Settings};

    /// Frame budget for the headless session
    const MAX_FRAMES: u64 = 10_000;

    let settings = Settings::load();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();
    log::info!("Paddle Ball (native) starting headless session...");
    log::info!("Browser play requires the wasm build - run with `trunk serve`");

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    let game = RefCell::new(GameController::new(Bounds::default(), seed));
    game.borrow_mut().key_down(Key::Launch);

    let mut surface = RecordingSurface::new(Bounds::default());
    let mut clock = ManualClock::new(MAX_FRAMES);

    match block_on_ready(run(&game, &mut surface, &mut clock)) {
        Some(exit) => {
            let game = game.borrow();
            let pos = game.ball().position();
            log::info!(
                "Loop stopped: {:?} after {} frames, ball at ({:.1}, {:.1})",
                exit,
                game.frame_count(),
                pos.x,
                pos.y
            );
        }
        None => log::error!("Headless loop suspended unexpectedly"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
