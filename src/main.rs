//! Brick Breaker entry point
//!
//! Browser builds start the canvas game; native builds run a headless
//! autopilot session and print the JSON report.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
    }
    log::info!("Brick Breaker starting...");

    if let Err(e) = brick_breaker::platform::web::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Viewport assumed for headless runs
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_VIEWPORT: (f32, f32) = (1920.0, 1080.0);

/// Five minutes of frames at 60 Hz
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_MAX_TICKS: u64 = 5 * 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::highscores::JsonFileStore;
    use brick_breaker::platform::run_headless;
    use brick_breaker::renderer::RecordingSurface;
    use brick_breaker::sim::GameSession;
    use brick_breaker::{Playfield, Settings};

    env_logger::init();
    log::info!("Brick Breaker (native, headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(&path).unwrap_or_else(|e| {
            log::warn!("Cannot load settings from {}: {}, using defaults", path, e);
            Settings::default()
        }),
        None => Settings::default(),
    };

    let scores_path =
        std::env::var("BRICK_BREAKER_SCORES").unwrap_or_else(|_| "highscore.json".to_string());
    let store = JsonFileStore::open(scores_path);

    let playfield = Playfield::from_viewport(HEADLESS_VIEWPORT.0, HEADLESS_VIEWPORT.1, &settings);
    let mut session = GameSession::new(settings, playfield, store);
    let mut surface = RecordingSurface::new();

    let report = run_headless(&mut session, &mut surface, HEADLESS_MAX_TICKS, true);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Cannot serialize report: {}", e),
    }
}
