//! Browser runner (WASM only)
//!
//! Sizes the canvas to the viewport, wires keyboard input to the paddle and
//! drives `run_frame` from `requestAnimationFrame` until the session ends.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

use super::{FrameStatus, KeyAction, key_down, key_up, run_frame};
use crate::highscores::LocalStorageStore;
use crate::renderer::CanvasSurface;
use crate::settings::{Playfield, Settings};
use crate::sim::state::GameSession;

/// Canvas element id in the host page
const CANVAS_ID: &str = "gameCanvas";

struct WebGame {
    session: GameSession<LocalStorageStore>,
    surface: CanvasSurface,
    /// A frame callback is pending
    running: bool,
}

/// Set up the game on the page and start the frame loop
pub fn run() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or("no canvas")?
        .dyn_into()?;

    let settings = Settings::load();
    let viewport_w = window.inner_width()?.as_f64().unwrap_or(0.0) as f32;
    let viewport_h = window.inner_height()?.as_f64().unwrap_or(0.0) as f32;
    let playfield = Playfield::from_viewport(viewport_w, viewport_h, &settings);
    canvas.set_width(playfield.width as u32);
    canvas.set_height(playfield.height as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("no 2d context")?
        .dyn_into()?;
    let surface = CanvasSurface::new(ctx, playfield.width as f64, playfield.height as f64);

    let session = GameSession::new(settings, playfield, LocalStorageStore);
    let game = Rc::new(RefCell::new(WebGame {
        session,
        surface,
        running: true,
    }));

    setup_input_handlers(&window, game.clone())?;
    request_animation_frame(game);

    log::info!("Brick Breaker running!");
    Ok(())
}

fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<WebGame>>) -> Result<(), JsValue> {
    // Key down: paddle direction, or restart once the session is over
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            match key_down(&event.key()) {
                Some(KeyAction::Paddle(command)) => {
                    game.borrow_mut().session.apply_input(command);
                }
                Some(KeyAction::Restart) => {
                    let restart = {
                        let g = game.borrow();
                        !g.running && g.session.phase().is_over()
                    };
                    if restart {
                        {
                            let mut g = game.borrow_mut();
                            g.session.restart();
                            g.running = true;
                        }
                        request_animation_frame(game.clone());
                    }
                }
                None => {}
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Key up: stop
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().session.apply_input(key_up(&event.key()));
        });
        window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Schedule the next frame. On failure the loop counts as stopped so Enter can restart it.
fn request_animation_frame(game: Rc<RefCell<WebGame>>) {
    let Some(window) = web_sys::window() else {
        log::error!("Cannot schedule frame: no window");
        game.borrow_mut().running = false;
        return;
    };
    let pending = game.clone();
    let closure = Closure::once(move |_time: f64| {
        game_loop(pending);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("Cannot schedule frame: {:?}", e);
        game.borrow_mut().running = false;
        return;
    }
    closure.forget();
}

fn game_loop(game: Rc<RefCell<WebGame>>) {
    let status = {
        let mut g = game.borrow_mut();
        let g = &mut *g;
        run_frame(&mut g.session, &mut g.surface)
    };

    match status {
        FrameStatus::Continue => request_animation_frame(game),
        FrameStatus::Halt => {
            game.borrow_mut().running = false;
            log::info!("Game over, press Enter to play again");
        }
    }
}
