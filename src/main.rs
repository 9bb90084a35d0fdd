//! Neon Pong entry point
//!
//! The browser build boots the web shell. The native build has no window;
//! it plays a short headless session and logs what happens.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    neon_pong::platform::web::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Neon Pong (native) starting...");
    log::info!("Native mode has no renderer - serve the wasm build for the playable game");

    headless_session(20.0);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Run an unattended match for `seconds` of game time on a 60 Hz clock
#[cfg(not(target_arch = "wasm32"))]
fn headless_session(seconds: f64) {
    use neon_pong::{GameEvent, GameSession, Settings};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    let mut session = GameSession::new(&Settings::default());
    let mut now = 0.0;
    let mut events = session.start_match("", "", 0x5eed, now);

    let frames = (seconds * 1000.0 / FRAME_MS) as u32;
    for _ in 0..frames {
        for event in events.drain(..) {
            match event {
                GameEvent::CountdownTick { value } => log::info!("Countdown: {value}"),
                GameEvent::CountdownDone => log::info!("Go!"),
                other => log::debug!("{other:?}"),
            }
        }
        now += FRAME_MS;
        events = session.frame(now);
    }

    if let Some(state) = session.state() {
        let board = &state.scoreboard;
        log::info!(
            "Final after {seconds}s: {} {} - {} {}",
            board.p1.name,
            board.p1.score,
            board.p2.score,
            board.p2.name
        );
    }
}
