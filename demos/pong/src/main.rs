//! Headless smoke session: drives a short scripted rally and logs the
//! final score. Wire a real `Surface`/`EventSource` adapter into
//! `GameLoop::new` to play interactively.

use footlight::{GameLoop, Key, PlatformEvent};
use pong::Pong;

fn script() -> Vec<Vec<PlatformEvent>> {
    let mut frames = vec![Vec::new(); 240];
    // Left paddle drifts up for two seconds, then back down.
    frames[0].push(PlatformEvent::KeyDown(Key::W.code()));
    frames[60].push(PlatformEvent::KeyUp(Key::W.code()));
    frames[61].push(PlatformEvent::KeyDown(Key::S.code()));
    frames[120].push(PlatformEvent::KeyUp(Key::S.code()));
    frames
}

fn main() {
    env_logger::init();
    let (mut game_loop, _surface) = GameLoop::headless(Pong::new(), script());
    if let Err(err) = game_loop.run() {
        log::error!("pong failed to start: {err}");
        std::process::exit(1);
    }
    let (left, right) = game_loop.game().score();
    log::info!("final score: {left} - {right}");
}
