//! Headless smoke session: strafes right while firing a few shots, then
//! logs the final score. Wire real platform adapters into `GameLoop::new`
//! to play interactively.

use footlight::{GameLoop, Key, PlatformEvent};
use space_invaders::SpaceInvaders;

fn script() -> Vec<Vec<PlatformEvent>> {
    let mut frames = vec![Vec::new(); 180];
    frames[0].push(PlatformEvent::KeyDown(Key::Right.code()));
    frames[45].push(PlatformEvent::KeyUp(Key::Right.code()));
    // Three distinct presses of the fire key.
    for shot in 0..3 {
        let at = 10 + shot * 30;
        frames[at].push(PlatformEvent::KeyDown(Key::Space.code()));
        frames[at + 5].push(PlatformEvent::KeyUp(Key::Space.code()));
    }
    frames
}

fn main() {
    env_logger::init();
    let (mut game_loop, _surface) = GameLoop::headless(SpaceInvaders::new(), script());
    if let Err(err) = game_loop.run() {
        log::error!("space-invaders failed to start: {err}");
        std::process::exit(1);
    }
    log::info!(
        "final score: {} (game over: {})",
        game_loop.game().score(),
        game_loop.game().is_game_over()
    );
}
