//! Headless smoke session: patrols while holding the drop key, letting
//! the cooldown meter out depth charges, then logs the final score.

use footlight::{GameLoop, Key, PlatformEvent};
use sub_hunt::SubHunt;

fn script() -> Vec<Vec<PlatformEvent>> {
    let mut frames = vec![Vec::new(); 300];
    frames[0].push(PlatformEvent::KeyDown(Key::Space.code()));
    frames[10].push(PlatformEvent::KeyDown(Key::Right.code()));
    frames[80].push(PlatformEvent::KeyUp(Key::Right.code()));
    frames[90].push(PlatformEvent::KeyDown(Key::Left.code()));
    frames[200].push(PlatformEvent::KeyUp(Key::Left.code()));
    frames[280].push(PlatformEvent::KeyUp(Key::Space.code()));
    frames
}

fn main() {
    env_logger::init();
    let (mut game_loop, _surface) = GameLoop::headless(SubHunt::with_seed(1984), script());
    if let Err(err) = game_loop.run() {
        log::error!("sub-hunt failed to start: {err}");
        std::process::exit(1);
    }
    log::info!("final score: {}", game_loop.game().score());
}
