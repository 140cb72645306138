//! The game loop: drains platform events into the input state, advances
//! the world, routes game events, draws, and paces to a fixed frame rate.

use log::{debug, info};

use crate::api::game::{Game, Services};
use crate::audio::AudioDevice;
use crate::backend::headless::{NullAudio, RecordingSurface, ScriptedEvents};
use crate::core::time::{FrameClock, FramePacer};
use crate::core::world::World;
use crate::error::EngineError;
use crate::input::queue::{EventSource, PlatformEvent};
use crate::render::surface::Surface;

/// Owns a [`Game`], its [`World`], and the platform collaborators, and
/// runs the fixed-rate frame cycle until a quit signal arrives.
pub struct GameLoop<G: Game> {
    game: G,
    world: World,
    services: Services,
    surface: Box<dyn Surface>,
    events: Box<dyn EventSource>,
    pacer: Box<dyn FramePacer>,
    running: bool,
}

impl<G: Game> GameLoop<G> {
    pub fn new(
        game: G,
        surface: Box<dyn Surface>,
        events: Box<dyn EventSource>,
        audio: Box<dyn AudioDevice>,
        pacer: Box<dyn FramePacer>,
    ) -> Self {
        let config = game.config();
        let world = World::new(config.width, config.height, config.background);
        Self {
            game,
            world,
            services: Services::new(audio),
            surface,
            events,
            pacer,
            running: false,
        }
    }

    /// A loop wired to the headless backend: recorded drawing, scripted
    /// events (quit after the script), silent audio, real frame pacing.
    /// Returns the loop and a handle to the recorded draw commands.
    pub fn headless(game: G, script: Vec<Vec<PlatformEvent>>) -> (Self, RecordingSurface) {
        let recorder = RecordingSurface::new();
        let fps = game.config().fps;
        let game_loop = Self::new(
            game,
            Box::new(recorder.clone()),
            Box::new(ScriptedEvents::new(script)),
            Box::new(NullAudio),
            Box::new(FrameClock::new(fps)),
        );
        (game_loop, recorder)
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Request loop termination; the current frame still completes.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Initialize the game, then run the frame cycle until a quit signal.
    /// Startup failures terminate before the first frame.
    pub fn run(&mut self) -> Result<(), EngineError> {
        let config = self.game.config();
        self.game.init(&mut self.world, &mut self.services)?;
        info!(
            "`{}` running: {}x{} at {} fps",
            config.title, config.width, config.height, config.fps
        );

        self.running = true;
        let mut frames: u64 = 0;
        while self.running {
            self.step();
            frames += 1;
            self.pacer.wait();
        }
        info!("`{}` stopped after {frames} frames", config.title);
        Ok(())
    }

    /// One full frame: input bookkeeping, event drain, world update, game
    /// event routing, world-level tick, draw.
    pub fn step(&mut self) {
        self.services.input.advance();

        for event in self.events.poll() {
            match event {
                PlatformEvent::Quit => {
                    debug!("quit signal received");
                    self.running = false;
                }
                PlatformEvent::KeyDown(code) => self.services.input.key_down(code),
                PlatformEvent::KeyUp(code) => self.services.input.key_up(code),
                PlatformEvent::PointerMove { x, y } => self.services.pointer.on_move(x, y),
                PlatformEvent::PointerDown { button, x, y } => {
                    self.services.pointer.on_down(button, x, y)
                }
                PlatformEvent::PointerUp { button } => self.services.pointer.on_up(button),
            }
        }

        self.world.update(&mut self.services);

        for event in std::mem::take(&mut self.services.events) {
            self.game.on_event(event, &mut self.world, &mut self.services);
        }
        self.game.tick(&mut self.world, &mut self.services);

        self.world.draw(self.surface.as_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::game::GameConfig;
    use crate::api::types::{ActorId, Color, GameEvent, Tag};
    use crate::backend::headless::{DrawCmd, Immediate};
    use crate::core::actor::{Actor, ActorCtx};
    use crate::core::body::Body;
    use crate::input::keys::Key;

    const WALKER: Tag = Tag("walker");

    /// Moves right while the Right key is held; emits an event per step.
    struct Walker {
        body: Body,
    }

    impl Actor for Walker {
        fn body(&self) -> &Body {
            &self.body
        }
        fn body_mut(&mut self) -> &mut Body {
            &mut self.body
        }
        fn tag(&self) -> Tag {
            WALKER
        }
        fn act(&mut self, ctx: &mut ActorCtx<'_>) {
            if ctx.input.is_key_pressed(Key::Right) {
                self.body.translate(5.0, 0.0);
                ctx.events.push(GameEvent::new(1));
            }
        }
    }

    #[derive(Default)]
    struct Harness {
        walker: Option<ActorId>,
        steps_seen: u32,
        ticks: u32,
    }

    impl Game for Harness {
        fn config(&self) -> GameConfig {
            GameConfig {
                fps: 60,
                ..GameConfig::default()
            }
        }

        fn init(&mut self, world: &mut World, _services: &mut Services) -> Result<(), EngineError> {
            self.walker = Some(world.add(Box::new(Walker {
                body: Body::new(0.0, 0.0, 10.0, 10.0, Color::WHITE),
            })));
            Ok(())
        }

        fn on_event(&mut self, event: GameEvent, _world: &mut World, _services: &mut Services) {
            if event.kind == 1 {
                self.steps_seen += 1;
            }
        }

        fn tick(&mut self, _world: &mut World, _services: &mut Services) {
            self.ticks += 1;
        }
    }

    fn run_scripted(script: Vec<Vec<PlatformEvent>>) -> (GameLoop<Harness>, RecordingSurface) {
        let recorder = RecordingSurface::new();
        let mut game_loop = GameLoop::new(
            Harness::default(),
            Box::new(recorder.clone()),
            Box::new(ScriptedEvents::new(script)),
            Box::new(NullAudio),
            Box::new(Immediate),
        );
        game_loop.run().unwrap();
        (game_loop, recorder)
    }

    #[test]
    fn quit_event_stops_the_loop() {
        let (game_loop, _) = run_scripted(vec![vec![], vec![PlatformEvent::Quit]]);
        // Frames 1 and 2 ran, nothing after the quit.
        assert_eq!(game_loop.game().ticks, 2);
    }

    #[test]
    fn key_events_reach_the_actors() {
        let right = Key::Right.code();
        let (game_loop, _) = run_scripted(vec![
            vec![PlatformEvent::KeyDown(right)],
            vec![],
            vec![PlatformEvent::KeyUp(right)],
        ]);
        // Held for frames 1-3, released within frame 3 before the update.
        assert_eq!(game_loop.game().steps_seen, 2);
        let id = game_loop.game().walker.unwrap();
        let walker = game_loop.world().get(id).unwrap();
        assert_eq!(walker.body().pos.x, 10.0);
    }

    #[test]
    fn pointer_events_reach_pointer_state() {
        let recorder = RecordingSurface::new();
        let mut game_loop = GameLoop::new(
            Harness::default(),
            Box::new(recorder),
            Box::new(ScriptedEvents::new(vec![vec![
                PlatformEvent::PointerDown {
                    button: 1,
                    x: 12.0,
                    y: 34.0,
                },
            ]])),
            Box::new(NullAudio),
            Box::new(Immediate),
        );
        game_loop.run().unwrap();
        assert!(game_loop.services.pointer.is_button_down(1));
        assert_eq!(game_loop.services.pointer.x(), 12.0);
    }

    #[test]
    fn each_frame_is_clear_draws_present() {
        let (_, recorder) = run_scripted(vec![vec![]]);
        let frame = recorder.last_frame();
        assert!(matches!(frame.first(), Some(DrawCmd::Clear(_))));
        assert!(matches!(frame.last(), Some(DrawCmd::Present)));
        assert!(frame
            .iter()
            .any(|c| matches!(c, DrawCmd::Rect { width, .. } if *width == 10.0)));
    }
}
