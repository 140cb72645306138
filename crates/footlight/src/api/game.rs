use crate::api::types::{Color, GameEvent};
use crate::audio::AudioDevice;
use crate::core::world::World;
use crate::error::EngineError;
use crate::input::pointer::PointerState;
use crate::input::state::InputState;

/// Configuration for the engine, provided by the game. Called once before
/// init.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Window/session title.
    pub title: String,
    /// World width in pixels.
    pub width: f32,
    /// World height in pixels.
    pub height: f32,
    /// Background clear color.
    pub background: Color,
    /// Fixed target frame rate.
    pub fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "footlight game".to_string(),
            width: 800.0,
            height: 600.0,
            background: Color::BLACK,
            fps: 30,
        }
    }
}

/// Engine-owned state handed to games and actors every frame: input,
/// pointer, the audio collaborator, and the frame's pending game events.
pub struct Services {
    pub input: InputState,
    pub pointer: PointerState,
    pub audio: Box<dyn AudioDevice>,
    pub events: Vec<GameEvent>,
}

impl Services {
    pub fn new(audio: Box<dyn AudioDevice>) -> Self {
        Self {
            input: InputState::new(),
            pointer: PointerState::new(),
            audio,
            events: Vec::new(),
        }
    }
}

/// The core contract every game fulfills. World-level logic (scoring,
/// timed spawning, round resets) lives here; per-entity behavior lives in
/// the actors the game adds to its world.
pub trait Game {
    /// Return engine configuration.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Populate the world: spawn actors, load sounds, set key cooldowns.
    /// A failure here terminates the run before the first frame.
    fn init(&mut self, world: &mut World, services: &mut Services) -> Result<(), EngineError>;

    /// Per-frame world-level logic, after the update pass and event
    /// routing, before drawing.
    fn tick(&mut self, _world: &mut World, _services: &mut Services) {}

    /// Handle one event emitted by actor code during the update pass.
    fn on_event(&mut self, _event: GameEvent, _world: &mut World, _services: &mut Services) {}
}
