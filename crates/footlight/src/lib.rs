//! footlight is a minimal 2D actor/world game engine.
//!
//! A fixed-timestep loop advances a collection of movable, collidable
//! rectangular actors living in a rectangular world, renders them through
//! a narrow [`Surface`] abstraction, and exposes per-frame input queries
//! (held, edge-triggered, cooldown-gated). Rendering, audio and the event
//! source are collaborators behind traits; the engine itself is headless.
//!
//! A game implements [`Game`], spawns [`Actor`]s into the [`World`] in
//! `init`, and hands everything to a [`GameLoop`].

pub mod actors;
pub mod api;
pub mod audio;
pub mod backend;
pub mod core;
pub mod error;
pub mod input;
pub mod render;
pub mod runner;

// Re-export key types at crate root for convenience
pub use actors::label::Label;
pub use api::game::{Game, GameConfig, Services};
pub use api::types::{ActorId, Color, GameEvent, Tag};
pub use audio::AudioDevice;
pub use backend::headless::{DrawCmd, Immediate, NullAudio, RecordingSurface, ScriptedEvents};
pub use core::actor::{Actor, ActorCtx};
pub use core::body::Body;
pub use core::time::{FrameClock, FramePacer};
pub use core::world::World;
pub use error::EngineError;
pub use input::keys::Key;
pub use input::pointer::PointerState;
pub use input::queue::{EventQueue, EventSource, PlatformEvent};
pub use input::state::InputState;
pub use render::surface::Surface;
pub use runner::GameLoop;
