use std::any::Any;

use crate::api::types::{ActorId, GameEvent, Tag};
use crate::audio::AudioDevice;
use crate::core::body::Body;
use crate::core::world::World;
use crate::input::pointer::PointerState;
use crate::input::state::InputState;
use crate::render::surface::Surface;

/// Everything an actor can reach during its per-frame [`Actor::act`] call.
///
/// While an actor acts it is detached from its world slot, so `world` is
/// freely usable: it can spawn and remove other actors and run collision
/// queries without aliasing the actor itself.
pub struct ActorCtx<'a> {
    pub world: &'a mut World,
    pub input: &'a mut InputState,
    pub pointer: &'a PointerState,
    pub audio: &'a mut dyn AudioDevice,
    /// Events routed to [`Game::on_event`](crate::Game::on_event) after the
    /// update pass completes.
    pub events: &'a mut Vec<GameEvent>,
    /// The id of the acting actor.
    pub me: ActorId,
}

/// A positioned, sized, drawable entity with per-frame behavior.
///
/// Implementations supply the geometry accessors, a [`Tag`] for collision
/// filtering, and `act`, which encodes all gameplay behavior. Drawing
/// defaults to a solid rectangle; the world lifecycle hooks default to
/// doing nothing.
pub trait Actor: Any {
    /// The actor's geometry.
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// The type tag collision queries match against.
    fn tag(&self) -> Tag;

    /// Per-frame behavior, invoked once per world update pass.
    fn act(&mut self, ctx: &mut ActorCtx<'_>);

    /// Render this actor. Default: a filled rectangle over the body's box.
    fn draw(&self, surface: &mut dyn Surface) {
        let b = self.body();
        surface.fill_rect(b.pos.x, b.pos.y, b.size.x, b.size.y, b.color);
    }

    /// Called right after this actor is inserted into a world.
    fn entered_world(&mut self, _world: &mut World) {}

    /// Called when removal is requested, while the actor is still logically
    /// in the world. Fires exactly once per removal.
    fn left_world(&mut self) {}
}

impl dyn Actor {
    /// Whether the concrete type of this actor is `T`.
    pub fn is<T: Actor>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Borrow this actor as its concrete type.
    pub fn downcast_ref<T: Actor>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }

    /// Mutably borrow this actor as its concrete type.
    pub fn downcast_mut<T: Actor>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut::<T>()
    }
}
