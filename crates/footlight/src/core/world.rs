//! The actor container and per-frame scheduler.
//!
//! Insertion order is preserved and doubles as both the update order and
//! the draw order (later-added actors draw on top). Removal is deferred:
//! requests are collected in a pending set and the live sequence is only
//! excised after the update pass finishes iterating, so an actor's `act`
//! never observes another actor vanishing mid-pass.

use log::trace;

use crate::api::game::Services;
use crate::api::types::{ActorId, Color, Tag};
use crate::core::actor::{Actor, ActorCtx};
use crate::core::body::Body;
use crate::render::surface::Surface;

struct Slot {
    id: ActorId,
    /// `None` only while this actor is detached for its own `act` or
    /// lifecycle hook call.
    actor: Option<Box<dyn Actor>>,
}

/// A rectangular playing field owning an ordered collection of actors.
pub struct World {
    width: f32,
    height: f32,
    background: Color,
    slots: Vec<Slot>,
    pending: Vec<ActorId>,
    /// Set when removal targets the currently detached actor; its
    /// `left_world` hook runs as soon as it is reattached.
    owed_hook: Option<ActorId>,
    next_id: u32,
}

impl World {
    /// Create an empty world. Panics if the dimensions are not positive:
    /// a zero-sized world is a construction bug, not a recoverable state.
    pub fn new(width: f32, height: f32, background: Color) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "world dimensions must be positive"
        );
        Self {
            width,
            height,
            background,
            slots: Vec::new(),
            pending: Vec::new(),
            owed_hook: None,
            next_id: 0,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Number of actors in the live sequence.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Insert an actor at the end of the live sequence and invoke its
    /// `entered_world` hook. Returns the id the world assigned to it.
    ///
    /// An actor added during an update pass will not act until the next
    /// pass, but is drawn from this frame on.
    pub fn add(&mut self, mut actor: Box<dyn Actor>) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot { id, actor: None });
        let index = self.slots.len() - 1;

        actor.entered_world(self);
        if self.owed_hook == Some(id) {
            self.owed_hook = None;
            actor.left_world();
        }
        self.slots[index].actor = Some(actor);
        trace!("actor {id:?} entered world");
        id
    }

    /// Request removal of an actor. The actor stays in the live sequence
    /// until the end of the current update pass; its `left_world` hook
    /// fires now, exactly once. Unknown ids and repeated requests are
    /// no-ops.
    pub fn remove(&mut self, id: ActorId) {
        if self.pending.contains(&id) {
            return;
        }
        let Some(slot) = self.slots.iter_mut().find(|s| s.id == id) else {
            return;
        };
        self.pending.push(id);
        match slot.actor.as_mut() {
            Some(actor) => actor.left_world(),
            // The target is detached (it is the acting actor removing
            // itself); the hook runs when it is reattached.
            None => self.owed_hook = Some(id),
        }
        trace!("actor {id:?} pending removal");
    }

    /// The single authoritative per-frame transition.
    ///
    /// Phase 1: `act` every actor present at the start of the call, in
    /// sequence order. Phase 2: excise everything marked pending-removal.
    /// Actors added mid-pass act from the next call on; actors removed
    /// mid-pass still finish this pass.
    pub fn update(&mut self, services: &mut Services) {
        let live = self.slots.len();
        for index in 0..live {
            let Some(mut actor) = self.slots[index].actor.take() else {
                continue;
            };
            let id = self.slots[index].id;
            {
                let mut ctx = ActorCtx {
                    world: self,
                    input: &mut services.input,
                    pointer: &services.pointer,
                    audio: services.audio.as_mut(),
                    events: &mut services.events,
                    me: id,
                };
                actor.act(&mut ctx);
            }
            if self.owed_hook == Some(id) {
                self.owed_hook = None;
                actor.left_world();
            }
            self.slots[index].actor = Some(actor);
        }

        if !self.pending.is_empty() {
            let pending = std::mem::take(&mut self.pending);
            self.slots.retain(|slot| !pending.contains(&slot.id));
        }
    }

    /// Clear to the background color, draw every live actor in sequence
    /// order, present the frame.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear(self.background);
        for slot in &self.slots {
            if let Some(actor) = &slot.actor {
                actor.draw(surface);
            }
        }
        surface.present();
    }

    /// Whether any live actor with the given tag strictly overlaps `probe`.
    ///
    /// Queries are meant to be called from `act` with the acting actor's
    /// own body: the actor is detached then, so it never matches itself.
    pub fn is_touching(&self, probe: &Body, tag: Tag) -> bool {
        self.first_intersecting(probe, tag).is_some()
    }

    /// The first actor in world iteration order with the given tag whose
    /// box strictly overlaps `probe`.
    pub fn first_intersecting(&self, probe: &Body, tag: Tag) -> Option<ActorId> {
        self.slots
            .iter()
            .filter_map(|slot| slot.actor.as_deref().map(|a| (slot.id, a)))
            .find(|(_, actor)| actor.tag() == tag && probe.overlaps(actor.body()))
            .map(|(id, _)| id)
    }

    /// All ids of live actors carrying the given tag, in sequence order.
    pub fn ids_with_tag(&self, tag: Tag) -> Vec<ActorId> {
        self.slots
            .iter()
            .filter(|slot| {
                slot.actor
                    .as_deref()
                    .map(|a| a.tag() == tag)
                    .unwrap_or(false)
            })
            .map(|slot| slot.id)
            .collect()
    }

    pub fn get(&self, id: ActorId) -> Option<&dyn Actor> {
        self.slots
            .iter()
            .find(|slot| slot.id == id)
            .and_then(|slot| slot.actor.as_deref())
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut dyn Actor> {
        self.slots
            .iter_mut()
            .find(|slot| slot.id == id)
            .and_then(|slot| slot.actor.as_deref_mut())
    }

    /// Borrow an actor as its concrete type.
    pub fn get_as<T: Actor>(&self, id: ActorId) -> Option<&T> {
        self.get(id)?.downcast_ref::<T>()
    }

    /// Mutably borrow an actor as its concrete type.
    pub fn get_as_mut<T: Actor>(&mut self, id: ActorId) -> Option<&mut T> {
        self.get_mut(id)?.downcast_mut::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::headless::NullAudio;

    const PROBE: Tag = Tag("probe");
    const BLOCK: Tag = Tag("block");

    /// Test actor with scriptable behavior driven through plain fields.
    struct Block {
        body: Body,
        tag: Tag,
        acted: u32,
        entered: u32,
        left: u32,
        /// Remove self during act.
        suicide: bool,
        /// Spawn one new block during act.
        spawn: bool,
    }

    impl Block {
        fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
            Self {
                body: Body::new(x, y, w, h, Color::WHITE),
                tag: BLOCK,
                acted: 0,
                entered: 0,
                left: 0,
                suicide: false,
                spawn: false,
            }
        }
    }

    impl Actor for Block {
        fn body(&self) -> &Body {
            &self.body
        }
        fn body_mut(&mut self) -> &mut Body {
            &mut self.body
        }
        fn tag(&self) -> Tag {
            self.tag
        }
        fn act(&mut self, ctx: &mut ActorCtx<'_>) {
            self.acted += 1;
            if self.suicide {
                ctx.world.remove(ctx.me);
                ctx.world.remove(ctx.me); // repeat request must be a no-op
            }
            if self.spawn {
                self.spawn = false;
                ctx.world.add(Box::new(Block::new(0.0, 0.0, 1.0, 1.0)));
            }
        }
        fn entered_world(&mut self, _world: &mut World) {
            self.entered += 1;
        }
        fn left_world(&mut self) {
            self.left += 1;
        }
    }

    fn services() -> Services {
        Services::new(Box::new(NullAudio))
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn zero_sized_world_is_a_bug() {
        let _ = World::new(0.0, 600.0, Color::BLACK);
    }

    #[test]
    fn add_assigns_ids_and_fires_hook() {
        let mut world = World::new(800.0, 600.0, Color::BLACK);
        let a = world.add(Box::new(Block::new(0.0, 0.0, 10.0, 10.0)));
        let b = world.add(Box::new(Block::new(20.0, 0.0, 10.0, 10.0)));
        assert_ne!(a, b);
        assert_eq!(world.len(), 2);
        assert_eq!(world.get_as::<Block>(a).unwrap().entered, 1);
    }

    #[test]
    fn update_acts_in_insertion_order_and_preserves_it() {
        let mut world = World::new(800.0, 600.0, Color::BLACK);
        let ids: Vec<ActorId> = (0..4)
            .map(|i| world.add(Box::new(Block::new(i as f32 * 20.0, 0.0, 10.0, 10.0))))
            .collect();
        world.update(&mut services());
        for &id in &ids {
            assert_eq!(world.get_as::<Block>(id).unwrap().acted, 1);
        }
        assert_eq!(world.ids_with_tag(BLOCK), ids);
    }

    #[test]
    fn actor_added_during_update_acts_next_frame() {
        let mut world = World::new(800.0, 600.0, Color::BLACK);
        let mut spawner = Block::new(0.0, 0.0, 10.0, 10.0);
        spawner.spawn = true;
        world.add(Box::new(spawner));

        world.update(&mut services());
        assert_eq!(world.len(), 2);
        let newcomer = world.ids_with_tag(BLOCK)[1];
        assert_eq!(world.get_as::<Block>(newcomer).unwrap().acted, 0);

        world.update(&mut services());
        assert_eq!(world.get_as::<Block>(newcomer).unwrap().acted, 1);
    }

    #[test]
    fn removal_is_deferred_to_end_of_pass() {
        let mut world = World::new(800.0, 600.0, Color::BLACK);
        let mut doomed = Block::new(0.0, 0.0, 10.0, 10.0);
        doomed.suicide = true;
        let doomed = world.add(Box::new(doomed));
        let bystander = world.add(Box::new(Block::new(50.0, 0.0, 10.0, 10.0)));

        world.update(&mut services());
        // Excised after the pass; the bystander still acted normally.
        assert!(world.get(doomed).is_none());
        assert_eq!(world.len(), 1);
        assert_eq!(world.get_as::<Block>(bystander).unwrap().acted, 1);
    }

    #[test]
    fn double_remove_decrements_once_and_hook_fires_once() {
        let mut world = World::new(800.0, 600.0, Color::BLACK);
        let id = world.add(Box::new(Block::new(0.0, 0.0, 10.0, 10.0)));
        let keeper = world.add(Box::new(Block::new(50.0, 0.0, 10.0, 10.0)));

        world.remove(id);
        world.remove(id);
        assert_eq!(world.get_as::<Block>(id).unwrap().left, 1);
        assert_eq!(world.len(), 2); // still live until the pass ends

        world.update(&mut services());
        assert_eq!(world.len(), 1);
        assert!(world.get(keeper).is_some());
    }

    #[test]
    fn self_removal_fires_hook_exactly_once() {
        let mut world = World::new(800.0, 600.0, Color::BLACK);
        let mut doomed = Block::new(0.0, 0.0, 10.0, 10.0);
        doomed.suicide = true;
        world.add(Box::new(doomed));
        // act() issues two remove(me) calls; the hook is owed and must run
        // exactly once, after act returns.
        world.update(&mut services());
        assert_eq!(world.len(), 0);
    }

    #[test]
    fn removing_unknown_id_is_a_noop() {
        let mut world = World::new(800.0, 600.0, Color::BLACK);
        world.remove(ActorId(42));
        assert!(world.is_empty());
    }

    #[test]
    fn touch_scenario_800_by_600() {
        let mut world = World::new(800.0, 600.0, Color::BLACK);
        let a = Body::new(0.0, 0.0, 50.0, 50.0, Color::WHITE);
        let b = world.add(Box::new(Block::new(40.0, 40.0, 50.0, 50.0)));

        assert!(world.is_touching(&a, BLOCK));
        assert_eq!(world.first_intersecting(&a, BLOCK), Some(b));
        // Wrong tag never matches.
        assert!(!world.is_touching(&a, PROBE));

        world.get_mut(b).unwrap().body_mut().set_location(51.0, 0.0);
        assert!(!world.is_touching(&a, BLOCK));
    }

    #[test]
    fn first_intersecting_respects_iteration_order() {
        let mut world = World::new(800.0, 600.0, Color::BLACK);
        let first = world.add(Box::new(Block::new(10.0, 10.0, 50.0, 50.0)));
        let _second = world.add(Box::new(Block::new(20.0, 20.0, 50.0, 50.0)));
        let probe = Body::new(0.0, 0.0, 100.0, 100.0, Color::WHITE);
        assert_eq!(world.first_intersecting(&probe, BLOCK), Some(first));
    }
}
