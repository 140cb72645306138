//! The surface ship, its depth charges, and the submarines they hunt.

use footlight::{Actor, ActorCtx, Body, Color, GameEvent, Key, Tag};

pub const SHIP: Tag = Tag("ship");
pub const DEPTH_CHARGE: Tag = Tag("depth-charge");
pub const SUBMARINE: Tag = Tag("submarine");

/// A submarine was destroyed by a depth charge.
pub const EVENT_SUB_DOWN: u32 = 1;

const SHIP_SPEED: f32 = 5.0;
const CHARGE_SPEED: f32 = 5.0;

/// The player's ship, sailing along the top of the world. Space drops a
/// depth charge; the drop rate is limited by the cooldown the game
/// installs on the key, so holding Space fires at a fixed cadence.
pub struct Ship {
    body: Body,
}

impl Ship {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: Body::new(x, y, 60.0, 20.0, Color::GREEN),
        }
    }
}

impl Actor for Ship {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn tag(&self) -> Tag {
        SHIP
    }

    fn act(&mut self, ctx: &mut ActorCtx<'_>) {
        if ctx.input.is_key_pressed(Key::Left) && self.body.pos.x > 0.0 {
            self.body.translate(-SHIP_SPEED, 0.0);
        }
        if ctx.input.is_key_pressed(Key::Right) && self.body.right() < ctx.world.width() {
            self.body.translate(SHIP_SPEED, 0.0);
        }
        if ctx.input.is_key_pressed(Key::Space) {
            ctx.world.add(Box::new(DepthCharge::new(
                self.body.pos.x + self.body.size.x / 2.0,
                self.body.pos.y + 10.0,
            )));
            ctx.audio.play("drop_charge", false);
        }
    }
}

/// A depth charge sinking towards the bottom.
pub struct DepthCharge {
    body: Body,
}

impl DepthCharge {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: Body::new(x, y, 10.0, 20.0, Color::YELLOW),
        }
    }
}

impl Actor for DepthCharge {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn tag(&self) -> Tag {
        DEPTH_CHARGE
    }

    fn act(&mut self, ctx: &mut ActorCtx<'_>) {
        self.body.translate(0.0, CHARGE_SPEED);
        if self.body.pos.y > ctx.world.height() {
            ctx.world.remove(ctx.me);
        } else if let Some(submarine) = ctx.world.first_intersecting(&self.body, SUBMARINE) {
            ctx.world.remove(ctx.me);
            ctx.world.remove(submarine);
            ctx.audio.play("explosion", false);
            ctx.events.push(GameEvent::new(EVENT_SUB_DOWN));
        }
    }
}

/// A submarine crossing the world at a fixed depth and speed. Spawned by
/// the game just outside either edge; despawns once fully off-screen.
pub struct Submarine {
    body: Body,
    speed: f32,
}

impl Submarine {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self {
            body: Body::new(x, y, 50.0, 20.0, Color::RED),
            speed,
        }
    }
}

impl Actor for Submarine {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn tag(&self) -> Tag {
        SUBMARINE
    }

    fn act(&mut self, ctx: &mut ActorCtx<'_>) {
        self.body.translate(self.speed, 0.0);
        if self.body.pos.x < -self.body.size.x || self.body.pos.x > ctx.world.width() {
            ctx.world.remove(ctx.me);
        }
    }
}
