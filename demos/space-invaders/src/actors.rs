//! The four actor types of the invader shooter.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use footlight::{Actor, ActorCtx, Body, Color, GameEvent, Key, Tag};

pub const PLAYER: Tag = Tag("player");
pub const BULLET: Tag = Tag("bullet");
pub const INVADER: Tag = Tag("invader");
pub const ENEMY_BULLET: Tag = Tag("enemy-bullet");

/// An invader was shot down.
pub const EVENT_INVADER_DOWN: u32 = 1;
/// The player was hit by an enemy bullet.
pub const EVENT_PLAYER_HIT: u32 = 2;

const PLAYER_SPEED: f32 = 5.0;
const BULLET_SPEED: f32 = 5.0;
/// Per-frame chance that an invader drops a bullet.
const FIRE_CHANCE: f64 = 0.001;

/// The player ship. Left/Right to move, Space to fire (edge-triggered:
/// one bullet per key press no matter how long the key is held).
pub struct Player {
    body: Body,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: Body::new(x, y, 50.0, 20.0, Color::GREEN),
        }
    }
}

impl Actor for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn tag(&self) -> Tag {
        PLAYER
    }

    fn act(&mut self, ctx: &mut ActorCtx<'_>) {
        if ctx.input.is_key_pressed(Key::Left) && self.body.pos.x > 0.0 {
            self.body.translate(-PLAYER_SPEED, 0.0);
        }
        if ctx.input.is_key_pressed(Key::Right) && self.body.right() < ctx.world.width() {
            self.body.translate(PLAYER_SPEED, 0.0);
        }
        if ctx.input.was_key_just_pressed(Key::Space) {
            let muzzle_x = self.body.pos.x + self.body.size.x / 2.0;
            ctx.world.add(Box::new(Bullet::new(muzzle_x, self.body.pos.y)));
            ctx.audio.play("shoot", false);
        }
    }
}

/// A player bullet climbing the screen.
pub struct Bullet {
    body: Body,
}

impl Bullet {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: Body::new(x, y, 5.0, 15.0, Color::YELLOW),
        }
    }
}

impl Actor for Bullet {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn tag(&self) -> Tag {
        BULLET
    }

    fn act(&mut self, ctx: &mut ActorCtx<'_>) {
        self.body.translate(0.0, -BULLET_SPEED);
        if self.body.pos.y < 0.0 {
            ctx.world.remove(ctx.me);
        } else if let Some(invader) = ctx.world.first_intersecting(&self.body, INVADER) {
            ctx.world.remove(ctx.me);
            ctx.world.remove(invader);
            ctx.audio.play("explosion", false);
            ctx.events.push(GameEvent::new(EVENT_INVADER_DOWN));
        }
    }
}

/// A grid invader. It never moves; it occasionally drops a bullet.
pub struct Invader {
    body: Body,
    rng: StdRng,
}

impl Invader {
    pub fn new(x: f32, y: f32, seed: u64) -> Self {
        Self {
            body: Body::new(x, y, 40.0, 30.0, Color::RED),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Actor for Invader {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn tag(&self) -> Tag {
        INVADER
    }

    fn act(&mut self, ctx: &mut ActorCtx<'_>) {
        if self.rng.gen::<f64>() < FIRE_CHANCE {
            ctx.world.add(Box::new(EnemyBullet::new(
                self.body.pos.x + self.body.size.x / 2.0,
                self.body.bottom(),
            )));
        }
    }
}

/// An invader bullet falling towards the player.
pub struct EnemyBullet {
    body: Body,
}

impl EnemyBullet {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: Body::new(x, y, 5.0, 15.0, Color::WHITE),
        }
    }
}

impl Actor for EnemyBullet {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn tag(&self) -> Tag {
        ENEMY_BULLET
    }

    fn act(&mut self, ctx: &mut ActorCtx<'_>) {
        self.body.translate(0.0, BULLET_SPEED);
        if self.body.pos.y > ctx.world.height() {
            ctx.world.remove(ctx.me);
        } else if ctx.world.is_touching(&self.body, PLAYER) {
            ctx.world.remove(ctx.me);
            ctx.audio.play("explosion", false);
            ctx.events.push(GameEvent::new(EVENT_PLAYER_HIT));
        }
    }
}
