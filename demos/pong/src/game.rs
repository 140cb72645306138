//! Two-paddle pong: W/S drive the left paddle, Up/Down the right one.
//! The ball bounces off the top and bottom walls and off paddles, and a
//! miss past either side scores for the opponent and resets the serve.

use glam::Vec2;

use footlight::{
    Actor, ActorCtx, ActorId, Body, Color, Game, GameConfig, GameEvent, Key, Label, Services, Tag,
    World,
};
use footlight::error::EngineError;

pub const PADDLE: Tag = Tag("paddle");
pub const BALL: Tag = Tag("ball");

const PADDLE_SPEED: f32 = 5.0;
const SERVE_POS: Vec2 = Vec2::new(400.0, 300.0);
const SERVE_VEL: Vec2 = Vec2::new(4.0, 4.0);

/// A ball left the field. Payload `a`: 0.0 for the left edge, 1.0 for the
/// right edge.
const EVENT_MISS: u32 = 1;

/// Which side of the field a paddle defends, deciding its control keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

pub struct Paddle {
    body: Body,
    side: Side,
}

impl Paddle {
    pub fn new(x: f32, y: f32, side: Side) -> Self {
        Self {
            body: Body::new(x, y, 20.0, 100.0, Color::WHITE),
            side,
        }
    }
}

impl Actor for Paddle {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn tag(&self) -> Tag {
        PADDLE
    }

    fn act(&mut self, ctx: &mut ActorCtx<'_>) {
        let (up, down) = match self.side {
            Side::Left => (Key::W, Key::S),
            Side::Right => (Key::Up, Key::Down),
        };
        if ctx.input.is_key_pressed(up) && self.body.pos.y > 0.0 {
            self.body.translate(0.0, -PADDLE_SPEED);
        }
        if ctx.input.is_key_pressed(down) && self.body.bottom() < ctx.world.height() {
            self.body.translate(0.0, PADDLE_SPEED);
        }
    }
}

pub struct Ball {
    body: Body,
    vel: Vec2,
}

impl Ball {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: Body::new(x, y, 15.0, 15.0, Color::WHITE),
            vel: SERVE_VEL,
        }
    }

    /// Re-serve from the center, towards the player who just scored.
    fn reset(&mut self) {
        self.body.set_location(SERVE_POS.x, SERVE_POS.y);
        self.vel.x = -self.vel.x;
    }
}

impl Actor for Ball {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn tag(&self) -> Tag {
        BALL
    }

    fn act(&mut self, ctx: &mut ActorCtx<'_>) {
        self.body.translate(self.vel.x, self.vel.y);
        if self.body.pos.y <= 0.0 || self.body.bottom() >= ctx.world.height() {
            self.vel.y = -self.vel.y;
        }
        if ctx.world.is_touching(&self.body, PADDLE) {
            self.vel.x = -self.vel.x;
        }
        if self.body.pos.x <= 0.0 {
            ctx.events.push(GameEvent::with(EVENT_MISS, 0.0, 0.0));
        } else if self.body.right() >= ctx.world.width() {
            ctx.events.push(GameEvent::with(EVENT_MISS, 1.0, 0.0));
        }
    }
}

#[derive(Default)]
pub struct Pong {
    score_left: u32,
    score_right: u32,
    ball: Option<ActorId>,
    score_label: Option<ActorId>,
}

impl Pong {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> (u32, u32) {
        (self.score_left, self.score_right)
    }
}

impl Game for Pong {
    fn config(&self) -> GameConfig {
        GameConfig {
            title: "pong".to_string(),
            ..GameConfig::default()
        }
    }

    fn init(&mut self, world: &mut World, _services: &mut Services) -> Result<(), EngineError> {
        self.score_label = Some(world.add(Box::new(Label::new(
            350.0,
            20.0,
            "0 - 0",
            30,
            Color::WHITE,
            Color::BLACK,
        ))));
        world.add(Box::new(Paddle::new(50.0, 250.0, Side::Left)));
        world.add(Box::new(Paddle::new(730.0, 250.0, Side::Right)));
        self.ball = Some(world.add(Box::new(Ball::new(SERVE_POS.x, SERVE_POS.y))));
        Ok(())
    }

    fn on_event(&mut self, event: GameEvent, world: &mut World, _services: &mut Services) {
        if event.kind != EVENT_MISS {
            return;
        }
        if event.a == 0.0 {
            self.score_right += 1;
        } else {
            self.score_left += 1;
        }
        if let Some(label) = self.score_label.and_then(|id| world.get_as_mut::<Label>(id)) {
            label.set_text(format!("{} - {}", self.score_left, self.score_right));
        }
        if let Some(ball) = self.ball.and_then(|id| world.get_as_mut::<Ball>(id)) {
            ball.reset();
        }
    }
}
