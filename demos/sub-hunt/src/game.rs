use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use footlight::error::EngineError;
use footlight::{ActorId, Color, Game, GameConfig, GameEvent, Key, Label, Services, World};

use crate::actors::{Ship, Submarine, EVENT_SUB_DOWN};

/// Frames between accepted Space presses: holding the key drops a charge
/// once a second at 30 fps.
const DROP_COOLDOWN: u64 = 30;
/// World frames between submarine spawns.
const SPAWN_INTERVAL: u32 = 50;
const POINTS_PER_SUB: u32 = 10;
const SEA_COLOR: Color = Color::rgb(0, 0, 50);

pub struct SubHunt {
    score: u32,
    spawn_timer: u32,
    rng: StdRng,
    score_label: Option<ActorId>,
}

impl SubHunt {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Deterministic variant for tests and reproducible sessions.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            score: 0,
            spawn_timer: 0,
            rng: StdRng::seed_from_u64(seed),
            score_label: None,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

impl Default for SubHunt {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SubHunt {
    fn config(&self) -> GameConfig {
        GameConfig {
            title: "sub hunt".to_string(),
            background: SEA_COLOR,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, world: &mut World, services: &mut Services) -> Result<(), EngineError> {
        services
            .audio
            .load("drop_charge", Path::new("assets/drop_charge.wav"))?;
        services
            .audio
            .load("explosion", Path::new("assets/explosion.wav"))?;
        services.input.set_cooldown(Key::Space, DROP_COOLDOWN);

        self.score_label = Some(world.add(Box::new(Label::new(
            20.0,
            20.0,
            "Score: 0",
            30,
            Color::WHITE,
            SEA_COLOR,
        ))));
        world.add(Box::new(Ship::new(375.0, 50.0)));
        Ok(())
    }

    /// Submarines surface on a fixed timer, from a random edge, at a
    /// random depth, swimming in a random direction.
    fn tick(&mut self, world: &mut World, _services: &mut Services) {
        self.spawn_timer += 1;
        if self.spawn_timer > SPAWN_INTERVAL {
            self.spawn_timer = 0;
            let x = if self.rng.gen_bool(0.5) {
                -50.0
            } else {
                world.width() + 50.0
            };
            let y = self.rng.gen_range(100.0..=400.0);
            let speed = if self.rng.gen_bool(0.5) { 2.0 } else { -2.0 };
            world.add(Box::new(Submarine::new(x, y, speed)));
        }
    }

    fn on_event(&mut self, event: GameEvent, world: &mut World, _services: &mut Services) {
        if event.kind == EVENT_SUB_DOWN {
            self.score += POINTS_PER_SUB;
            if let Some(label) = self.score_label.and_then(|id| world.get_as_mut::<Label>(id)) {
                label.set_text(format!("Score: {}", self.score));
            }
        }
    }
}
