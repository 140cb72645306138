use std::path::Path;

use footlight::error::EngineError;
use footlight::{ActorId, Color, Game, GameConfig, GameEvent, Label, Services, World};

use crate::actors::{Invader, Player, EVENT_INVADER_DOWN, EVENT_PLAYER_HIT};

const INVADER_ROWS: u32 = 3;
const INVADER_COLS: u32 = 8;
const POINTS_PER_INVADER: u32 = 10;

#[derive(Default)]
pub struct SpaceInvaders {
    score: u32,
    game_over: bool,
    score_label: Option<ActorId>,
}

impl SpaceInvaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    fn set_label(&self, world: &mut World, text: String) {
        if let Some(label) = self.score_label.and_then(|id| world.get_as_mut::<Label>(id)) {
            label.set_text(text);
        }
    }
}

impl Game for SpaceInvaders {
    fn config(&self) -> GameConfig {
        GameConfig {
            title: "space invaders".to_string(),
            ..GameConfig::default()
        }
    }

    fn init(&mut self, world: &mut World, services: &mut Services) -> Result<(), EngineError> {
        services.audio.load("shoot", Path::new("assets/shoot.wav"))?;
        services
            .audio
            .load("explosion", Path::new("assets/explosion.wav"))?;

        self.score_label = Some(world.add(Box::new(Label::new(
            20.0,
            20.0,
            "Score: 0",
            30,
            Color::WHITE,
            Color::BLACK,
        ))));
        world.add(Box::new(Player::new(375.0, 550.0)));
        for row in 0..INVADER_ROWS {
            for col in 0..INVADER_COLS {
                world.add(Box::new(Invader::new(
                    100.0 + col as f32 * 60.0,
                    50.0 + row as f32 * 50.0,
                    u64::from(row * INVADER_COLS + col),
                )));
            }
        }
        Ok(())
    }

    fn on_event(&mut self, event: GameEvent, world: &mut World, _services: &mut Services) {
        match event.kind {
            EVENT_INVADER_DOWN => {
                self.score += POINTS_PER_INVADER;
                self.set_label(world, format!("Score: {}", self.score));
            }
            EVENT_PLAYER_HIT => {
                self.game_over = true;
                self.set_label(world, "GAME OVER".to_string());
            }
            _ => {}
        }
    }
}
