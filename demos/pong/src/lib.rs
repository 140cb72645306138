pub mod game;

pub use game::{Ball, Paddle, Pong, Side};
