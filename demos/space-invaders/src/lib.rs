pub mod actors;
pub mod game;

pub use game::SpaceInvaders;
