pub mod actor;
pub mod body;
pub mod time;
pub mod world;
