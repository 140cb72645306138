pub mod keys;
pub mod pointer;
pub mod queue;
pub mod state;
