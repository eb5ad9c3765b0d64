pub mod game;
pub mod messages;
pub mod stats;
