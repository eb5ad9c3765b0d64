pub mod console;
pub mod game_thread;
pub mod round_engine;
