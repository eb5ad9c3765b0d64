pub mod client;
pub mod dice;
pub mod strategy;
