// Outwit rules engine, heuristic bot, and game tooling

pub mod board;
pub mod bot;
pub mod config;
pub mod game;
pub mod recorder;
pub mod replay;
pub mod types;
