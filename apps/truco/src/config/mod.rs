//! Configuration loading.

pub mod game;

pub use game::GameConfig;
