//! isekai - turn-based RPG engine
//!
//! Combat, progression, dungeon runs and character saves for a single-player
//! fantasy adventure. The engine holds all rules; binaries only render.

pub mod actors;
pub mod combat;
pub mod config;
pub mod db;
pub mod dungeon;
pub mod error;
pub mod persistence;
pub mod progression;
pub mod session;
pub mod town;

pub use config::Config;
pub use error::{GameError, GameResult};
pub use session::{Origin, Session};
