//! Scenario tests
//!
//! Play sessions covering:
//! - Combat: scripted encounters, spells, defending, bad input
//! - Dungeon: full runs, rewards and defeat
//! - Persistence: saves on a real SQLite file
//! - Session: start, town, explore, save and resume

pub mod combat;
pub mod dungeon;
pub mod persistence;
pub mod session;
