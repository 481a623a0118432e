//! Integration Test Harness
//!
//! Shared pieces for driving the engine end to end:
//! - `AlwaysAttack` / `Scripted` - action sources standing in for the shell
//! - `TestSaves` - SQLite save store on a temporary database file
//! - `hero` / `veteran` - ready-made characters
//!
//! # Example
//!
//! ```rust,ignore
//! use harness::{hero, Scripted};
//!
//! let mut player = hero();
//! let mut source = Scripted::new(["1", "1"]);
//! let summary = fight(&mut player, enemy, &mut source, &mut rolls);
//! ```

#![allow(dead_code)]

mod fixtures;
mod sources;

pub use fixtures::{hero, veteran, TestSaves};
pub use sources::{AlwaysAttack, Scripted};
