//! Combat simulation for HORDE.
//!
//! Owns the hecs world of enemies, XP orbs and loot, drives the wave
//! director, runs the ordered combat systems each frame and produces
//! `FrameSnapshot`s for the host.

pub mod collab;
pub mod director;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use collab::{PlayerLink, StandInPlayer};
pub use director::WaveDirector;
pub use engine::{CombatEngine, SimConfig};
pub use horde_core as core;
