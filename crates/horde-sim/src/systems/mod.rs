//! Systems that operate on the combat world each tick.
//!
//! Systems are plain functions over `&mut World` and the engine-owned buffers
//! they are handed. They keep no state of their own; every persistent value
//! lives in components or in the engine.

pub mod cleanup;
pub mod contact;
pub mod detonation;
pub mod enemy_fire;
pub mod enemy_tick;
pub mod loot;
pub mod orbs;
pub mod player_fire;
pub mod shots;
pub mod snapshot;
pub mod waves;
