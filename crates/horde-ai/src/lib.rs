//! Enemy behavior for HORDE.
//!
//! Implements the per-archetype state machines, the multi-phase boss, and the
//! per-tier stat profiles. No world dependency: operates on plain data and
//! an injected RNG.

pub mod boss;
pub mod charger;
pub mod enemy;
pub mod exploder;
pub mod jumper;
pub mod profiles;
pub mod rat;
pub mod shooter;
pub mod walker;

pub use enemy::{Behavior, Body, Enemy, EnemySignal};

#[cfg(test)]
mod tests;
