//! Core types and definitions for the HORDE combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! world entities, commands, frame snapshots, effect events, tuning
//! constants and the runtime tuning config. It contains no simulation logic.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
