//! Commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible host actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Complete the current wave immediately, treating undelivered spawns as delivered.
    ForceSkipWave,
    /// Pause the simulation.
    Pause,
    /// Resume a paused simulation.
    Resume,
    /// Set time scale (1.0 = normal, 0.0 = frozen).
    SetTimeScale { scale: f32 },
    /// Clear the field and start over from wave 0.
    Restart,
}
