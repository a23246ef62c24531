//! Fire-and-forget effect events emitted by the simulation for the
//! particle and audio collaborators.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::FxColor;

/// Named sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// A player shot connecting or popping on the ground.
    Crack,
    /// Exploder detonation or an explosive shell landing.
    Explosion,
}

/// Effects requested during a frame, drained into the frame snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FxEvent {
    /// Particle burst at a world position.
    Particles { at: Vec3, color: FxColor, count: u32 },
    /// One-shot sound.
    Sound { cue: SoundCue },
}

impl FxEvent {
    pub fn burst(at: Vec3, color: FxColor, count: u32) -> Self {
        FxEvent::Particles { at, color, count }
    }
}
