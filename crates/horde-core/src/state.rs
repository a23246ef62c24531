//! Frame snapshot: the complete visible state handed to rendering and HUD
//! after each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::FxEvent;

/// Complete visible state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub elapsed_secs: f32,
    pub phase: SessionPhase,
    pub hud: WaveHud,
    pub enemies: Vec<EnemyView>,
    pub enemy_projectiles: Vec<ProjectileView>,
    pub player_projectiles: Vec<ProjectileView>,
    pub orbs: Vec<OrbView>,
    pub loot: Vec<LootView>,
    pub fx: Vec<FxEvent>,
}

/// Wave director read-out for the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveHud {
    pub wave_number: u32,
    pub state: WaveState,
    pub wave_type: WaveType,
    /// Seconds left on the waiting/completed countdown.
    pub countdown: f32,
    /// Spawns not yet delivered this wave.
    pub remaining: u32,
    pub bonus_xp: u32,
}

/// Draw inputs for one enemy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub tier: u8,
    pub position: Vec3,
    pub health: f32,
    pub max_health: f32,
    pub radius: f32,
    /// Hit flash is active.
    pub flashing: bool,
    /// Charger wind-up or dash; boss charge mode.
    pub charging: bool,
    /// Exploder fuse armed.
    pub armed: bool,
    pub boss_phase: Option<BossPhase>,
    pub glow: f32,
    pub loot: LootKind,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec3,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OrbView {
    pub position: Vec3,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LootView {
    pub kind: LootKind,
    pub weapon_tier: u8,
    pub position: Vec3,
    pub life: f32,
}
