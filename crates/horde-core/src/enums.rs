//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The closed set of enemy archetypes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Basic seeker. Splits into smaller walkers on death.
    #[default]
    Walker,
    /// Ranged kiter firing straight bullets.
    Shooter,
    /// Telegraphs, then dashes along a locked direction.
    Charger,
    /// Rushes the player and detonates after a fuse.
    Exploder,
    /// Hopping loot carrier.
    Jumper,
    /// Small ground critter with random hops.
    Rat,
    /// Multi-phase wave boss.
    Boss,
}

/// Wave director lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveState {
    /// Counting down to the next wave.
    #[default]
    Waiting,
    /// Delivering spawns at the wave's spawn interval.
    Spawning,
    /// All spawns delivered, waiting for the field to clear.
    Fighting,
    /// Field cleared (or skipped), short delay before the next wave.
    Completed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveType {
    #[default]
    Normal,
    Boss,
}

/// Boss flavor, chosen by wave milestone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossKind {
    #[default]
    Tank,
    Summoner,
    Artillery,
    Teleporter,
    Ultimate,
}

/// Boss phase, driven purely by health fraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BossPhase {
    #[default]
    One,
    Two,
    Three,
}

/// Charger behavior state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargePhase {
    #[default]
    Idle,
    ChargingUp,
    Dashing,
    Cooldown,
}

/// Loot a carrier drops on death.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LootKind {
    #[default]
    None,
    Magnet,
    HealthPack,
    Weapon,
}

/// Rat breed, rolled at spawn from the tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatBreed {
    /// Fast and fragile.
    #[default]
    WhiteRat,
    /// Balanced.
    Hamster,
    /// Slow small tank.
    BlackRat,
    EliteRat,
    EliteHamster,
    /// Tier 3+ rat king.
    SpinyKing,
}

/// Player weapon, selected by tier index 0..=3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Pistol,
    Shotgun,
    Minigun,
    Bazooka,
}

impl WeaponKind {
    /// Map a loot weapon tier to a weapon. Out-of-range tiers clamp to the bazooka.
    pub fn from_tier(tier: u8) -> Self {
        match tier {
            0 => WeaponKind::Pistol,
            1 => WeaponKind::Shotgun,
            2 => WeaponKind::Minigun,
            _ => WeaponKind::Bazooka,
        }
    }
}

/// Projectile payload type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotKind {
    #[default]
    Normal,
    Explosive,
}

/// Particle color requested from the effects collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FxColor {
    #[default]
    Yellow,
    Red,
    Blue,
    Gold,
    Green,
    Orange,
    SkyBlue,
}

/// Session phase of the combat engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Active,
    Paused,
    /// Player died.
    GameOver,
    /// Victory wave reached.
    Victory,
}
