//! Archetype-specific stat profiles.
//!
//! Consolidates per-tier numbers for every enemy archetype. Tiers above the
//! top of a table use the top row.

use horde_core::constants::*;
use horde_core::enums::{BossKind, RatBreed};

/// Shared body stats for one archetype tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierStats {
    pub health: f32,
    pub speed: f32,
    pub radius: f32,
    pub xp: u32,
}

const fn stats(health: f32, speed: f32, radius: f32, xp: u32) -> TierStats {
    TierStats {
        health,
        speed,
        radius,
        xp,
    }
}

/// Walker: plain seeker.
pub fn walker_stats(tier: u8) -> TierStats {
    match tier {
        0 | 1 => stats(20.0, 5.0, 1.0, 10),
        2 => stats(60.0, 5.5, 1.4, 50),
        _ => stats(150.0, 6.0, 2.0, 150),
    }
}

pub struct ShooterProfile {
    pub stats: TierStats,
    /// Seconds between shots.
    pub fire_cooldown: f32,
    /// Max firing distance; the shooter advances when farther.
    pub range: f32,
}

pub fn shooter_profile(tier: u8) -> ShooterProfile {
    match tier {
        0 | 1 => ShooterProfile {
            stats: stats(30.0, 3.0, 1.0, 30),
            fire_cooldown: 2.0,
            range: 20.0,
        },
        2 => ShooterProfile {
            stats: stats(80.0, 2.5, 1.3, 100),
            fire_cooldown: 1.5,
            range: 25.0,
        },
        _ => ShooterProfile {
            stats: stats(200.0, 2.0, 1.8, 300),
            fire_cooldown: 1.0,
            range: 30.0,
        },
    }
}

pub struct ChargerProfile {
    pub stats: TierStats,
    pub dash_speed: f32,
}

pub fn charger_profile(tier: u8) -> ChargerProfile {
    match tier {
        0 | 1 => ChargerProfile {
            stats: stats(40.0, 6.0, 1.2, 40),
            dash_speed: 100.0,
        },
        2 => ChargerProfile {
            stats: stats(120.0, 7.0, 1.6, 150),
            dash_speed: 140.0,
        },
        _ => ChargerProfile {
            stats: stats(300.0, 8.0, 2.2, 400),
            dash_speed: 180.0,
        },
    }
}

pub struct ExploderProfile {
    pub stats: TierStats,
    pub blast_radius: f32,
    pub blast_damage: f32,
}

pub fn exploder_profile(tier: u8) -> ExploderProfile {
    match tier {
        0 | 1 => ExploderProfile {
            stats: stats(15.0, 12.0, 0.8, 25),
            blast_radius: 5.0,
            blast_damage: 50.0,
        },
        2 => ExploderProfile {
            stats: stats(40.0, 9.0, 1.0, 80),
            blast_radius: 7.0,
            blast_damage: 80.0,
        },
        _ => ExploderProfile {
            stats: stats(100.0, 10.0, 1.5, 200),
            blast_radius: 10.0,
            blast_damage: 120.0,
        },
    }
}

pub fn jumper_stats(tier: u8) -> TierStats {
    match tier {
        0 | 1 => stats(30.0, 6.0, 1.0, 25),
        2 => stats(100.0, 4.5, 1.5, 80),
        _ => stats(500.0, 3.0, 3.0, 500),
    }
}

pub fn rat_stats(breed: RatBreed) -> TierStats {
    match breed {
        RatBreed::WhiteRat => stats(15.0, 9.0, 0.6, 8),
        RatBreed::Hamster => stats(25.0, 6.5, 0.9, 20),
        RatBreed::BlackRat => stats(80.0, 4.0, 1.3, 50),
        RatBreed::EliteRat => stats(120.0, 5.5, 1.5, 120),
        RatBreed::EliteHamster => stats(150.0, 4.5, 1.8, 150),
        RatBreed::SpinyKing => stats(600.0, 3.0, 3.0, 1200),
    }
}

pub struct BossProfile {
    /// Unscaled stats; health is multiplied by [`wave_scaling`] at spawn.
    pub stats: TierStats,
    pub attack_cooldown: f32,
    /// Movement speed while in charge mode, for kinds that charge.
    pub charge_speed: Option<f32>,
}

pub fn boss_profile(kind: BossKind) -> BossProfile {
    match kind {
        BossKind::Tank => BossProfile {
            stats: stats(3000.0, 3.0, 4.0, 2000),
            attack_cooldown: 3.0,
            charge_speed: Some(15.0),
        },
        BossKind::Summoner => BossProfile {
            stats: stats(4000.0, 4.0, 3.5, 4000),
            attack_cooldown: 5.0,
            charge_speed: None,
        },
        BossKind::Artillery => BossProfile {
            stats: stats(5000.0, 2.5, 3.0, 6000),
            attack_cooldown: 1.5,
            charge_speed: None,
        },
        BossKind::Teleporter => BossProfile {
            stats: stats(6000.0, 5.0, 3.5, 8000),
            attack_cooldown: 2.0,
            charge_speed: Some(30.0),
        },
        BossKind::Ultimate => BossProfile {
            stats: stats(10000.0, 6.0, 5.0, 20000),
            attack_cooldown: 1.0,
            charge_speed: Some(40.0),
        },
    }
}

/// Boss flavor for a boss wave.
pub fn boss_kind_for_wave(wave: u32) -> BossKind {
    match wave {
        5 => BossKind::Tank,
        10 => BossKind::Summoner,
        15 => BossKind::Artillery,
        20 => BossKind::Teleporter,
        _ => BossKind::Ultimate,
    }
}

/// Health multiplier for a boss spawned on `wave`.
pub fn wave_scaling(wave: u32) -> f32 {
    1.0 + wave as f32 / WAVE_SCALING_DIVISOR
}
