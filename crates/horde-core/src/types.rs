//! Fundamental geometric helpers and world entity records.
//!
//! All positions are `glam::Vec3` in world units with y up. Gameplay mostly
//! happens on the x/z ground plane.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;

/// Unit vector from `from` toward `to`, or zero when the points coincide.
pub fn heading(from: Vec3, to: Vec3) -> Vec3 {
    (to - from).normalize_or_zero()
}

/// Unit vector on the ground plane from `from` toward `to`, or zero when
/// the points coincide horizontally.
pub fn flat_heading(from: Vec3, to: Vec3) -> Vec3 {
    let mut delta = to - from;
    delta.y = 0.0;
    delta.normalize_or_zero()
}

/// Horizontal distance ignoring height.
pub fn flat_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = b.x - a.x;
    let dz = b.z - a.z;
    (dx * dx + dz * dz).sqrt()
}

/// Settle a grounded body: fall at a constant speed and clamp at floor level.
pub fn settle_to_ground(position: &mut Vec3, dt: f32) {
    if position.y > 0.0 {
        position.y -= ENEMY_FALL_SPEED * dt;
    }
    if position.y < 0.0 {
        position.y = 0.0;
    }
}

/// A straight-flying projectile fired by an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec3,
    /// Unit direction of travel.
    pub direction: Vec3,
    pub speed: f32,
    pub damage: f32,
    pub radius: f32,
    pub active: bool,
    /// Remaining life in seconds.
    pub life: f32,
}

impl Projectile {
    pub fn new(position: Vec3, direction: Vec3, speed: f32, damage: f32, radius: f32, life: f32) -> Self {
        Self {
            position,
            direction,
            speed,
            damage,
            radius,
            active: true,
            life,
        }
    }

    /// Advance along the direction; expire on life-out or ground contact.
    pub fn advance(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.position += self.direction * self.speed * dt;
        self.life -= dt;
        if self.life <= 0.0 || self.position.y <= 0.0 {
            self.active = false;
        }
    }

    /// Sphere overlap against a body of the given radius.
    pub fn overlaps(&self, center: Vec3, radius: f32) -> bool {
        self.position.distance(center) < self.radius + radius
    }
}

/// Weapon parameters handed over when the player fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub damage: f32,
    /// Seconds between trigger pulls.
    pub fire_interval: f32,
    pub shot_speed: f32,
    pub shot_radius: f32,
    pub pellets: u32,
    /// Total spread in degrees.
    pub spread_deg: f32,
    pub shot_kind: ShotKind,
}

impl WeaponStats {
    pub fn for_kind(kind: WeaponKind) -> Self {
        match kind {
            WeaponKind::Pistol => Self {
                damage: 25.0,
                fire_interval: 0.25,
                shot_speed: 40.0,
                shot_radius: 0.3,
                pellets: 1,
                spread_deg: 2.0,
                shot_kind: ShotKind::Normal,
            },
            WeaponKind::Shotgun => Self {
                damage: 15.0,
                fire_interval: 0.9,
                shot_speed: 30.0,
                shot_radius: 0.25,
                pellets: 5,
                spread_deg: 30.0,
                shot_kind: ShotKind::Normal,
            },
            WeaponKind::Minigun => Self {
                damage: 8.0,
                fire_interval: 0.06,
                shot_speed: 45.0,
                shot_radius: 0.2,
                pellets: 1,
                spread_deg: 6.0,
                shot_kind: ShotKind::Normal,
            },
            WeaponKind::Bazooka => Self {
                damage: 150.0,
                fire_interval: 1.5,
                shot_speed: 20.0,
                shot_radius: 0.8,
                pellets: 1,
                spread_deg: 0.0,
                shot_kind: ShotKind::Explosive,
            },
        }
    }
}

/// An arcing projectile fired by the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerShot {
    pub shot: Projectile,
    pub kind: ShotKind,
    pub vertical_velocity: f32,
    pub traveled: f32,
    pub max_range: f32,
}

/// How a player shot ended its flight this frame, if it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotFate {
    Flying,
    HitGround,
    Expired,
}

impl PlayerShot {
    /// Launch from waist height along a horizontal direction.
    pub fn launch(origin: Vec3, direction: Vec3, weapon: &WeaponStats) -> Self {
        let mut position = origin;
        position.y = PLAYER_SHOT_HEIGHT;
        Self {
            shot: Projectile::new(
                position,
                direction,
                weapon.shot_speed,
                weapon.damage,
                weapon.shot_radius,
                PLAYER_SHOT_LIFE_SECS,
            ),
            kind: weapon.shot_kind,
            vertical_velocity: PLAYER_SHOT_LIFT,
            traveled: 0.0,
            max_range: weapon.shot_speed * PLAYER_SHOT_RANGE_FACTOR,
        }
    }

    /// Integrate one frame of the arc.
    pub fn advance(&mut self, dt: f32) -> ShotFate {
        if !self.shot.active {
            return ShotFate::Expired;
        }
        let step = self.shot.direction * self.shot.speed * dt;
        self.shot.position += step;
        self.traveled += step.length();

        self.shot.position.y += self.vertical_velocity * dt;
        self.vertical_velocity -= PLAYER_SHOT_GRAVITY * dt;

        let mut fate = ShotFate::Flying;
        if self.shot.position.y <= 0.0 {
            self.shot.position.y = 0.0;
            self.shot.active = false;
            fate = ShotFate::HitGround;
        }

        self.shot.life -= dt;
        if self.traveled >= self.max_range || self.shot.life <= 0.0 {
            self.shot.active = false;
            if fate == ShotFate::Flying {
                fate = ShotFate::Expired;
            }
        }
        fate
    }
}

/// Collectible experience gem dropped on enemy death.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XpOrb {
    pub position: Vec3,
    pub velocity: Vec3,
    pub value: u32,
    pub active: bool,
}

/// An item dropped by a loot carrier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LootDrop {
    pub kind: LootKind,
    /// Weapon tier 0..=3, only meaningful for weapon drops.
    pub weapon_tier: u8,
    pub position: Vec3,
    pub life: f32,
    pub bob_timer: f32,
    pub active: bool,
}

impl LootDrop {
    pub fn new(kind: LootKind, weapon_tier: u8, at: Vec3, bob_timer: f32) -> Self {
        let mut position = at;
        position.y = LOOT_HEIGHT;
        Self {
            kind,
            weapon_tier,
            position,
            life: LOOT_LIFE_SECS,
            bob_timer,
            active: true,
        }
    }

    /// Age the drop and bob it around its rest height.
    pub fn advance(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.life -= dt;
        if self.life <= 0.0 {
            self.active = false;
            return;
        }
        self.bob_timer += dt * LOOT_BOB_RATE;
        self.position.y = LOOT_HEIGHT + self.bob_timer.sin() * LOOT_BOB_AMPLITUDE;
    }
}

/// One line of a wave's spawn list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnEntry {
    pub kind: EnemyKind,
    pub tier: u8,
    pub count: u32,
}

impl SpawnEntry {
    pub fn new(kind: EnemyKind, tier: u8, count: u32) -> Self {
        Self { kind, tier, count }
    }
}

/// Composition of a single wave. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    pub wave_number: u32,
    pub wave_type: WaveType,
    pub entries: Vec<SpawnEntry>,
    pub total_enemies: u32,
    pub spawn_interval: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            wave_number: 0,
            wave_type: WaveType::Normal,
            entries: Vec::new(),
            total_enemies: 0,
            spawn_interval: 1.0,
        }
    }
}

impl WaveConfig {
    /// Sum of all entry counts.
    pub fn entry_total(&self) -> u32 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entry delivering the `index`-th spawn (0-based), walking entries by
    /// accumulated count.
    pub fn entry_for_spawn(&self, index: u32) -> Option<&SpawnEntry> {
        let mut accumulated = 0;
        for entry in &self.entries {
            accumulated += entry.count;
            if index < accumulated {
                return Some(entry);
            }
        }
        None
    }
}
