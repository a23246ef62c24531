//! The player collaborator.
//!
//! The engine never owns the player. Each tick borrows something that
//! implements [`PlayerLink`] for position, damage, XP and pickups.

use glam::Vec3;

use horde_core::constants::PLAYER_BODY_HEIGHT;
use horde_core::enums::WeaponKind;

pub trait PlayerLink {
    fn position(&self) -> Vec3;

    /// Accepted for wave scaling hooks; current formulas ignore it.
    fn level(&self) -> u32 {
        1
    }

    fn take_damage(&mut self, amount: f32);
    fn is_dead(&self) -> bool;
    fn add_xp(&mut self, amount: u32);
    fn heal(&mut self, amount: f32);
    fn has_magnet_buff(&self) -> bool;
    fn activate_magnet_buff(&mut self, secs: f32);
    fn switch_weapon(&mut self, weapon: WeaponKind);
}

/// A plain player record for headless runs and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct StandInPlayer {
    pub position: Vec3,
    pub health: f32,
    pub max_health: f32,
    pub xp: u32,
    pub level: u32,
    pub weapon: WeaponKind,
    pub magnet_secs: f32,
    /// Disable to keep the stand-in alive no matter what hits it.
    pub mortal: bool,
}

impl Default for StandInPlayer {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, PLAYER_BODY_HEIGHT, 0.0),
            health: 100.0,
            max_health: 100.0,
            xp: 0,
            level: 1,
            weapon: WeaponKind::Pistol,
            magnet_secs: 0.0,
            mortal: true,
        }
    }
}

impl StandInPlayer {
    /// Stand on the floor at the given ground-plane point.
    pub fn at(x: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, PLAYER_BODY_HEIGHT, z),
            ..Default::default()
        }
    }

    /// Count down timed buffs. Hosts call this once per frame.
    pub fn tick_buffs(&mut self, dt: f32) {
        self.magnet_secs = (self.magnet_secs - dt).max(0.0);
    }
}

impl PlayerLink for StandInPlayer {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn take_damage(&mut self, amount: f32) {
        if !self.mortal {
            return;
        }
        self.health = (self.health - amount).max(0.0);
    }

    fn is_dead(&self) -> bool {
        self.mortal && self.health <= 0.0
    }

    fn add_xp(&mut self, amount: u32) {
        self.xp += amount;
    }

    fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    fn has_magnet_buff(&self) -> bool {
        self.magnet_secs > 0.0
    }

    fn activate_magnet_buff(&mut self, secs: f32) {
        self.magnet_secs = secs;
    }

    fn switch_weapon(&mut self, weapon: WeaponKind) {
        self.weapon = weapon;
    }
}
