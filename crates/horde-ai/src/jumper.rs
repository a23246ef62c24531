//! Jumper: hops toward the player every ~1.5s and carries loot.

use glam::Vec3;
use rand::Rng;

use horde_core::constants::*;
use horde_core::enums::LootKind;
use horde_core::types::flat_heading;

use crate::enemy::{Body, EnemySignal};
use crate::profiles::{jumper_stats, TierStats};

#[derive(Debug, Clone)]
pub struct Jumper {
    hop_timer: f32,
    airborne: bool,
    vertical_speed: f32,
    hop_dir: Vec3,
    loot: LootKind,
    weapon_tier: u8,
}

/// Weighted loot roll on a 1..=100 die.
pub fn roll_loot(rng: &mut impl Rng) -> (LootKind, u8) {
    match rng.gen_range(1..=100) {
        1..=50 => (LootKind::None, 0),
        51..=70 => (LootKind::Magnet, 0),
        71..=85 => (LootKind::HealthPack, 0),
        _ => (LootKind::Weapon, rng.gen_range(0..=3)),
    }
}

impl Jumper {
    pub fn new(tier: u8, rng: &mut impl Rng) -> (Self, TierStats) {
        let hop_timer = rng.gen_range(0..=100) as f32 / 100.0;
        let (loot, weapon_tier) = roll_loot(rng);
        (
            Self {
                hop_timer,
                airborne: false,
                vertical_speed: 0.0,
                hop_dir: Vec3::ZERO,
                loot,
                weapon_tier,
            },
            jumper_stats(tier),
        )
    }

    pub fn loot(&self) -> LootKind {
        self.loot
    }

    pub fn weapon_tier(&self) -> u8 {
        self.weapon_tier
    }

    pub fn is_airborne(&self) -> bool {
        self.airborne
    }

    pub(crate) fn update(&mut self, body: &mut Body, dt: f32, player: Vec3) -> Option<EnemySignal> {
        if !self.airborne {
            self.hop_timer += dt;
            if self.hop_timer > JUMPER_HOP_INTERVAL_SECS {
                self.airborne = true;
                self.vertical_speed = JUMPER_HOP_VELOCITY;
                self.hop_dir = flat_heading(body.position, player);
                self.hop_timer = 0.0;
            }
            return None;
        }

        body.position.y += self.vertical_speed * dt;
        self.vertical_speed -= JUMPER_GRAVITY * dt;
        let speed = body.speed * JUMPER_AIR_SPEED_FACTOR;
        body.step(self.hop_dir, speed, dt);

        if body.position.y <= 0.0 {
            body.position.y = 0.0;
            self.airborne = false;
        }
        None
    }
}
