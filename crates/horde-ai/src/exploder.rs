//! Exploder: rushes the player and burns a fuse once close.
//!
//! The fuse only retires the body; blast damage is applied by the combat
//! loop, which asks [`Exploder::should_explode`] and then spends the blast.

use glam::Vec3;

use horde_core::constants::*;
use horde_core::types::{flat_distance, flat_heading, settle_to_ground};

use crate::enemy::{Body, EnemySignal};
use crate::profiles::{exploder_profile, TierStats};

#[derive(Debug, Clone)]
pub struct Exploder {
    armed: bool,
    fuse: f32,
    spent: bool,
    blast_radius: f32,
    blast_damage: f32,
}

impl Exploder {
    pub fn new(tier: u8) -> (Self, TierStats) {
        let profile = exploder_profile(tier);
        (
            Self {
                armed: false,
                fuse: -1.0,
                spent: false,
                blast_radius: profile.blast_radius,
                blast_damage: profile.blast_damage,
            },
            profile.stats,
        )
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn blast_radius(&self) -> f32 {
        self.blast_radius
    }

    pub fn blast_damage(&self) -> f32 {
        self.blast_damage
    }

    pub fn should_explode(&self) -> bool {
        self.armed && self.fuse <= 0.0 && !self.spent
    }

    pub(crate) fn spend(&mut self) {
        self.spent = true;
    }

    pub(crate) fn update(&mut self, body: &mut Body, dt: f32, player: Vec3) -> Option<EnemySignal> {
        let dist = flat_distance(body.position, player);
        let dir = flat_heading(body.position, player);
        let speed = body.speed;
        body.step(dir, speed, dt);

        if !self.armed && dist < self.blast_radius * EXPLODER_ARM_FACTOR {
            self.armed = true;
            self.fuse = EXPLODER_FUSE_SECS;
        }

        let mut signal = None;
        if self.armed {
            self.fuse -= dt;
            if self.fuse <= 0.0 {
                body.retire();
                signal = Some(EnemySignal::FuseExpired);
            }
        }

        settle_to_ground(&mut body.position, dt);
        signal
    }
}
