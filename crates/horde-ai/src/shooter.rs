//! Shooter: holds a firing band around the player and lobs straight bullets.
//!
//! Retreats when closer than the comfort distance, advances when out of
//! range, and otherwise holds position. The fire cooldown runs regardless of
//! movement.

use glam::Vec3;

use horde_core::constants::*;
use horde_core::types::{flat_distance, flat_heading, settle_to_ground, Projectile};

use crate::enemy::{Body, EnemySignal};
use crate::profiles::{shooter_profile, TierStats};

#[derive(Debug, Clone)]
pub struct Shooter {
    fire_timer: f32,
    fire_cooldown: f32,
    range: f32,
}

impl Shooter {
    pub fn new(tier: u8) -> (Self, TierStats) {
        let profile = shooter_profile(tier);
        (
            Self {
                fire_timer: 0.0,
                fire_cooldown: profile.fire_cooldown,
                range: profile.range,
            },
            profile.stats,
        )
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    pub(crate) fn update(
        &mut self,
        body: &mut Body,
        shots: &mut Vec<Projectile>,
        dt: f32,
        player: Vec3,
    ) -> Option<EnemySignal> {
        let dist = flat_distance(body.position, player);
        let dir = flat_heading(body.position, player);
        let speed = body.speed;

        if dist < SHOOTER_RETREAT_DISTANCE {
            body.step(-dir, speed, dt);
        } else if dist > self.range {
            body.step(dir, speed, dt);
        }

        self.fire_timer -= dt;
        if dist <= self.range && self.fire_timer <= 0.0 {
            shots.push(self.bullet(body, player));
            self.fire_timer = self.fire_cooldown;
        }

        settle_to_ground(&mut body.position, dt);
        None
    }

    fn bullet(&self, body: &Body, player: Vec3) -> Projectile {
        let mut muzzle = body.position;
        muzzle.y += body.radius * SHOOTER_MUZZLE_HEIGHT;
        // Flat shot so bullets don't nose-dive into the floor.
        let mut dir = player - muzzle;
        dir.y = 0.0;
        Projectile::new(
            muzzle,
            dir.normalize_or_zero(),
            SHOOTER_BULLET_SPEED,
            SHOOTER_BULLET_DAMAGE,
            SHOOTER_BULLET_RADIUS,
            SHOOTER_BULLET_LIFE_SECS,
        )
    }
}
