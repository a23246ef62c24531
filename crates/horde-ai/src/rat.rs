//! Rat: scurries at the player with small random hops.

use glam::Vec3;
use rand::Rng;

use horde_core::constants::*;
use horde_core::enums::RatBreed;
use horde_core::types::flat_heading;

use crate::enemy::{Body, EnemySignal};
use crate::profiles::{rat_stats, TierStats};

#[derive(Debug, Clone)]
pub struct Rat {
    breed: RatBreed,
    hop_timer: f32,
    hopping: bool,
    hop_velocity: f32,
}

/// Pick a breed for the tier.
pub fn roll_breed(tier: u8, rng: &mut impl Rng) -> RatBreed {
    match tier {
        0 | 1 => match rng.gen_range(0..=100) {
            0..=39 => RatBreed::WhiteRat,
            40..=79 => RatBreed::Hamster,
            _ => RatBreed::BlackRat,
        },
        2 => {
            if rng.gen_bool(0.5) {
                RatBreed::EliteRat
            } else {
                RatBreed::EliteHamster
            }
        }
        _ => RatBreed::SpinyKing,
    }
}

impl Rat {
    pub fn new(tier: u8, rng: &mut impl Rng) -> (Self, TierStats) {
        let breed = roll_breed(tier, rng);
        (
            Self {
                breed,
                hop_timer: rng.gen_range(1.0..3.0),
                hopping: false,
                hop_velocity: 0.0,
            },
            rat_stats(breed),
        )
    }

    pub fn breed(&self) -> RatBreed {
        self.breed
    }

    pub(crate) fn update(
        &mut self,
        body: &mut Body,
        dt: f32,
        player: Vec3,
        rng: &mut impl Rng,
    ) -> Option<EnemySignal> {
        let dir = flat_heading(body.position, player);
        let speed = body.speed;
        body.step(dir, speed, dt);

        self.hop_timer -= dt;
        if !self.hopping && self.hop_timer <= 0.0 {
            self.hopping = true;
            self.hop_velocity = RAT_HOP_VELOCITY;
            self.hop_timer = rng.gen_range(2.0..4.0);
        }

        if self.hopping {
            body.position.y += self.hop_velocity * dt;
            self.hop_velocity -= RAT_GRAVITY * dt;
            if body.position.y <= 0.0 {
                body.position.y = 0.0;
                self.hopping = false;
            }
        }
        None
    }
}
