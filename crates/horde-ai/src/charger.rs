//! Charger: IDLE -> CHARGING_UP -> DASHING -> COOLDOWN -> IDLE.
//!
//! The dash direction is captured when the telegraph starts and never
//! re-aimed. Cooldown opens with a quadratic ease-out slide along the dash
//! direction, then the charger stands still until the window closes.

use glam::Vec3;

use horde_core::constants::*;
use horde_core::enums::ChargePhase;
use horde_core::types::{flat_distance, flat_heading};

use crate::enemy::{Body, EnemySignal};
use crate::profiles::{charger_profile, TierStats};

#[derive(Debug, Clone)]
pub struct Charger {
    phase: ChargePhase,
    phase_timer: f32,
    dash_dir: Vec3,
    dash_speed: f32,
}

impl Charger {
    pub fn new(tier: u8) -> (Self, TierStats) {
        let profile = charger_profile(tier);
        (
            Self {
                phase: ChargePhase::Idle,
                phase_timer: 0.0,
                dash_dir: Vec3::ZERO,
                dash_speed: profile.dash_speed,
            },
            profile.stats,
        )
    }

    pub fn phase(&self) -> ChargePhase {
        self.phase
    }

    /// Winding up or dashing.
    pub fn is_committed(&self) -> bool {
        matches!(self.phase, ChargePhase::ChargingUp | ChargePhase::Dashing)
    }

    pub fn dash_direction(&self) -> Vec3 {
        self.dash_dir
    }

    pub(crate) fn update(&mut self, body: &mut Body, dt: f32, player: Vec3) -> Option<EnemySignal> {
        let dist = flat_distance(body.position, player);

        match self.phase {
            ChargePhase::Idle => {
                let dir = flat_heading(body.position, player);
                let speed = body.speed;
                body.step(dir, speed, dt);

                if dist > CHARGER_TRIGGER_MIN && dist < CHARGER_TRIGGER_MAX {
                    self.phase = ChargePhase::ChargingUp;
                    self.phase_timer = CHARGER_TELEGRAPH_SECS;
                    self.dash_dir = dir;
                }
            }
            ChargePhase::ChargingUp => {
                self.phase_timer -= dt;
                if self.phase_timer <= 0.0 {
                    self.phase = ChargePhase::Dashing;
                    self.phase_timer = CHARGER_DASH_SECS;
                }
            }
            ChargePhase::Dashing => {
                body.step(self.dash_dir, self.dash_speed, dt);
                self.phase_timer -= dt;
                if self.phase_timer <= 0.0 {
                    self.phase = ChargePhase::Cooldown;
                    self.phase_timer = CHARGER_COOLDOWN_SECS;
                }
            }
            ChargePhase::Cooldown => {
                let in_cooldown = CHARGER_COOLDOWN_SECS - self.phase_timer;
                if in_cooldown < CHARGER_SLIDE_SECS {
                    let ease = 1.0 - in_cooldown / CHARGER_SLIDE_SECS;
                    let slide = self.dash_speed * CHARGER_SLIDE_FACTOR * ease * ease;
                    body.step(self.dash_dir, slide, dt);
                }
                self.phase_timer -= dt;
                if self.phase_timer <= 0.0 {
                    self.phase = ChargePhase::Idle;
                }
            }
        }
        None
    }
}
