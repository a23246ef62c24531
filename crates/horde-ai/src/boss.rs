//! Boss: a two-level state machine.
//!
//! The outer level is the phase, derived from the health fraction every
//! frame. Each downward threshold crossing buffs speed and attack cooldown
//! exactly once. The inner level is the attack cycle: every cooldown interval the
//! cycle counter increments and dispatches to the boss kind's pattern.
//!
//! Patterns only set state (charge mode, summon signal, relocation) or emit
//! projectiles; movement is applied every frame from that state.

use glam::Vec3;
use rand::Rng;
use tracing::debug;

use horde_core::constants::*;
use horde_core::enums::{BossKind, BossPhase};
use horde_core::types::{heading, settle_to_ground, Projectile};

use crate::enemy::{Body, EnemySignal};
use crate::profiles::{boss_profile, wave_scaling};

/// Attack pattern a cycle resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackPattern {
    Melee,
    Summon,
    Barrage,
    Teleport,
}

#[derive(Debug, Clone)]
pub struct Boss {
    kind: BossKind,
    phase: BossPhase,
    attack_timer: f32,
    attack_cooldown: f32,
    cycle: u32,
    charging: bool,
    charge_speed: Option<f32>,
    teleported: bool,
    age: f32,
    glow: f32,
}

impl Boss {
    /// Build a boss and its body for the given wave.
    pub fn new(kind: BossKind, position: Vec3, wave: u32) -> (Self, Body) {
        let profile = boss_profile(kind);
        let mut stats = profile.stats;
        stats.health *= wave_scaling(wave);
        let body = Body::new(stats, 4, position);
        (
            Self {
                kind,
                phase: BossPhase::One,
                attack_timer: 0.0,
                attack_cooldown: profile.attack_cooldown,
                cycle: 0,
                charging: false,
                charge_speed: profile.charge_speed,
                teleported: false,
                age: 0.0,
                glow: 0.0,
            },
            body,
        )
    }

    pub fn kind(&self) -> BossKind {
        self.kind
    }

    pub fn phase(&self) -> BossPhase {
        self.phase
    }

    pub fn attack_cooldown(&self) -> f32 {
        self.attack_cooldown
    }

    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn is_charging(&self) -> bool {
        self.charging
    }

    /// Set on the cycle that warped behind the player.
    pub fn just_teleported(&self) -> bool {
        self.teleported
    }

    /// Cosmetic aura intensity in [0, 1].
    pub fn glow(&self) -> f32 {
        self.glow
    }

    /// Pattern for a given cycle number.
    pub fn pattern_for_cycle(kind: BossKind, cycle: u32) -> AttackPattern {
        match kind {
            BossKind::Tank => AttackPattern::Melee,
            BossKind::Summoner => AttackPattern::Summon,
            BossKind::Artillery => AttackPattern::Barrage,
            BossKind::Teleporter => AttackPattern::Teleport,
            BossKind::Ultimate => match cycle % 4 {
                0 => AttackPattern::Barrage,
                1 => AttackPattern::Melee,
                2 => AttackPattern::Summon,
                _ => AttackPattern::Teleport,
            },
        }
    }

    pub(crate) fn update(
        &mut self,
        body: &mut Body,
        shots: &mut Vec<Projectile>,
        dt: f32,
        player: Vec3,
        rng: &mut impl Rng,
    ) -> Option<EnemySignal> {
        self.update_phase(body);

        let speed = match self.charge_speed {
            Some(charge) if self.charging => charge,
            _ => body.speed,
        };
        body.step(heading(body.position, player), speed, dt);

        let signal = self.run_attack_cycle(body, shots, dt, player, rng);

        settle_to_ground(&mut body.position, dt);

        self.age += dt;
        self.glow = 0.5 + (self.age * BOSS_GLOW_RATE).sin() * 0.5;
        signal
    }

    /// Phase implied by a health fraction.
    pub fn phase_for_fraction(fraction: f32) -> BossPhase {
        if fraction > BOSS_PHASE_TWO_THRESHOLD {
            BossPhase::One
        } else if fraction > BOSS_PHASE_THREE_THRESHOLD {
            BossPhase::Two
        } else {
            BossPhase::Three
        }
    }

    /// Step down through every threshold crossed since the last frame. Phases
    /// never climb back, so each buff lands at most once.
    fn update_phase(&mut self, body: &mut Body) {
        let target = Self::phase_for_fraction(body.health_fraction());
        while self.phase < target {
            match self.phase {
                BossPhase::One => {
                    body.speed *= BOSS_PHASE_TWO_SPEED;
                    self.attack_cooldown *= BOSS_PHASE_TWO_COOLDOWN;
                    self.phase = BossPhase::Two;
                }
                BossPhase::Two => {
                    body.speed *= BOSS_PHASE_THREE_SPEED;
                    self.attack_cooldown *= BOSS_PHASE_THREE_COOLDOWN;
                    self.phase = BossPhase::Three;
                }
                BossPhase::Three => break,
            }
            debug!(
                kind = ?self.kind,
                phase = ?self.phase,
                speed = body.speed,
                cooldown = self.attack_cooldown,
                "boss phase change"
            );
        }
    }

    fn run_attack_cycle(
        &mut self,
        body: &mut Body,
        shots: &mut Vec<Projectile>,
        dt: f32,
        player: Vec3,
        rng: &mut impl Rng,
    ) -> Option<EnemySignal> {
        self.attack_timer -= dt;
        if self.attack_timer > 0.0 {
            return None;
        }
        self.attack_timer = self.attack_cooldown;
        self.cycle += 1;

        match Self::pattern_for_cycle(self.kind, self.cycle) {
            AttackPattern::Melee => {
                self.charging = self.cycle % 3 == 0;
                None
            }
            AttackPattern::Summon => {
                if self.cycle % 2 == 0 {
                    let angle = rng.gen_range(0.0_f32..360.0).to_radians();
                    let dist = rng.gen_range(BOSS_RELOCATE_MIN..BOSS_RELOCATE_MAX);
                    body.position.x += angle.cos() * dist;
                    body.position.z += angle.sin() * dist;
                }
                Some(EnemySignal::MinionRequested)
            }
            AttackPattern::Barrage => {
                self.fire_barrage(body, shots);
                None
            }
            AttackPattern::Teleport => {
                if self.cycle % 2 == 0 {
                    let away = heading(player, body.position);
                    body.position = player + away * BOSS_TELEPORT_DISTANCE;
                    self.teleported = true;
                    self.charging = false;
                } else {
                    self.teleported = false;
                    self.charging = true;
                }
                None
            }
        }
    }

    fn fire_barrage(&self, body: &Body, shots: &mut Vec<Projectile>) {
        let count = if self.phase == BossPhase::Three {
            BOSS_BARRAGE_COUNT_ENRAGED
        } else {
            BOSS_BARRAGE_COUNT
        };
        let spread = 360.0 / count as f32;
        let mut origin = body.position;
        origin.y += body.radius;

        for i in 0..count {
            let angle = (spread * i as f32).to_radians();
            shots.push(Projectile::new(
                origin,
                Vec3::new(angle.cos(), 0.0, angle.sin()),
                BOSS_PROJECTILE_SPEED,
                BOSS_PROJECTILE_DAMAGE,
                BOSS_PROJECTILE_RADIUS,
                BOSS_PROJECTILE_LIFE_SECS,
            ));
        }
    }
}
