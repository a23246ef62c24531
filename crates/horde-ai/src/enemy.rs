//! The enemy record: a shared body plus one closed behavior variant.
//!
//! The combat loop only talks to [`Enemy`]. Archetype state lives in the
//! per-archetype modules and is never read across enemies.

use glam::Vec3;
use rand::Rng;

use horde_core::constants::*;
use horde_core::enums::{EnemyKind, LootKind};
use horde_core::state::EnemyView;
use horde_core::types::Projectile;

use crate::boss::Boss;
use crate::charger::Charger;
use crate::exploder::Exploder;
use crate::jumper::Jumper;
use crate::profiles::{self, TierStats};
use crate::rat::Rat;
use crate::shooter::Shooter;
use crate::walker::Walker;

/// Fields every archetype shares.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    pub health: f32,
    pub max_health: f32,
    pub speed: f32,
    pub radius: f32,
    pub tier: u8,
    alive: bool,
    xp_reward: u32,
    flash_timer: f32,
}

impl Body {
    pub fn new(stats: TierStats, tier: u8, position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            health: stats.health,
            max_health: stats.health,
            speed: stats.speed,
            radius: stats.radius,
            tier,
            alive: true,
            xp_reward: stats.xp,
            flash_timer: 0.0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn xp_reward(&self) -> u32 {
        self.xp_reward
    }

    pub fn is_flashing(&self) -> bool {
        self.flash_timer > 0.0
    }

    /// Apply damage. Returns true only on the call that flips the alive latch.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        let was_alive = self.alive;
        self.health -= amount;
        self.flash_timer = HIT_FLASH_SECS;
        if self.health <= 0.0 {
            self.alive = false;
        }
        was_alive && !self.alive
    }

    /// Deactivate without a kill (exploder fuse burn-out).
    pub(crate) fn retire(&mut self) {
        self.alive = false;
    }

    pub(crate) fn tick_flash(&mut self, dt: f32) {
        if self.flash_timer > 0.0 {
            self.flash_timer = (self.flash_timer - dt).max(0.0);
        }
    }

    pub(crate) fn step(&mut self, direction: Vec3, speed: f32, dt: f32) {
        self.position += direction * speed * dt;
    }

    /// Health fraction in [0, 1].
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}

/// Something an enemy asks the combat loop to do on its behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemySignal {
    /// Boss summon: spawn one minion near the boss.
    MinionRequested,
    /// Exploder fuse ran out this frame.
    FuseExpired,
}

/// Per-archetype state.
#[derive(Debug, Clone)]
pub enum Behavior {
    Walker(Walker),
    Shooter(Shooter),
    Charger(Charger),
    Exploder(Exploder),
    Jumper(Jumper),
    Rat(Rat),
    Boss(Boss),
}

/// A live enemy in the registry.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub body: Body,
    pub behavior: Behavior,
    /// Projectiles this enemy has fired and that are still in flight.
    pub shots: Vec<Projectile>,
}

impl Enemy {
    /// Build an enemy of the given archetype and tier. `wave` only matters
    /// for bosses, whose flavor and health depend on it.
    pub fn spawn(kind: EnemyKind, tier: u8, position: Vec3, wave: u32, rng: &mut impl Rng) -> Self {
        let (body, behavior) = match kind {
            EnemyKind::Walker => {
                let body = Body::new(profiles::walker_stats(tier), tier, position);
                (body, Behavior::Walker(Walker::new(true)))
            }
            EnemyKind::Shooter => {
                let (shooter, stats) = Shooter::new(tier);
                (Body::new(stats, tier, position), Behavior::Shooter(shooter))
            }
            EnemyKind::Charger => {
                let (charger, stats) = Charger::new(tier);
                (Body::new(stats, tier, position), Behavior::Charger(charger))
            }
            EnemyKind::Exploder => {
                let (exploder, stats) = Exploder::new(tier);
                (Body::new(stats, tier, position), Behavior::Exploder(exploder))
            }
            EnemyKind::Jumper => {
                let (jumper, stats) = Jumper::new(tier, rng);
                (Body::new(stats, tier, position), Behavior::Jumper(jumper))
            }
            EnemyKind::Rat => {
                let (rat, stats) = Rat::new(tier, rng);
                (Body::new(stats, tier, position), Behavior::Rat(rat))
            }
            EnemyKind::Boss => {
                let (boss, body) = Boss::new(profiles::boss_kind_for_wave(wave), position, wave);
                (body, Behavior::Boss(boss))
            }
        };
        Self {
            body,
            behavior,
            shots: Vec::new(),
        }
    }

    /// A walker that will not split again on death.
    pub fn split_child(tier: u8, position: Vec3) -> Self {
        Self {
            body: Body::new(profiles::walker_stats(tier), tier, position),
            behavior: Behavior::Walker(Walker::new(false)),
            shots: Vec::new(),
        }
    }

    pub fn kind(&self) -> EnemyKind {
        match self.behavior {
            Behavior::Walker(_) => EnemyKind::Walker,
            Behavior::Shooter(_) => EnemyKind::Shooter,
            Behavior::Charger(_) => EnemyKind::Charger,
            Behavior::Exploder(_) => EnemyKind::Exploder,
            Behavior::Jumper(_) => EnemyKind::Jumper,
            Behavior::Rat(_) => EnemyKind::Rat,
            Behavior::Boss(_) => EnemyKind::Boss,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.body.is_alive()
    }

    /// Advance behavior and owned projectiles by one frame.
    pub fn update(&mut self, dt: f32, player: Vec3, rng: &mut impl Rng) -> Option<EnemySignal> {
        if !self.body.is_alive() {
            return None;
        }
        self.body.tick_flash(dt);

        let body = &mut self.body;
        let shots = &mut self.shots;
        let signal = match &mut self.behavior {
            Behavior::Walker(w) => w.update(body, dt, player),
            Behavior::Shooter(s) => s.update(body, shots, dt, player),
            Behavior::Charger(c) => c.update(body, dt, player),
            Behavior::Exploder(e) => e.update(body, dt, player),
            Behavior::Jumper(j) => j.update(body, dt, player),
            Behavior::Rat(r) => r.update(body, dt, player, rng),
            Behavior::Boss(b) => b.update(body, shots, dt, player, rng),
        };

        for shot in self.shots.iter_mut() {
            shot.advance(dt);
        }
        self.shots.retain(|s| s.active);
        signal
    }

    /// Returns true only on the hit that kills.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        self.body.take_damage(amount)
    }

    pub fn xp_reward(&self) -> u32 {
        self.body.xp_reward()
    }

    pub fn can_split(&self) -> bool {
        matches!(&self.behavior, Behavior::Walker(w) if w.can_split())
    }

    /// Loot this enemy carries, with the weapon tier for weapon drops.
    pub fn loot(&self) -> Option<(LootKind, u8)> {
        match &self.behavior {
            Behavior::Jumper(j) if j.loot() != LootKind::None => Some((j.loot(), j.weapon_tier())),
            _ => None,
        }
    }

    /// True once an armed fuse has burned out and the blast is still owed.
    pub fn should_explode(&self) -> bool {
        matches!(&self.behavior, Behavior::Exploder(e) if e.should_explode())
    }

    /// Blast radius and damage for exploders.
    pub fn blast(&self) -> Option<(f32, f32)> {
        match &self.behavior {
            Behavior::Exploder(e) => Some((e.blast_radius(), e.blast_damage())),
            _ => None,
        }
    }

    /// Spend the owed blast and force-kill. Returns false if there was none.
    pub fn detonate(&mut self) -> bool {
        let Behavior::Exploder(e) = &mut self.behavior else {
            return false;
        };
        if !e.should_explode() {
            return false;
        }
        e.spend();
        self.body.take_damage(LETHAL_DAMAGE);
        true
    }

    pub fn boss(&self) -> Option<&Boss> {
        match &self.behavior {
            Behavior::Boss(b) => Some(b),
            _ => None,
        }
    }

    /// Draw inputs for the renderer.
    pub fn view(&self) -> EnemyView {
        let (charging, armed, boss_phase, glow) = match &self.behavior {
            Behavior::Charger(c) => (c.is_committed(), false, None, 0.0),
            Behavior::Exploder(e) => (false, e.is_armed(), None, 0.0),
            Behavior::Boss(b) => (b.is_charging(), false, Some(b.phase()), b.glow()),
            _ => (false, false, None, 0.0),
        };
        EnemyView {
            kind: self.kind(),
            tier: self.body.tier,
            position: self.body.position,
            health: self.body.health,
            max_health: self.body.max_health,
            radius: self.body.radius,
            flashing: self.body.is_flashing(),
            charging,
            armed,
            boss_phase,
            glow,
            loot: self.loot().map(|(kind, _)| kind).unwrap_or_default(),
        }
    }
}
