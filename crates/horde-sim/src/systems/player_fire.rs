//! Player shots against enemies, and the death payout for kills.
//!
//! Each active shot scans living enemies and stops at the first overlap, so
//! one shot harms at most one enemy. The payout runs off the kill latch
//! returned by `Enemy::take_damage`, which flips exactly once per enemy.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use tracing::debug;

use horde_ai::Enemy;
use horde_core::constants::{FX_DEATH_BURST, FX_HIT_SPARKS, FX_SHELL_IMPACT};
use horde_core::enums::{FxColor, LootKind, ShotKind};
use horde_core::events::{FxEvent, SoundCue};
use horde_core::types::PlayerShot;

use crate::world_setup;

/// What a dead enemy leaves behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kill {
    pub at: Vec3,
    pub tier: u8,
    pub xp: u32,
    pub loot: Option<(LootKind, u8)>,
    pub splits: bool,
}

impl Kill {
    fn from_enemy(enemy: &Enemy) -> Self {
        Self {
            at: enemy.body.position,
            tier: enemy.body.tier,
            xp: enemy.xp_reward(),
            loot: enemy.loot(),
            splits: enemy.can_split(),
        }
    }
}

/// Resolve all shots, then pay out every kill. Returns the kills in order.
pub fn run(
    world: &mut World,
    shots: &mut [PlayerShot],
    rng: &mut impl Rng,
    pending: &mut Vec<Enemy>,
    fx: &mut Vec<FxEvent>,
) -> Vec<Kill> {
    let mut kills = Vec::new();

    for shot in shots.iter_mut() {
        if !shot.shot.active {
            continue;
        }
        for (_entity, enemy) in world.query_mut::<&mut Enemy>() {
            if !enemy.is_alive() || !shot.shot.overlaps(enemy.body.position, enemy.body.radius) {
                continue;
            }
            let killed = enemy.take_damage(shot.shot.damage);
            shot.shot.active = false;
            impact_fx(shot, fx);
            if killed {
                kills.push(Kill::from_enemy(enemy));
            }
            break;
        }
    }

    for kill in &kills {
        pay_out(world, rng, kill, pending, fx);
    }
    kills
}

fn impact_fx(shot: &PlayerShot, fx: &mut Vec<FxEvent>) {
    let at = shot.shot.position;
    fx.push(FxEvent::burst(at, FxColor::Yellow, FX_HIT_SPARKS));
    fx.push(FxEvent::Sound { cue: SoundCue::Crack });
    if shot.kind == ShotKind::Explosive {
        fx.push(FxEvent::burst(at, FxColor::Orange, FX_SHELL_IMPACT));
        fx.push(FxEvent::Sound {
            cue: SoundCue::Explosion,
        });
    }
}

pub fn tier_color(tier: u8) -> FxColor {
    match tier {
        0 | 1 => FxColor::Red,
        2 => FxColor::Blue,
        _ => FxColor::Gold,
    }
}

/// Orbs, loot and split children for one kill. Children are queued, not
/// inserted, so the registry only grows at cleanup.
pub fn pay_out(
    world: &mut World,
    rng: &mut impl Rng,
    kill: &Kill,
    pending: &mut Vec<Enemy>,
    fx: &mut Vec<FxEvent>,
) {
    fx.push(FxEvent::burst(kill.at, tier_color(kill.tier), FX_DEATH_BURST));
    world_setup::spawn_orbs(world, rng, kill.at, kill.xp);

    if let Some((kind, weapon_tier)) = kill.loot {
        world_setup::spawn_loot(world, rng, kill.at, kind, weapon_tier);
    }

    let mut children = 0;
    if kill.splits {
        let split = world_setup::split_children(rng, kill.at);
        children = split.len();
        pending.extend(split);
    }
    debug!(tier = kill.tier, xp = kill.xp, loot = ?kill.loot, children, "enemy killed");
}
