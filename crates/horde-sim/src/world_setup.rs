//! Entity spawn factories and the placement collaborator.
//!
//! Enemies, XP orbs and loot drops each live in the world as a single
//! component: `Enemy`, `XpOrb` or `LootDrop`.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use tracing::debug;

use horde_ai::Enemy;
use horde_core::constants::*;
use horde_core::enums::{EnemyKind, LootKind};
use horde_core::types::{LootDrop, SpawnEntry, XpOrb};

/// Where a spawn entry lands: a random point on the ring around the player,
/// or the world origin for a boss.
pub fn placement_for(
    kind: EnemyKind,
    player: Vec3,
    ring_min: f32,
    ring_max: f32,
    rng: &mut impl Rng,
) -> Vec3 {
    if kind == EnemyKind::Boss {
        return Vec3::ZERO;
    }
    let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let range: f32 = if ring_max > ring_min {
        rng.gen_range(ring_min..ring_max)
    } else {
        ring_min
    };
    Vec3::new(
        player.x + angle.cos() * range,
        0.0,
        player.z + angle.sin() * range,
    )
}

/// Place one spawn entry into the world.
pub fn spawn_entry(
    world: &mut World,
    rng: &mut impl Rng,
    entry: &SpawnEntry,
    wave: u32,
    player: Vec3,
    ring: (f32, f32),
) -> Entity {
    let position = placement_for(entry.kind, player, ring.0, ring.1, rng);
    let enemy = Enemy::spawn(entry.kind, entry.tier, position, wave, rng);
    debug!(kind = ?entry.kind, tier = entry.tier, x = position.x, z = position.z, "enemy placed");
    world.spawn((enemy,))
}

/// Insert an already-built enemy (split children, boss minions).
pub fn spawn_enemy(world: &mut World, enemy: Enemy) -> Entity {
    world.spawn((enemy,))
}

/// Split `total` XP across `count` orbs. The remainder goes to the first orb.
pub fn split_xp(total: u32, count: u32) -> Vec<u32> {
    let count = count.max(1);
    let share = total / count;
    let remainder = total % count;
    (0..count)
        .map(|i| if i == 0 { share + remainder } else { share })
        .collect()
}

/// Burst the XP reward of a dead enemy into 3..=8 orbs that pop up and out.
pub fn spawn_orbs(world: &mut World, rng: &mut impl Rng, at: Vec3, xp: u32) {
    let count = rng.gen_range(ORB_COUNT_MIN..=ORB_COUNT_MAX);
    let origin = at + Vec3::Y * ORB_SPAWN_LIFT;
    for value in split_xp(xp, count) {
        let velocity = Vec3::new(
            rng.gen_range(-ORB_SCATTER_SPEED..=ORB_SCATTER_SPEED),
            rng.gen_range(ORB_POP_MIN..=ORB_POP_MAX),
            rng.gen_range(-ORB_SCATTER_SPEED..=ORB_SCATTER_SPEED),
        );
        world.spawn((XpOrb {
            position: origin,
            velocity,
            value,
            active: true,
        },));
    }
}

pub fn spawn_loot(
    world: &mut World,
    rng: &mut impl Rng,
    at: Vec3,
    kind: LootKind,
    weapon_tier: u8,
) -> Entity {
    let bob = rng.gen_range(0.0..std::f32::consts::TAU);
    world.spawn((LootDrop::new(kind, weapon_tier, at, bob),))
}

/// Tier-1 walkers that do not split again, scattered around `at`.
pub fn split_children(rng: &mut impl Rng, at: Vec3) -> Vec<Enemy> {
    let count = rng.gen_range(SPLIT_CHILDREN_MIN..=SPLIT_CHILDREN_MAX);
    (0..count)
        .map(|_| {
            let offset = Vec3::new(
                rng.gen_range(-SPLIT_SCATTER..=SPLIT_SCATTER),
                0.0,
                rng.gen_range(-SPLIT_SCATTER..=SPLIT_SCATTER),
            );
            Enemy::split_child(1, at + offset)
        })
        .collect()
}

/// A boss minion: a tier-1 walker near the boss.
pub fn boss_minion(rng: &mut impl Rng, boss_at: Vec3) -> Enemy {
    let offset = Vec3::new(
        rng.gen_range(-BOSS_MINION_SCATTER..=BOSS_MINION_SCATTER),
        0.0,
        rng.gen_range(-BOSS_MINION_SCATTER..=BOSS_MINION_SCATTER),
    );
    Enemy::split_child(1, boss_at + offset)
}
