//! Cleanup system: culls dead enemies, spent orbs and loot, drops finished
//! player shots, then splices queued enemies into the world.

use hecs::{Entity, World};

use horde_ai::Enemy;
use horde_core::types::{LootDrop, PlayerShot, XpOrb};

use crate::world_setup;

/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    pending: &mut Vec<Enemy>,
    shots: &mut Vec<PlayerShot>,
) {
    despawn_buffer.clear();

    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if !enemy.is_alive() {
            despawn_buffer.push(entity);
        }
    }

    for (entity, orb) in world.query_mut::<&XpOrb>() {
        if !orb.active {
            despawn_buffer.push(entity);
        }
    }

    for (entity, drop) in world.query_mut::<&LootDrop>() {
        if !drop.active {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    shots.retain(|s| s.shot.active);

    for enemy in pending.drain(..) {
        world_setup::spawn_enemy(world, enemy);
    }
}
