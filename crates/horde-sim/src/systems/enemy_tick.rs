//! Enemy tick: advance every living enemy and collect minion requests.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use tracing::debug;

use horde_ai::{Enemy, EnemySignal};

use crate::world_setup;

/// Minions requested this frame go to `pending`, never into the world
/// mid-query.
pub fn run(world: &mut World, dt: f32, player: Vec3, rng: &mut impl Rng, pending: &mut Vec<Enemy>) {
    for (_entity, enemy) in world.query_mut::<&mut Enemy>() {
        if !enemy.is_alive() {
            continue;
        }
        match enemy.update(dt, player, rng) {
            Some(EnemySignal::MinionRequested) => {
                pending.push(world_setup::boss_minion(rng, enemy.body.position));
            }
            Some(EnemySignal::FuseExpired) => {
                debug!(x = enemy.body.position.x, z = enemy.body.position.z, "exploder fuse expired");
            }
            None => {}
        }
    }
}
