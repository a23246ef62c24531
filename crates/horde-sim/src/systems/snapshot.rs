//! Snapshot system: reads the world and builds a complete FrameSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use horde_ai::Enemy;
use horde_core::enums::SessionPhase;
use horde_core::events::FxEvent;
use horde_core::state::*;
use horde_core::types::{LootDrop, PlayerShot, XpOrb};

pub fn build_snapshot(
    world: &World,
    tick: u64,
    elapsed_secs: f32,
    phase: SessionPhase,
    hud: WaveHud,
    player_shots: &[PlayerShot],
    fx: Vec<FxEvent>,
) -> FrameSnapshot {
    let (enemies, enemy_projectiles) = build_enemies(world);
    FrameSnapshot {
        tick,
        elapsed_secs,
        phase,
        hud,
        enemies,
        enemy_projectiles,
        player_projectiles: player_shots
            .iter()
            .filter(|s| s.shot.active)
            .map(|s| ProjectileView {
                position: s.shot.position,
                radius: s.shot.radius,
            })
            .collect(),
        orbs: build_orbs(world),
        loot: build_loot(world),
        fx,
    }
}

/// Living enemies plus every projectile they still have in flight.
fn build_enemies(world: &World) -> (Vec<EnemyView>, Vec<ProjectileView>) {
    let mut enemies = Vec::new();
    let mut projectiles = Vec::new();
    let mut q = world.query::<&Enemy>();
    for (_entity, enemy) in q.iter() {
        if !enemy.is_alive() {
            continue;
        }
        enemies.push(enemy.view());
        projectiles.extend(
            enemy
                .shots
                .iter()
                .filter(|s| s.active)
                .map(|s| ProjectileView {
                    position: s.position,
                    radius: s.radius,
                }),
        );
    }
    (enemies, projectiles)
}

fn build_orbs(world: &World) -> Vec<OrbView> {
    let mut q = world.query::<&XpOrb>();
    q.iter()
        .filter(|(_, orb)| orb.active)
        .map(|(_, orb)| OrbView {
            position: orb.position,
            value: orb.value,
        })
        .collect()
}

fn build_loot(world: &World) -> Vec<LootView> {
    let mut q = world.query::<&LootDrop>();
    q.iter()
        .filter(|(_, drop)| drop.active)
        .map(|(_, drop)| LootView {
            kind: drop.kind,
            weapon_tier: drop.weapon_tier,
            position: drop.position,
            life: drop.life,
        })
        .collect()
}
