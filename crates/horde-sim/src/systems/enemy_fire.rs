//! Enemy projectiles against the player.

use hecs::World;

use horde_ai::{Behavior, Enemy};
use horde_core::config::TuningConfig;
use horde_core::constants::{FX_BOSS_HIT, FX_SHOOTER_HIT};
use horde_core::enums::FxColor;
use horde_core::events::FxEvent;

use crate::collab::PlayerLink;

/// Only projectiles of living owners are checked. A hit deactivates the
/// projectile, so it lands at most once.
pub fn run(
    world: &mut World,
    player: &mut impl PlayerLink,
    tuning: &TuningConfig,
    fx: &mut Vec<FxEvent>,
) {
    for (_entity, enemy) in world.query_mut::<&mut Enemy>() {
        if !enemy.is_alive() {
            continue;
        }
        let (color, count) = match enemy.behavior {
            Behavior::Boss(_) => (FxColor::Orange, FX_BOSS_HIT),
            _ => (FxColor::Red, FX_SHOOTER_HIT),
        };
        for shot in enemy.shots.iter_mut() {
            if !shot.active {
                continue;
            }
            if shot.overlaps(player.position(), tuning.player_radius) {
                player.take_damage(shot.damage);
                shot.active = false;
                fx.push(FxEvent::burst(shot.position, color, count));
            }
        }
    }
}
