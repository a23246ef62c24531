//! Loot drops: age and bob, then resolve at most one pickup per frame.

use hecs::World;
use tracing::debug;

use horde_core::config::TuningConfig;
use horde_core::constants::{FX_HEALTH_PICKUP, FX_MAGNET_PICKUP, FX_WEAPON_PICKUP};
use horde_core::enums::{FxColor, LootKind, WeaponKind};
use horde_core::events::FxEvent;
use horde_core::types::LootDrop;

use crate::collab::PlayerLink;

/// Returns the kind picked up this frame, if any.
pub fn run(
    world: &mut World,
    dt: f32,
    player: &mut impl PlayerLink,
    tuning: &TuningConfig,
    fx: &mut Vec<FxEvent>,
) -> Option<LootKind> {
    let at = player.position();
    let mut picked = None;

    for (_entity, drop) in world.query_mut::<&mut LootDrop>() {
        drop.advance(dt);
        if !drop.active || picked.is_some() {
            continue;
        }
        if drop.position.distance(at) >= tuning.loot_pickup_radius {
            continue;
        }
        drop.active = false;
        picked = Some(drop.kind);

        match drop.kind {
            LootKind::Magnet => {
                player.activate_magnet_buff(tuning.magnet_buff_secs);
                fx.push(FxEvent::burst(at, FxColor::Blue, FX_MAGNET_PICKUP));
            }
            LootKind::HealthPack => {
                player.heal(tuning.heal_amount);
                fx.push(FxEvent::burst(at, FxColor::Red, FX_HEALTH_PICKUP));
            }
            LootKind::Weapon => {
                player.switch_weapon(WeaponKind::from_tier(drop.weapon_tier));
                fx.push(FxEvent::burst(at, FxColor::Yellow, FX_WEAPON_PICKUP));
            }
            LootKind::None => {}
        }
        debug!(kind = ?drop.kind, tier = drop.weapon_tier, "loot picked up");
    }
    picked
}
