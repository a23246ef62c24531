//! Exploder detonation: an expired fuse hurts the player once if in range,
//! then the exploder is force-killed so it can never go off twice.

use hecs::World;
use tracing::debug;

use horde_ai::Enemy;
use horde_core::constants::FX_DETONATION;
use horde_core::enums::FxColor;
use horde_core::events::{FxEvent, SoundCue};

use crate::collab::PlayerLink;

/// Returns the number of detonations resolved.
pub fn run(world: &mut World, player: &mut impl PlayerLink, fx: &mut Vec<FxEvent>) -> usize {
    let mut detonations = 0;
    for (_entity, enemy) in world.query_mut::<&mut Enemy>() {
        if !enemy.should_explode() {
            continue;
        }
        let Some((radius, damage)) = enemy.blast() else {
            continue;
        };
        let at = enemy.body.position;
        let in_range = at.distance(player.position()) < radius;
        if in_range {
            player.take_damage(damage);
        }
        fx.push(FxEvent::burst(at, FxColor::Green, FX_DETONATION));
        fx.push(FxEvent::Sound {
            cue: SoundCue::Explosion,
        });
        if enemy.detonate() {
            detonations += 1;
            debug!(in_range, damage, "exploder detonated");
        }
    }
    detonations
}
