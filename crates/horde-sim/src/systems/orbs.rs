//! XP orbs: pop, fall, settle, drift toward the player and get collected.

use glam::Vec3;
use hecs::World;

use horde_core::config::TuningConfig;
use horde_core::constants::{ORB_GRAVITY, ORB_REST_HEIGHT};
use horde_core::types::XpOrb;

use crate::collab::PlayerLink;

/// Returns the XP credited this frame.
pub fn run(world: &mut World, dt: f32, player: &mut impl PlayerLink, tuning: &TuningConfig) -> u32 {
    let target = player.position();
    let magnet_radius = tuning.pull_radius(player.has_magnet_buff());

    let mut collected = 0;
    for (_entity, orb) in world.query_mut::<&mut XpOrb>() {
        if !orb.active {
            continue;
        }
        if orb.position.y > ORB_REST_HEIGHT || orb.velocity.y > 0.0 {
            orb.velocity.y -= ORB_GRAVITY * dt;
            orb.position += orb.velocity * dt;
        }
        if orb.position.y <= ORB_REST_HEIGHT {
            orb.position.y = ORB_REST_HEIGHT;
            orb.velocity = Vec3::ZERO;
        }

        let dist = orb.position.distance(target);
        if dist < magnet_radius {
            let toward = (target - orb.position).normalize_or_zero();
            orb.position += toward * tuning.magnet_pull_speed * dt;
            orb.velocity = Vec3::ZERO;
        }
        if dist < tuning.orb_pickup_radius {
            orb.active = false;
            collected += orb.value;
        }
    }

    if collected > 0 {
        player.add_xp(collected);
    }
    collected
}
