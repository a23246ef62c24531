//! Contact damage: living enemies touching the player hurt it over time.

use hecs::World;

use horde_ai::Enemy;
use horde_core::config::TuningConfig;

use crate::collab::PlayerLink;

pub fn run(world: &World, dt: f32, player: &mut impl PlayerLink, tuning: &TuningConfig) {
    let damage = tuning.contact_damage_per_sec * dt;
    let mut q = world.query::<&Enemy>();
    for (_entity, enemy) in q.iter() {
        if !enemy.is_alive() {
            continue;
        }
        let reach = enemy.body.radius + tuning.player_radius;
        if enemy.body.position.distance(player.position()) < reach {
            player.take_damage(damage);
        }
    }
}
