//! Wave system: advances the director, places due spawns and credits the
//! completion bonus.

use hecs::World;
use rand::Rng;
use tracing::info;

use horde_ai::Enemy;
use horde_core::config::TuningConfig;
use horde_core::constants::FX_WAVE_CLEAR;
use horde_core::enums::FxColor;
use horde_core::events::FxEvent;

use crate::collab::PlayerLink;
use crate::director::WaveDirector;
use crate::world_setup;

/// Returns true when the credited bonus closes out the victory wave.
pub fn run(
    world: &mut World,
    director: &mut WaveDirector,
    rng: &mut impl Rng,
    dt: f32,
    player: &mut impl PlayerLink,
    tuning: &TuningConfig,
    fx: &mut Vec<FxEvent>,
) -> bool {
    let alive = {
        let mut q = world.query::<&Enemy>();
        q.iter().count()
    };
    director.update(dt, alive, rng);

    if director.should_spawn() {
        let entry = director.next_spawn();
        world_setup::spawn_entry(
            world,
            rng,
            &entry,
            director.wave(),
            player.position(),
            (tuning.spawn_ring_min, tuning.spawn_ring_max),
        );
        director.consume_spawn_signal();
    }

    credit_bonus(director, player, tuning, fx)
}

/// Drain the completion bonus into the player. Returns true on victory.
pub fn credit_bonus(
    director: &mut WaveDirector,
    player: &mut impl PlayerLink,
    tuning: &TuningConfig,
    fx: &mut Vec<FxEvent>,
) -> bool {
    let Some(bonus) = director.take_completion_bonus() else {
        return false;
    };
    player.add_xp(bonus);
    fx.push(FxEvent::burst(player.position(), FxColor::Gold, FX_WAVE_CLEAR));

    if director.wave() >= tuning.victory_wave {
        info!(wave = director.wave(), "victory wave cleared");
        return true;
    }
    false
}
