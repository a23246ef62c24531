//! Player shot flight: arcing ballistics, ground impact and range expiry.

use horde_core::constants::{FX_HIT_SPARKS, FX_SHELL_IMPACT};
use horde_core::enums::{FxColor, ShotKind};
use horde_core::events::{FxEvent, SoundCue};
use horde_core::types::{PlayerShot, ShotFate};

pub fn run(shots: &mut [PlayerShot], dt: f32, fx: &mut Vec<FxEvent>) {
    for shot in shots.iter_mut() {
        if !shot.shot.active {
            continue;
        }
        if shot.advance(dt) != ShotFate::HitGround {
            continue;
        }
        let at = shot.shot.position;
        match shot.kind {
            ShotKind::Normal => {
                fx.push(FxEvent::burst(at, FxColor::Yellow, FX_HIT_SPARKS));
                fx.push(FxEvent::Sound { cue: SoundCue::Crack });
            }
            ShotKind::Explosive => {
                fx.push(FxEvent::burst(at, FxColor::Orange, FX_SHELL_IMPACT));
                fx.push(FxEvent::Sound {
                    cue: SoundCue::Explosion,
                });
            }
        }
    }
}
