//! Combat engine: the per-frame resolution loop.
//!
//! `CombatEngine` owns the hecs world, the wave director and every buffer
//! the systems share. It processes host commands, runs all systems in a
//! fixed order and produces `FrameSnapshot`s. Headless and seedable, so a
//! run can be replayed in tests.

use std::collections::VecDeque;

use glam::{Quat, Vec3};
use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use horde_ai::Enemy;
use horde_core::commands::SimCommand;
use horde_core::config::TuningConfig;
use horde_core::constants::{FX_PLAYER_DEATH, MAX_TIME_SCALE};
use horde_core::enums::{EnemyKind, FxColor, SessionPhase};
use horde_core::events::FxEvent;
use horde_core::state::FrameSnapshot;
use horde_core::types::{PlayerShot, WeaponStats};

use crate::collab::PlayerLink;
use crate::director::WaveDirector;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same run.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f32,
    pub tuning: TuningConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            tuning: TuningConfig::default(),
        }
    }
}

pub struct CombatEngine {
    world: World,
    seed: u64,
    rng: ChaCha8Rng,
    tuning: TuningConfig,
    director: WaveDirector,
    phase: SessionPhase,
    time_scale: f32,
    tick: u64,
    elapsed_secs: f32,
    command_queue: VecDeque<SimCommand>,
    player_shots: Vec<PlayerShot>,
    /// Enemies born this frame (split children, minions), spliced in at cleanup.
    pending: Vec<Enemy>,
    despawn_buffer: Vec<Entity>,
    fx: Vec<FxEvent>,
}

impl CombatEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tuning: config.tuning,
            director: WaveDirector::new(),
            phase: SessionPhase::Active,
            time_scale: config.time_scale.clamp(0.0, MAX_TIME_SCALE),
            tick: 0,
            elapsed_secs: 0.0,
            command_queue: VecDeque::new(),
            player_shots: Vec::new(),
            pending: Vec::new(),
            despawn_buffer: Vec::new(),
            fx: Vec::new(),
        }
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance one frame of `dt` real seconds and return the resulting snapshot.
    pub fn tick(&mut self, dt: f32, player: &mut impl PlayerLink) -> FrameSnapshot {
        self.process_commands();

        if self.phase == SessionPhase::Active {
            let scaled = dt.max(0.0) * self.time_scale;
            self.run_systems(scaled, player);
            self.tick += 1;
            self.elapsed_secs += scaled;
        }

        let fx = std::mem::take(&mut self.fx);
        systems::snapshot::build_snapshot(
            &self.world,
            self.tick,
            self.elapsed_secs,
            self.phase,
            self.director.hud(),
            &self.player_shots,
            fx,
        )
    }

    /// Fire the player's weapon from `origin` along `direction` (flattened to
    /// the ground plane). Returns how many shots left the muzzle.
    pub fn fire_player_shot(&mut self, origin: Vec3, direction: Vec3, weapon: &WeaponStats) -> usize {
        if self.phase != SessionPhase::Active {
            return 0;
        }
        let aim = Vec3::new(direction.x, 0.0, direction.z).normalize_or_zero();
        if aim == Vec3::ZERO {
            return 0;
        }

        let pellets = weapon.pellets.max(1);
        for i in 0..pellets {
            let offset_deg = if pellets == 1 {
                if weapon.spread_deg > 0.0 {
                    let half = weapon.spread_deg * 0.5;
                    self.rng.gen_range(-half..=half)
                } else {
                    0.0
                }
            } else {
                -weapon.spread_deg * 0.5 + weapon.spread_deg * i as f32 / (pellets - 1) as f32
            };
            let dir = Quat::from_rotation_y(offset_deg.to_radians()) * aim;
            self.player_shots.push(PlayerShot::launch(origin, dir, weapon));
        }
        pellets as usize
    }

    /// Place one enemy through the placement collaborator, outside the wave
    /// schedule.
    pub fn spawn_enemy(&mut self, kind: EnemyKind, tier: u8, position: Vec3) -> Entity {
        let enemy = Enemy::spawn(kind, tier, position, self.director.wave(), &mut self.rng);
        world_setup::spawn_enemy(&mut self.world, enemy)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_secs
    }

    pub fn tuning(&self) -> &TuningConfig {
        &self.tuning
    }

    pub fn director(&self) -> &WaveDirector {
        &self.director
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player_shots(&self) -> &[PlayerShot] {
        &self.player_shots
    }

    /// Enemies currently in the registry.
    pub fn enemy_count(&self) -> usize {
        let mut q = self.world.query::<&Enemy>();
        q.iter().count()
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::ForceSkipWave => {
                if matches!(self.phase, SessionPhase::Active | SessionPhase::Paused) {
                    self.director.force_skip();
                }
            }
            SimCommand::Pause => {
                if self.phase == SessionPhase::Active {
                    self.phase = SessionPhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == SessionPhase::Paused {
                    self.phase = SessionPhase::Active;
                }
            }
            SimCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
            }
            SimCommand::Restart => self.restart(),
        }
    }

    fn restart(&mut self) {
        info!(seed = self.seed, "restarting session");
        self.world.clear();
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.director.reset();
        self.phase = SessionPhase::Active;
        self.tick = 0;
        self.elapsed_secs = 0.0;
        self.player_shots.clear();
        self.pending.clear();
        self.despawn_buffer.clear();
        self.fx.clear();
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32, player: &mut impl PlayerLink) {
        // 0a. Wave director, spawn placement, completion bonus
        let victory = systems::waves::run(
            &mut self.world,
            &mut self.director,
            &mut self.rng,
            dt,
            player,
            &self.tuning,
            &mut self.fx,
        );
        if victory {
            self.phase = SessionPhase::Victory;
            return;
        }
        // 0b. Player shot flight
        systems::shots::run(&mut self.player_shots, dt, &mut self.fx);
        // 1. Enemy behavior, minion requests
        systems::enemy_tick::run(
            &mut self.world,
            dt,
            player.position(),
            &mut self.rng,
            &mut self.pending,
        );
        // 2. Contact damage over time
        systems::contact::run(&self.world, dt, player, &self.tuning);
        // 3. Exploder detonations
        if !self.check_player(&*player) {
            systems::detonation::run(&mut self.world, player, &mut self.fx);
        }
        // 4. Enemy projectiles vs player
        if !self.check_player(&*player) {
            systems::enemy_fire::run(&mut self.world, player, &self.tuning, &mut self.fx);
        }
        if !self.check_player(&*player) {
            // 5. Player shots vs enemies, death payout
            systems::player_fire::run(
                &mut self.world,
                &mut self.player_shots,
                &mut self.rng,
                &mut self.pending,
                &mut self.fx,
            );
            // 6. XP orbs and loot pickup
            systems::orbs::run(&mut self.world, dt, player, &self.tuning);
            systems::loot::run(&mut self.world, dt, player, &self.tuning, &mut self.fx);
        }
        // 7. Cleanup and splice
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.pending,
            &mut self.player_shots,
        );
    }

    /// Flip to game over the first time the player reports death. Returns
    /// true once the session is over.
    fn check_player(&mut self, player: &impl PlayerLink) -> bool {
        if self.phase == SessionPhase::GameOver {
            return true;
        }
        if player.is_dead() {
            warn!(wave = self.director.wave(), tick = self.tick, "player died");
            self.fx.push(FxEvent::burst(
                player.position(),
                FxColor::SkyBlue,
                FX_PLAYER_DEATH,
            ));
            self.phase = SessionPhase::GameOver;
            return true;
        }
        false
    }
}
