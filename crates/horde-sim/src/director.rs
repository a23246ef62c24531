//! Wave director: wave lifecycle state machine and spawn composition.
//!
//! WAITING -> SPAWNING -> FIGHTING -> COMPLETED -> WAITING.
//!
//! The director never touches the world. It raises a "ready" signal while
//! spawning; the placement collaborator asks [`WaveDirector::next_spawn`],
//! places the enemy, and acknowledges with
//! [`WaveDirector::consume_spawn_signal`].

use rand::Rng;
use tracing::{info, warn};

use horde_core::constants::*;
use horde_core::enums::{EnemyKind, WaveState, WaveType};
use horde_core::state::WaveHud;
use horde_core::types::{SpawnEntry, WaveConfig};

/// Percentage split of the base count per archetype, by wave bracket.
fn unlock_table(wave: u32) -> &'static [(EnemyKind, u32)] {
    match wave {
        0..=4 => &[(EnemyKind::Walker, 100)],
        5..=9 => &[(EnemyKind::Walker, 65), (EnemyKind::Shooter, 35)],
        10..=14 => &[
            (EnemyKind::Walker, 45),
            (EnemyKind::Shooter, 35),
            (EnemyKind::Charger, 20),
        ],
        _ => &[
            (EnemyKind::Walker, 35),
            (EnemyKind::Shooter, 30),
            (EnemyKind::Charger, 20),
            (EnemyKind::Exploder, 15),
        ],
    }
}

fn percent_of(count: u32, pct: u32) -> u32 {
    count * pct / 100
}

pub fn wave_type_for(wave: u32) -> WaveType {
    if wave % BOSS_WAVE_PERIOD == 0 {
        WaveType::Boss
    } else {
        WaveType::Normal
    }
}

pub fn base_count(wave: u32) -> u32 {
    WAVE_BASE_COUNT + WAVE_COUNT_PER_WAVE * wave
}

pub fn spawn_interval_for(wave: u32) -> f32 {
    match wave {
        0..=5 => 0.8,
        6..=15 => 0.5,
        _ => 0.3,
    }
}

/// Build the composition for `wave`. Per-type counts truncate independently,
/// so the total may fall a little short of the base count.
pub fn generate_wave_config(wave: u32, rng: &mut impl Rng) -> WaveConfig {
    let wave_type = wave_type_for(wave);
    let base = base_count(wave);
    let mut entries = Vec::new();

    let spawn_interval = match wave_type {
        WaveType::Boss => {
            entries.push(SpawnEntry::new(EnemyKind::Boss, 4, 1));
            let escort = (base as f32 * BOSS_ESCORT_FRACTION).floor() as u32;
            if escort > 0 {
                entries.push(SpawnEntry::new(EnemyKind::Walker, 1, escort));
            }
            BOSS_SPAWN_INTERVAL_SECS
        }
        WaveType::Normal => {
            for &(kind, pct) in unlock_table(wave) {
                let count = percent_of(base, pct);
                if count > 0 {
                    entries.push(SpawnEntry::new(kind, 1, count));
                }
            }
            let running: u32 = entries.iter().map(|e| e.count).sum();
            let mut cohorts = Vec::new();
            if (10..20).contains(&wave) {
                cohorts.push(SpawnEntry::new(EnemyKind::Walker, 2, percent_of(running, 25)));
            } else if wave >= 20 {
                cohorts.push(SpawnEntry::new(EnemyKind::Walker, 2, percent_of(running, 30)));
                cohorts.push(SpawnEntry::new(EnemyKind::Shooter, 3, percent_of(running, 15)));
            }
            entries.extend(cohorts.into_iter().filter(|e| e.count > 0));
            spawn_interval_for(wave)
        }
    };

    if rng.gen_range(0..100) < JUMPER_COHORT_CHANCE {
        let count = rng.gen_range(JUMPER_COHORT_MIN..=JUMPER_COHORT_MAX);
        entries.insert(0, SpawnEntry::new(EnemyKind::Jumper, 1, count));
    }

    let total_enemies = entries.iter().map(|e| e.count).sum();
    WaveConfig {
        wave_number: wave,
        wave_type,
        entries,
        total_enemies,
        spawn_interval,
    }
}

/// Bonus XP for clearing `wave`.
pub fn bonus_xp_for(wave: u32, wave_type: WaveType) -> u32 {
    let base = wave * WAVE_BONUS_XP_PER_WAVE;
    match wave_type {
        WaveType::Boss => base * BOSS_WAVE_BONUS_MULTIPLIER,
        WaveType::Normal => base,
    }
}

#[derive(Debug, Clone)]
pub struct WaveDirector {
    state: WaveState,
    wave: u32,
    /// WAITING / COMPLETED countdown.
    wave_timer: f32,
    spawn_timer: f32,
    spawned: u32,
    ready: bool,
    config: WaveConfig,
    /// Bonus raised on entering COMPLETED, waiting to be credited.
    pending_bonus: Option<u32>,
    /// Last wave whose bonus was raised.
    bonus_paid_wave: u32,
}

impl Default for WaveDirector {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveDirector {
    pub fn new() -> Self {
        Self {
            state: WaveState::Waiting,
            wave: 0,
            wave_timer: WAVE_WAIT_SECS,
            spawn_timer: 0.0,
            spawned: 0,
            ready: false,
            config: WaveConfig::default(),
            pending_bonus: None,
            bonus_paid_wave: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance the lifecycle. `alive` is the current registry size.
    pub fn update(&mut self, dt: f32, alive: usize, rng: &mut impl Rng) {
        match self.state {
            WaveState::Waiting => {
                self.wave_timer -= dt;
                if self.wave_timer <= 0.0 {
                    self.start_next_wave(rng);
                }
            }
            WaveState::Spawning => {
                if self.spawned >= self.config.total_enemies {
                    self.state = WaveState::Fighting;
                    return;
                }
                self.spawn_timer -= dt;
                if self.spawn_timer <= 0.0 {
                    self.ready = true;
                    self.spawn_timer = self.config.spawn_interval;
                }
            }
            WaveState::Fighting => {
                if alive == 0 {
                    self.complete();
                }
            }
            WaveState::Completed => {
                self.wave_timer -= dt;
                if self.wave_timer <= 0.0 {
                    self.state = WaveState::Waiting;
                    self.wave_timer = WAVE_WAIT_SECS;
                }
            }
        }
    }

    fn start_next_wave(&mut self, rng: &mut impl Rng) {
        self.wave += 1;
        self.spawned = 0;
        self.ready = false;
        self.config = generate_wave_config(self.wave, rng);
        self.state = WaveState::Spawning;
        self.spawn_timer = 0.0;
        info!(
            wave = self.wave,
            wave_type = ?self.config.wave_type,
            total = self.config.total_enemies,
            interval = self.config.spawn_interval,
            "wave started"
        );
    }

    fn complete(&mut self) {
        self.state = WaveState::Completed;
        self.wave_timer = WAVE_COMPLETE_DELAY_SECS;
        self.ready = false;
        if self.wave > 0 && self.bonus_paid_wave != self.wave {
            self.bonus_paid_wave = self.wave;
            self.pending_bonus = Some(self.bonus_xp());
            info!(wave = self.wave, bonus_xp = self.bonus_xp(), "wave cleared");
        }
    }

    /// Complete the current wave immediately. Undelivered spawns count as
    /// delivered.
    pub fn force_skip(&mut self) {
        warn!(
            wave = self.wave,
            state = ?self.state,
            undelivered = self.remaining(),
            "wave force-skipped"
        );
        self.spawned = self.config.total_enemies;
        self.complete();
    }

    pub fn should_spawn(&self) -> bool {
        self.ready
    }

    /// Entry for the next spawn, walking entries by accumulated count.
    pub fn next_spawn(&self) -> SpawnEntry {
        match self.config.entry_for_spawn(self.spawned) {
            Some(entry) => *entry,
            None => {
                warn!(
                    wave = self.wave,
                    spawned = self.spawned,
                    total = self.config.total_enemies,
                    "spawn cursor past wave config, using fallback walker"
                );
                SpawnEntry::new(EnemyKind::Walker, 1, 1)
            }
        }
    }

    /// Acknowledge one delivered spawn.
    pub fn consume_spawn_signal(&mut self) {
        self.ready = false;
        self.spawned += 1;
    }

    /// Take the completion bonus, if one is owed. Yields once per wave.
    pub fn take_completion_bonus(&mut self) -> Option<u32> {
        self.pending_bonus.take()
    }

    pub fn bonus_xp(&self) -> u32 {
        bonus_xp_for(self.wave, self.config.wave_type)
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn state(&self) -> WaveState {
        self.state
    }

    pub fn wave_type(&self) -> WaveType {
        self.config.wave_type
    }

    pub fn countdown(&self) -> f32 {
        match self.state {
            WaveState::Waiting | WaveState::Completed => self.wave_timer.max(0.0),
            _ => 0.0,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.config.total_enemies.saturating_sub(self.spawned)
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn hud(&self) -> WaveHud {
        WaveHud {
            wave_number: self.wave,
            state: self.state,
            wave_type: self.wave_type(),
            countdown: self.countdown(),
            remaining: self.remaining(),
            bonus_xp: self.bonus_xp(),
        }
    }
}
