//! Simulation constants and tuning parameters.
//!
//! Values that a designer may want to tweak at runtime are mirrored in
//! [`crate::config::TuningConfig`]; everything else is fixed here.

// --- Frame stepping ---

/// Nominal frame delta used by headless runs (seconds).
pub const NOMINAL_DT: f32 = 1.0 / 60.0;

/// Upper bound on the time scale multiplier.
pub const MAX_TIME_SCALE: f32 = 4.0;

// --- Wave director ---

/// Countdown before the first wave and between waves (seconds).
pub const WAVE_WAIT_SECS: f32 = 1.0;

/// Delay after a wave is cleared before the next countdown (seconds).
pub const WAVE_COMPLETE_DELAY_SECS: f32 = 1.0;

/// Every Nth wave is a boss wave.
pub const BOSS_WAVE_PERIOD: u32 = 5;

/// Enemy count formula: BASE + PER_WAVE * wave.
pub const WAVE_BASE_COUNT: u32 = 15;
pub const WAVE_COUNT_PER_WAVE: u32 = 3;

/// Share of the base count that escorts a boss.
pub const BOSS_ESCORT_FRACTION: f32 = 0.3;

/// Spawn interval on boss waves (seconds).
pub const BOSS_SPAWN_INTERVAL_SECS: f32 = 1.0;

/// Percent chance that a wave opens with a jumper cohort.
pub const JUMPER_COHORT_CHANCE: u32 = 50;
pub const JUMPER_COHORT_MIN: u32 = 2;
pub const JUMPER_COHORT_MAX: u32 = 4;

/// Bonus XP per wave number on clear; boss waves multiply it.
pub const WAVE_BONUS_XP_PER_WAVE: u32 = 50;
pub const BOSS_WAVE_BONUS_MULTIPLIER: u32 = 5;

// --- Enemy shared ---

/// Hit-flash duration after taking damage (seconds).
pub const HIT_FLASH_SECS: f32 = 0.1;

/// Fall speed for grounded archetypes (units/s).
pub const ENEMY_FALL_SPEED: f32 = 10.0;

/// Damage large enough to kill anything.
pub const LETHAL_DAMAGE: f32 = 9999.0;

// --- Shooter ---

pub const SHOOTER_RETREAT_DISTANCE: f32 = 15.0;
pub const SHOOTER_BULLET_SPEED: f32 = 45.0;
pub const SHOOTER_BULLET_DAMAGE: f32 = 10.0;
pub const SHOOTER_BULLET_RADIUS: f32 = 0.1;
/// Bullets live long enough to cover 75 units.
pub const SHOOTER_BULLET_LIFE_SECS: f32 = 75.0 / SHOOTER_BULLET_SPEED;
/// Muzzle height as a fraction of body radius.
pub const SHOOTER_MUZZLE_HEIGHT: f32 = 0.7;

// --- Charger ---

pub const CHARGER_TRIGGER_MIN: f32 = 7.5;
pub const CHARGER_TRIGGER_MAX: f32 = 15.0;
pub const CHARGER_TELEGRAPH_SECS: f32 = 0.2;
pub const CHARGER_DASH_SECS: f32 = 0.16;
pub const CHARGER_COOLDOWN_SECS: f32 = 2.0;
pub const CHARGER_SLIDE_SECS: f32 = 0.5;
/// Slide starts at this fraction of dash speed.
pub const CHARGER_SLIDE_FACTOR: f32 = 0.4;

// --- Exploder ---

/// Arms once within this multiple of the explosion radius.
pub const EXPLODER_ARM_FACTOR: f32 = 1.5;
pub const EXPLODER_FUSE_SECS: f32 = 1.0;

// --- Jumper ---

pub const JUMPER_HOP_INTERVAL_SECS: f32 = 1.5;
pub const JUMPER_HOP_VELOCITY: f32 = 10.0;
pub const JUMPER_GRAVITY: f32 = 30.0;
/// Horizontal speed multiplier while airborne.
pub const JUMPER_AIR_SPEED_FACTOR: f32 = 2.0;

// --- Rat ---

pub const RAT_HOP_VELOCITY: f32 = 4.0;
pub const RAT_GRAVITY: f32 = 15.0;

// --- Boss ---

pub const BOSS_PHASE_TWO_THRESHOLD: f32 = 0.66;
pub const BOSS_PHASE_THREE_THRESHOLD: f32 = 0.33;
pub const BOSS_PHASE_TWO_SPEED: f32 = 1.3;
pub const BOSS_PHASE_TWO_COOLDOWN: f32 = 0.8;
pub const BOSS_PHASE_THREE_SPEED: f32 = 1.5;
pub const BOSS_PHASE_THREE_COOLDOWN: f32 = 0.6;
pub const BOSS_BARRAGE_COUNT: usize = 5;
pub const BOSS_BARRAGE_COUNT_ENRAGED: usize = 8;
pub const BOSS_PROJECTILE_SPEED: f32 = 12.0;
pub const BOSS_PROJECTILE_DAMAGE: f32 = 20.0;
pub const BOSS_PROJECTILE_RADIUS: f32 = 0.4;
pub const BOSS_PROJECTILE_LIFE_SECS: f32 = 8.0;
pub const BOSS_RELOCATE_MIN: f32 = 10.0;
pub const BOSS_RELOCATE_MAX: f32 = 15.0;
/// Distance the teleporter lands from the player.
pub const BOSS_TELEPORT_DISTANCE: f32 = 10.0;
pub const BOSS_GLOW_RATE: f32 = 3.0;
/// Boss health scales by 1 + wave / WAVE_SCALING_DIVISOR (1.25 on wave 5).
pub const WAVE_SCALING_DIVISOR: f32 = 20.0;
/// Minions appear within this x/z offset of the boss.
pub const BOSS_MINION_SCATTER: f32 = 3.0;

// --- Player shots ---

/// Height of the player's body center above the floor.
pub const PLAYER_BODY_HEIGHT: f32 = 0.5;

pub const PLAYER_SHOT_HEIGHT: f32 = 0.5;
pub const PLAYER_SHOT_LIFT: f32 = 4.0;
pub const PLAYER_SHOT_GRAVITY: f32 = 25.0;
pub const PLAYER_SHOT_LIFE_SECS: f32 = 5.0;
/// Max travel is this multiple of shot speed.
pub const PLAYER_SHOT_RANGE_FACTOR: f32 = 2.0;

// --- Death payout ---

pub const ORB_COUNT_MIN: u32 = 3;
pub const ORB_COUNT_MAX: u32 = 8;
pub const ORB_SPAWN_LIFT: f32 = 0.5;
pub const ORB_SCATTER_SPEED: f32 = 6.0;
pub const ORB_POP_MIN: f32 = 8.0;
pub const ORB_POP_MAX: f32 = 15.0;
pub const ORB_GRAVITY: f32 = 30.0;
pub const ORB_REST_HEIGHT: f32 = 0.2;
pub const SPLIT_CHILDREN_MIN: u32 = 2;
pub const SPLIT_CHILDREN_MAX: u32 = 3;
pub const SPLIT_SCATTER: f32 = 1.0;

// --- Loot ---

/// Magnet buff multiplies the orb pull radius.
pub const MAGNET_BUFF_RADIUS_FACTOR: f32 = 2.0;

pub const LOOT_HEIGHT: f32 = 0.5;
pub const LOOT_LIFE_SECS: f32 = 15.0;
pub const LOOT_BOB_AMPLITUDE: f32 = 0.2;
pub const LOOT_BOB_RATE: f32 = 3.0;

// --- Effects ---

pub const FX_HIT_SPARKS: u32 = 5;
pub const FX_DEATH_BURST: u32 = 20;
pub const FX_DETONATION: u32 = 80;
pub const FX_SHOOTER_HIT: u32 = 10;
pub const FX_BOSS_HIT: u32 = 15;
pub const FX_WAVE_CLEAR: u32 = 50;
pub const FX_MAGNET_PICKUP: u32 = 30;
pub const FX_HEALTH_PICKUP: u32 = 20;
pub const FX_WEAPON_PICKUP: u32 = 40;
pub const FX_SHELL_IMPACT: u32 = 50;
pub const FX_PLAYER_DEATH: u32 = 50;
