//! horde-harness: headless driver for the HORDE combat simulation.
//!
//! Usage:
//!   horde-harness run --seed 42 --waves 5 --config tuning.json
//!   horde-harness plan --seed 42 --waves 25

use std::path::PathBuf;
use std::process;

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use horde_core::config::TuningConfig;
use horde_core::constants::NOMINAL_DT;
use horde_core::enums::{SessionPhase, WaveState};
use horde_core::state::FrameSnapshot;
use horde_core::types::WeaponStats;
use horde_sim::director::generate_wave_config;
use horde_sim::{CombatEngine, SimConfig, StandInPlayer};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "plan" => cmd_plan(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn print_usage() {
    eprintln!(
        "horde-harness: HORDE headless combat driver\n\
         \n\
         Commands:\n\
         \n\
         run       Play a session with an auto-aiming stand-in player\n\
         \n\
           --seed <N>         RNG seed (default: 42)\n\
           --waves <N>        Stop once this wave is cleared (default: 5)\n\
           --config <path>    Tuning JSON overrides (optional)\n\
           --max-secs <N>     Simulated time limit (default: 900)\n\
           --mortal           Let the stand-in player die\n\
         \n\
         plan      Print generated wave compositions\n\
         \n\
           --seed <N>         RNG seed (default: 42)\n\
           --waves <N>        Number of waves to print (default: 25)\n\
         \n\
         Examples:\n\
         \n\
           horde-harness run --seed 7 --waves 10\n\
           RUST_LOG=debug horde-harness run --config tuning.json --mortal\n"
    );
}

fn parse_u64(args: &[String], flag: &str, default: u64) -> u64 {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<u64>() {
                return n;
            }
        }
    }
    default
}

fn parse_config(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == "--config" && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let seed = parse_u64(args, "--seed", 42);
    let target_wave = parse_u64(args, "--waves", 5) as u32;
    let max_secs = parse_u64(args, "--max-secs", 900) as f32;

    let tuning = match parse_config(args) {
        Some(path) => match TuningConfig::load(&path) {
            Ok(t) => {
                info!(path = %path.display(), "loaded tuning overrides");
                t
            }
            Err(e) => {
                eprintln!("Error: {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => TuningConfig::default(),
    };

    let mut engine = CombatEngine::new(SimConfig {
        seed,
        tuning,
        ..Default::default()
    });
    let mut player = StandInPlayer {
        mortal: has_flag(args, "--mortal"),
        ..Default::default()
    };

    info!(seed, target_wave, "session started");

    let mut snapshot = engine.tick(NOMINAL_DT, &mut player);
    let mut cooldown = 0.0_f32;
    let mut shots_fired = 0_usize;
    let mut last_state = snapshot.hud.state;

    while engine.elapsed_secs() < max_secs {
        player.tick_buffs(NOMINAL_DT);
        cooldown -= NOMINAL_DT;
        if cooldown <= 0.0 && !snapshot.enemies.is_empty() {
            let weapon = WeaponStats::for_kind(player.weapon);
            shots_fired += engine.fire_player_shot(player.position, aim(&snapshot, player.position), &weapon);
            cooldown = weapon.fire_interval;
        }

        snapshot = engine.tick(NOMINAL_DT, &mut player);

        let hud = snapshot.hud;
        if hud.state != last_state {
            info!(
                wave = hud.wave_number,
                state = ?hud.state,
                enemies = snapshot.enemies.len(),
                health = player.health,
                xp = player.xp,
                "wave state changed"
            );
            last_state = hud.state;
        }
        if snapshot.phase != SessionPhase::Active {
            break;
        }
        if hud.state == WaveState::Completed && hud.wave_number >= target_wave {
            break;
        }
    }

    println!(
        "phase={:?} wave={} state={:?} secs={:.1} health={:.0} xp={} weapon={:?} shots={}",
        engine.phase(),
        snapshot.hud.wave_number,
        snapshot.hud.state,
        engine.elapsed_secs(),
        player.health,
        player.xp,
        player.weapon,
        shots_fired,
    );
}

/// Nearest enemy on the ground plane, or straight ahead when it stands on
/// the player.
fn aim(snapshot: &FrameSnapshot, from: Vec3) -> Vec3 {
    let nearest = snapshot
        .enemies
        .iter()
        .min_by(|a, b| {
            a.position
                .distance_squared(from)
                .total_cmp(&b.position.distance_squared(from))
        })
        .map(|e| Vec3::new(e.position.x - from.x, 0.0, e.position.z - from.z));
    match nearest {
        Some(dir) if dir.length_squared() > 1e-4 => dir,
        _ => Vec3::X,
    }
}

// --- Plan command ---

fn cmd_plan(args: &[String]) {
    let seed = parse_u64(args, "--seed", 42);
    let waves = parse_u64(args, "--waves", 25) as u32;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for wave in 1..=waves {
        let config = generate_wave_config(wave, &mut rng);
        let entries: Vec<String> = config
            .entries
            .iter()
            .map(|e| format!("{:?}@{}x{}", e.kind, e.tier, e.count))
            .collect();
        println!(
            "wave {:>2} {:?}: total={} interval={:.1}s [{}]",
            wave,
            config.wave_type,
            config.total_enemies,
            config.spawn_interval,
            entries.join(", ")
        );
    }
}
