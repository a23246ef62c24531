//! Tests for the enemy state machines, boss phases and stat profiles.

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use horde_core::constants::*;
use horde_core::enums::*;

use crate::boss::{AttackPattern, Boss};
use crate::enemy::{Behavior, Enemy, EnemySignal};
use crate::jumper::roll_loot;
use crate::profiles::*;
use crate::rat::roll_breed;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

fn spawn(kind: EnemyKind, tier: u8, at: Vec3) -> Enemy {
    Enemy::spawn(kind, tier, at, 1, &mut rng())
}

// ---- Shared body ----

#[test]
fn test_take_damage_latches_dead_once() {
    let mut e = spawn(EnemyKind::Walker, 1, Vec3::ZERO);
    assert!(!e.take_damage(5.0));
    assert!(e.is_alive());
    assert!(e.body.is_flashing());
    assert!(e.take_damage(100.0));
    assert!(!e.is_alive());
    // Further damage never reports a second kill.
    assert!(!e.take_damage(100.0));
    assert!(!e.is_alive());
}

#[test]
fn test_hit_flash_decays() {
    let mut e = spawn(EnemyKind::Walker, 1, Vec3::new(20.0, 0.0, 0.0));
    e.take_damage(1.0);
    let mut r = rng();
    e.update(0.05, Vec3::ZERO, &mut r);
    assert!(e.body.is_flashing());
    e.update(0.06, Vec3::ZERO, &mut r);
    assert!(!e.body.is_flashing());
}

#[test]
fn test_xp_reward_fixed_at_spawn() {
    let e = spawn(EnemyKind::Shooter, 2, Vec3::ZERO);
    assert_eq!(e.xp_reward(), 100);
    assert_eq!(e.body.max_health, 80.0);
}

#[test]
fn test_dead_enemy_does_not_update() {
    let mut e = spawn(EnemyKind::Walker, 1, Vec3::new(10.0, 0.0, 0.0));
    e.take_damage(1000.0);
    let before = e.body.position;
    assert_eq!(e.update(0.1, Vec3::ZERO, &mut rng()), None);
    assert_eq!(e.body.position, before);
}

#[test]
fn test_degenerate_direction_stays_finite() {
    let mut r = rng();
    for kind in [
        EnemyKind::Walker,
        EnemyKind::Shooter,
        EnemyKind::Charger,
        EnemyKind::Exploder,
        EnemyKind::Jumper,
        EnemyKind::Rat,
        EnemyKind::Boss,
    ] {
        let mut e = Enemy::spawn(kind, 1, Vec3::ZERO, 5, &mut r);
        for _ in 0..120 {
            e.update(NOMINAL_DT, Vec3::ZERO, &mut r);
        }
        assert!(e.body.position.is_finite(), "{kind:?} went non-finite");
        for shot in &e.shots {
            assert!(shot.position.is_finite());
        }
    }
}

// ---- Walker ----

#[test]
fn test_walker_seeks_player() {
    let mut e = spawn(EnemyKind::Walker, 1, Vec3::new(20.0, 0.0, 0.0));
    e.update(0.1, Vec3::ZERO, &mut rng());
    assert!((e.body.position.x - 19.5).abs() < 1e-5);
    assert!(e.can_split());
}

#[test]
fn test_split_child_cannot_split() {
    let child = Enemy::split_child(1, Vec3::ZERO);
    assert_eq!(child.kind(), EnemyKind::Walker);
    assert!(!child.can_split());
}

#[test]
fn test_only_walkers_split() {
    for kind in [EnemyKind::Shooter, EnemyKind::Charger, EnemyKind::Exploder, EnemyKind::Boss] {
        assert!(!spawn(kind, 1, Vec3::ZERO).can_split());
    }
}

// ---- Shooter ----

#[test]
fn test_shooter_retreats_when_close() {
    let mut e = spawn(EnemyKind::Shooter, 1, Vec3::new(10.0, 0.0, 0.0));
    e.update(0.1, Vec3::ZERO, &mut rng());
    assert!(e.body.position.x > 10.0);
}

#[test]
fn test_shooter_advances_when_far() {
    let mut e = spawn(EnemyKind::Shooter, 1, Vec3::new(40.0, 0.0, 0.0));
    e.update(0.1, Vec3::ZERO, &mut rng());
    assert!(e.body.position.x < 40.0);
    assert!(e.shots.is_empty(), "out of range, must not fire");
}

#[test]
fn test_shooter_holds_and_fires_in_band() {
    let mut e = spawn(EnemyKind::Shooter, 1, Vec3::new(18.0, 0.0, 0.0));
    e.update(0.1, Vec3::ZERO, &mut rng());
    assert_eq!(e.body.position.x, 18.0);
    assert_eq!(e.shots.len(), 1);

    let shot = e.shots[0];
    assert_eq!(shot.direction.y, 0.0);
    assert!(shot.direction.x < 0.0);
    assert_eq!(shot.damage, SHOOTER_BULLET_DAMAGE);

    // Cooldown blocks a second shot.
    e.update(0.1, Vec3::ZERO, &mut rng());
    assert_eq!(e.shots.len(), 1);
}

#[test]
fn test_shooter_bullets_expire() {
    let mut e = spawn(EnemyKind::Shooter, 1, Vec3::new(18.0, 0.0, 0.0));
    let mut r = rng();
    e.update(0.1, Vec3::ZERO, &mut r);
    assert_eq!(e.shots.len(), 1);

    // Player far out of range: no new shots, the old one dies after its life.
    let far = Vec3::new(0.0, 0.0, 1000.0);
    for _ in 0..20 {
        e.update(0.1, far, &mut r);
    }
    assert!(e.shots.is_empty());
}

// ---- Charger ----

#[test]
fn test_charger_full_cycle() {
    let mut e = spawn(EnemyKind::Charger, 1, Vec3::new(10.0, 0.0, 0.0));
    let mut r = rng();
    let dt = 0.01;

    e.update(dt, Vec3::ZERO, &mut r);
    let Behavior::Charger(c) = &e.behavior else { panic!("not a charger") };
    assert_eq!(c.phase(), ChargePhase::ChargingUp);
    assert!((c.dash_direction() - Vec3::NEG_X).length() < 1e-5);

    let mut transitions = vec![ChargePhase::ChargingUp];
    let mut elapsed = 0.0;
    let mut dashing_at = None;
    let limit = CHARGER_TELEGRAPH_SECS + CHARGER_DASH_SECS + CHARGER_COOLDOWN_SECS + 0.1;
    while elapsed < limit {
        e.update(dt, Vec3::ZERO, &mut r);
        elapsed += dt;
        let Behavior::Charger(c) = &e.behavior else { unreachable!() };
        if *transitions.last().unwrap() != c.phase() {
            transitions.push(c.phase());
            if c.phase() == ChargePhase::Dashing {
                dashing_at = Some(elapsed);
            }
            if c.phase() == ChargePhase::Idle {
                break;
            }
        }
    }

    assert_eq!(
        transitions,
        vec![
            ChargePhase::ChargingUp,
            ChargePhase::Dashing,
            ChargePhase::Cooldown,
            ChargePhase::Idle
        ]
    );
    assert!(dashing_at.unwrap() <= CHARGER_TELEGRAPH_SECS + dt + 1e-4);
}

#[test]
fn test_charger_ignores_player_outside_band() {
    for dist in [5.0, 30.0] {
        let mut e = spawn(EnemyKind::Charger, 1, Vec3::new(dist, 0.0, 0.0));
        e.update(0.01, Vec3::ZERO, &mut rng());
        let Behavior::Charger(c) = &e.behavior else { unreachable!() };
        assert_eq!(c.phase(), ChargePhase::Idle);
    }
}

#[test]
fn test_charger_dash_covers_ground() {
    let mut e = spawn(EnemyKind::Charger, 1, Vec3::new(10.0, 0.0, 0.0));
    let mut r = rng();
    // Telegraph + dash: roughly dash_speed * 0.16 = 16 units along -x.
    for _ in 0..40 {
        e.update(0.01, Vec3::ZERO, &mut r);
    }
    assert!(e.body.position.x < -4.0);
}

// ---- Exploder ----

#[test]
fn test_exploder_fuse_detonates_once() {
    let mut e = spawn(EnemyKind::Exploder, 1, Vec3::new(7.0, 0.0, 0.0));
    let mut r = rng();
    let mut fuse_signals = 0;
    let mut detonations = 0;
    let player = Vec3::ZERO;

    for _ in 0..150 {
        if e.update(0.01, player, &mut r) == Some(EnemySignal::FuseExpired) {
            fuse_signals += 1;
        }
        if e.should_explode() && e.detonate() {
            detonations += 1;
        }
    }

    assert_eq!(fuse_signals, 1);
    assert_eq!(detonations, 1);
    assert!(!e.is_alive());
    assert!(!e.should_explode());
    assert!(!e.detonate());
    assert!(e.body.health <= 0.0);
}

#[test]
fn test_exploder_arms_at_one_and_a_half_radius() {
    let mut e = spawn(EnemyKind::Exploder, 1, Vec3::new(20.0, 0.0, 0.0));
    e.update(0.01, Vec3::ZERO, &mut rng());
    let Behavior::Exploder(x) = &e.behavior else { unreachable!() };
    assert!(!x.is_armed());

    let mut e = spawn(EnemyKind::Exploder, 1, Vec3::new(7.4, 0.0, 0.0));
    e.update(0.001, Vec3::ZERO, &mut rng());
    let Behavior::Exploder(x) = &e.behavior else { unreachable!() };
    assert!(x.is_armed());
    assert_eq!(e.blast(), Some((5.0, 50.0)));
}

// ---- Jumper ----

#[test]
fn test_jumper_loot_roll_distribution() {
    let mut r = rng();
    let mut counts = [0u32; 4];
    for _ in 0..10_000 {
        let (kind, tier) = roll_loot(&mut r);
        assert!(tier <= 3);
        let idx = match kind {
            LootKind::None => 0,
            LootKind::Magnet => 1,
            LootKind::HealthPack => 2,
            LootKind::Weapon => 3,
        };
        counts[idx] += 1;
    }
    assert!((4700..5300).contains(&counts[0]));
    assert!((1700..2300).contains(&counts[1]));
    assert!((1200..1800).contains(&counts[2]));
    assert!((1200..1800).contains(&counts[3]));
}

#[test]
fn test_jumper_hops_toward_player() {
    let mut e = spawn(EnemyKind::Jumper, 1, Vec3::new(20.0, 0.0, 0.0));
    let mut r = rng();
    let mut max_height = 0.0_f32;
    let mut hops = 0;
    let mut was_airborne = false;
    for _ in 0..300 {
        e.update(0.01, Vec3::ZERO, &mut r);
        max_height = max_height.max(e.body.position.y);
        let Behavior::Jumper(j) = &e.behavior else { unreachable!() };
        if j.is_airborne() && !was_airborne {
            hops += 1;
        }
        if !j.is_airborne() {
            assert_eq!(e.body.position.y, 0.0);
        }
        was_airborne = j.is_airborne();
    }
    assert!(hops >= 1);
    assert!(max_height > 1.0);
    assert!(e.body.position.x < 20.0);
    assert!(e.body.position.y >= 0.0);
}

#[test]
fn test_jumper_loot_exposed() {
    let mut r = rng();
    for _ in 0..50 {
        let e = Enemy::spawn(EnemyKind::Jumper, 1, Vec3::ZERO, 1, &mut r);
        let Behavior::Jumper(j) = &e.behavior else { unreachable!() };
        match e.loot() {
            Some((kind, _)) => assert_eq!(kind, j.loot()),
            None => assert_eq!(j.loot(), LootKind::None),
        }
    }
}

// ---- Rat ----

#[test]
fn test_rat_breeds_by_tier() {
    let mut r = rng();
    for _ in 0..200 {
        assert!(matches!(
            roll_breed(1, &mut r),
            RatBreed::WhiteRat | RatBreed::Hamster | RatBreed::BlackRat
        ));
        assert!(matches!(
            roll_breed(2, &mut r),
            RatBreed::EliteRat | RatBreed::EliteHamster
        ));
        assert_eq!(roll_breed(3, &mut r), RatBreed::SpinyKing);
    }
}

#[test]
fn test_rat_seeks_and_hops() {
    let mut e = spawn(EnemyKind::Rat, 3, Vec3::new(30.0, 0.0, 0.0));
    let mut r = rng();
    let mut hopped = false;
    for _ in 0..400 {
        e.update(0.01, Vec3::ZERO, &mut r);
        hopped |= e.body.position.y > 0.0;
    }
    assert!(hopped);
    assert!(e.body.position.x < 30.0);
    assert_eq!(e.xp_reward(), 1200);
}

// ---- Boss ----

#[test]
fn test_boss_wave_five_is_scaled_tank() {
    let e = Enemy::spawn(EnemyKind::Boss, 4, Vec3::ZERO, 5, &mut rng());
    let boss = e.boss().unwrap();
    assert_eq!(boss.kind(), BossKind::Tank);
    assert!((wave_scaling(5) - 1.25).abs() < 1e-6);
    assert!((e.body.max_health - 3750.0).abs() < 1e-3);
    assert_eq!(e.body.tier, 4);
}

#[test]
fn test_boss_kind_by_milestone() {
    assert_eq!(boss_kind_for_wave(5), BossKind::Tank);
    assert_eq!(boss_kind_for_wave(10), BossKind::Summoner);
    assert_eq!(boss_kind_for_wave(15), BossKind::Artillery);
    assert_eq!(boss_kind_for_wave(20), BossKind::Teleporter);
    assert_eq!(boss_kind_for_wave(25), BossKind::Ultimate);
    assert_eq!(boss_kind_for_wave(30), BossKind::Ultimate);
}

#[test]
fn test_boss_phase_buffs_apply_once() {
    let mut e = Enemy::spawn(EnemyKind::Boss, 4, Vec3::new(50.0, 0.0, 0.0), 5, &mut rng());
    let mut r = rng();
    let base_speed = e.body.speed;
    let base_cooldown = e.boss().unwrap().attack_cooldown();

    e.take_damage(e.body.max_health * 0.4);
    e.update(0.01, Vec3::ZERO, &mut r);
    assert_eq!(e.boss().unwrap().phase(), BossPhase::Two);
    assert!((e.body.speed - base_speed * 1.3).abs() < 1e-4);

    // Health bouncing back up never re-arms the buff.
    e.body.health = e.body.max_health * 0.9;
    e.update(0.01, Vec3::ZERO, &mut r);
    e.body.health = e.body.max_health * 0.5;
    e.update(0.01, Vec3::ZERO, &mut r);
    assert_eq!(e.boss().unwrap().phase(), BossPhase::Two);
    assert!((e.body.speed - base_speed * 1.3).abs() < 1e-4);

    e.body.health = e.body.max_health * 0.2;
    e.update(0.01, Vec3::ZERO, &mut r);
    e.update(0.01, Vec3::ZERO, &mut r);
    assert_eq!(e.boss().unwrap().phase(), BossPhase::Three);
    assert!((e.body.speed - base_speed * 1.3 * 1.5).abs() < 1e-4);
    assert!((e.boss().unwrap().attack_cooldown() - base_cooldown * 0.8 * 0.6).abs() < 1e-4);
}

#[test]
fn test_boss_skipping_a_phase_applies_both_buffs() {
    let mut e = Enemy::spawn(EnemyKind::Boss, 4, Vec3::new(50.0, 0.0, 0.0), 5, &mut rng());
    let base_speed = e.body.speed;
    e.take_damage(e.body.max_health * 0.9);
    e.update(0.01, Vec3::ZERO, &mut rng());
    assert_eq!(e.boss().unwrap().phase(), BossPhase::Three);
    assert!((e.body.speed - base_speed * 1.3 * 1.5).abs() < 1e-4);
}

#[test]
fn test_phase_for_fraction_thresholds() {
    assert_eq!(Boss::phase_for_fraction(1.0), BossPhase::One);
    assert_eq!(Boss::phase_for_fraction(0.67), BossPhase::One);
    assert_eq!(Boss::phase_for_fraction(0.66), BossPhase::Two);
    assert_eq!(Boss::phase_for_fraction(0.34), BossPhase::Two);
    assert_eq!(Boss::phase_for_fraction(0.33), BossPhase::Three);
    assert_eq!(Boss::phase_for_fraction(0.0), BossPhase::Three);
}

#[test]
fn test_artillery_barrage_counts() {
    let mut e = Enemy::spawn(EnemyKind::Boss, 4, Vec3::new(50.0, 0.0, 0.0), 15, &mut rng());
    assert_eq!(e.boss().unwrap().kind(), BossKind::Artillery);
    let mut r = rng();
    e.update(0.01, Vec3::ZERO, &mut r);
    assert_eq!(e.shots.len(), BOSS_BARRAGE_COUNT);
    for shot in &e.shots {
        assert!((shot.direction.length() - 1.0).abs() < 1e-5);
        assert_eq!(shot.direction.y, 0.0);
        assert!(shot.position.y > 0.0);
    }

    e.body.health = e.body.max_health * 0.1;
    e.shots.clear();
    // Run one full cooldown so the next cycle fires enraged.
    let mut fired = 0;
    for _ in 0..200 {
        let before = e.shots.len();
        e.update(0.01, Vec3::ZERO, &mut r);
        if e.shots.len() > before {
            fired = e.shots.len() - before;
            break;
        }
    }
    assert_eq!(fired, BOSS_BARRAGE_COUNT_ENRAGED);
}

#[test]
fn test_summoner_requests_minions_each_cycle() {
    let mut e = Enemy::spawn(EnemyKind::Boss, 4, Vec3::new(50.0, 0.0, 0.0), 10, &mut rng());
    let mut r = rng();
    let mut requests = 0;
    // Cooldown 5s: cycles fire at t=0, 5, 10.
    for _ in 0..1100 {
        if e.update(0.01, Vec3::ZERO, &mut r) == Some(EnemySignal::MinionRequested) {
            requests += 1;
        }
    }
    assert_eq!(requests, 3);
}

#[test]
fn test_tank_charges_every_third_cycle() {
    let cycles: Vec<AttackPattern> = (1..=6)
        .map(|c| Boss::pattern_for_cycle(BossKind::Tank, c))
        .collect();
    assert!(cycles.iter().all(|p| *p == AttackPattern::Melee));

    let mut e = Enemy::spawn(EnemyKind::Boss, 4, Vec3::new(80.0, 0.0, 0.0), 5, &mut rng());
    let mut r = rng();
    let mut charging_cycles = Vec::new();
    let mut last_cycle = 0;
    for _ in 0..1000 {
        e.update(0.01, Vec3::ZERO, &mut r);
        let boss = e.boss().unwrap();
        if boss.cycle() != last_cycle {
            last_cycle = boss.cycle();
            if boss.is_charging() {
                charging_cycles.push(last_cycle);
            }
        }
    }
    assert_eq!(charging_cycles, vec![3]);
}

#[test]
fn test_ultimate_round_robin() {
    let expected = [
        AttackPattern::Barrage,
        AttackPattern::Melee,
        AttackPattern::Summon,
        AttackPattern::Teleport,
    ];
    for cycle in 0..12 {
        assert_eq!(
            Boss::pattern_for_cycle(BossKind::Ultimate, cycle),
            expected[(cycle % 4) as usize]
        );
    }
}

#[test]
fn test_teleporter_warps_then_charges() {
    let mut e = Enemy::spawn(EnemyKind::Boss, 4, Vec3::new(40.0, 0.0, 0.0), 20, &mut rng());
    let mut r = rng();
    let player = Vec3::ZERO;

    // Cycle 1 (odd): charge mode.
    e.update(0.01, player, &mut r);
    assert!(e.boss().unwrap().is_charging());

    // Cycle 2 (even): warp to 10 units from the player, charge off.
    for _ in 0..300 {
        e.update(0.01, player, &mut r);
        if e.boss().unwrap().cycle() == 2 {
            break;
        }
    }
    let boss = e.boss().unwrap();
    assert!(boss.just_teleported());
    assert!(!boss.is_charging());
    assert!((e.body.position.distance(player) - BOSS_TELEPORT_DISTANCE).abs() < 0.2);
}

#[test]
fn test_boss_glow_in_range() {
    let mut e = Enemy::spawn(EnemyKind::Boss, 4, Vec3::new(40.0, 0.0, 0.0), 5, &mut rng());
    let mut r = rng();
    for _ in 0..100 {
        e.update(0.03, Vec3::ZERO, &mut r);
        let glow = e.boss().unwrap().glow();
        assert!((0.0..=1.0).contains(&glow));
    }
}

#[test]
fn test_enemy_view_reports_draw_inputs() {
    let mut e = spawn(EnemyKind::Exploder, 1, Vec3::new(7.0, 0.0, 0.0));
    e.update(0.01, Vec3::ZERO, &mut rng());
    let view = e.view();
    assert_eq!(view.kind, EnemyKind::Exploder);
    assert!(view.armed);
    assert!(view.boss_phase.is_none());
}
