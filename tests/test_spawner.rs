use paddle_shooter::config::Tuning;
use paddle_shooter::entities::PowerUpKind;
use paddle_shooter::spawner::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── invaders ──────────────────────────────────────────────────────────────────

#[test]
fn invader_only_on_spawn_frames() {
    let t = Tuning::default();
    let mut rng = seeded_rng();
    assert!(maybe_spawn_invader(149, 0, &t, &mut rng).is_none());
    assert!(maybe_spawn_invader(150, 0, &t, &mut rng).is_some());
    assert!(maybe_spawn_invader(151, 0, &t, &mut rng).is_none());
    assert!(maybe_spawn_invader(300, 0, &t, &mut rng).is_some());
}

#[test]
fn spawned_invader_is_square_and_above_playfield() {
    let t = Tuning::default();
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let inv = spawn_invader(0, &t, &mut rng);
        assert_eq!(inv.width, inv.height);
        assert!(inv.width >= 20.0 && inv.width < 60.0);
        assert!(inv.x >= 0.0 && inv.x <= 480.0 - inv.width);
        assert_eq!(inv.y, -inv.height);
        assert!((1..=3).contains(&inv.health));
    }
}

#[test]
fn max_health_grows_with_score() {
    assert_eq!(max_invader_health(0), 3);
    assert_eq!(max_invader_health(49), 3);
    assert_eq!(max_invader_health(50), 4);
    assert_eq!(max_invader_health(120), 5);
}

#[test]
fn invader_health_spans_full_range() {
    let t = Tuning::default();
    let mut rng = seeded_rng();
    let healths: Vec<u32> = (0..500)
        .map(|_| spawn_invader(120, &t, &mut rng).health)
        .collect();
    assert!(healths.iter().all(|h| (1..=5).contains(h)));
    assert!(healths.contains(&1));
    assert!(healths.contains(&5));
}

// ── power-ups ─────────────────────────────────────────────────────────────────

#[test]
fn power_up_never_drops_at_zero_rate() {
    let t = Tuning {
        power_up_drop_rate: 0.0,
        ..Tuning::default()
    };
    let mut rng = seeded_rng();
    assert!((0..10_000).all(|_| maybe_spawn_power_up(&t, &mut rng).is_none()));
}

#[test]
fn power_up_drops_at_top_within_bounds() {
    let t = Tuning {
        power_up_drop_rate: 1.0,
        ..Tuning::default()
    };
    let mut rng = seeded_rng();
    for _ in 0..200 {
        let p = maybe_spawn_power_up(&t, &mut rng).expect("rate 1.0 always drops");
        assert_eq!(p.y, 0.0);
        assert!(p.x >= 0.0 && p.x <= 460.0);
        assert_eq!(p.kind, PowerUpKind::DoubleBullet);
    }
}

#[test]
fn power_up_default_rate_is_rare() {
    let t = Tuning::default();
    let mut rng = seeded_rng();
    // Expect about 50 drops in 100k ticks
    let drops = (0..100_000)
        .filter(|_| maybe_spawn_power_up(&t, &mut rng).is_some())
        .count();
    assert!((20..=100).contains(&drops), "got {drops} drops");
}
