//! Entity creation. Randomness always comes in through the caller's `rng`.

use log::debug;
use rand::Rng;

use crate::config::Tuning;
use crate::entities::{Invader, PowerUp, PowerUpKind};

/// Highest health a new invader may roll at the given score.
pub fn max_invader_health(score: u32) -> u32 {
    score / 50 + 3
}

/// Spawn an invader on frames that are a multiple of the spawn rate.
pub fn maybe_spawn_invader(
    frame: u64,
    score: u32,
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> Option<Invader> {
    if tuning.spawn_rate == 0 || frame % tuning.spawn_rate != 0 {
        return None;
    }
    Some(spawn_invader(score, tuning, rng))
}

/// Build a square invader just above the playfield.
pub fn spawn_invader(score: u32, tuning: &Tuning, rng: &mut impl Rng) -> Invader {
    let width = if tuning.max_invader_width > tuning.min_invader_width {
        rng.gen_range(tuning.min_invader_width..tuning.max_invader_width)
    } else {
        tuning.min_invader_width
    };
    let height = width;
    let x = rng.gen_range(0.0..=(tuning.canvas_width - width).max(0.0));
    let health = rng.gen_range(1..=max_invader_health(score));

    debug!("invader spawned at x={x:.1} size={width:.1} health={health}");
    Invader {
        x,
        y: -height,
        width,
        height,
        health,
    }
}

/// Roll the per-tick power-up drop.
pub fn maybe_spawn_power_up(tuning: &Tuning, rng: &mut impl Rng) -> Option<PowerUp> {
    if !rng.gen_bool(tuning.power_up_drop_rate.clamp(0.0, 1.0)) {
        return None;
    }
    let x = rng.gen_range(0.0..=(tuning.canvas_width - tuning.power_up_width).max(0.0));
    let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];

    debug!("power-up {kind:?} dropped at x={x:.1}");
    Some(PowerUp { x, y: 0.0, kind })
}
