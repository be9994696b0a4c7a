//! Pure game-logic functions.
//!
//! `tick` takes an immutable reference to the current `World` (plus the
//! input for this tick and an RNG handle) and returns a brand-new `World`.
//! Side effects are limited to the injected RNG. Every pass builds the next
//! collection instead of removing from the one it walks, so same-tick
//! removals never cause an entity to be skipped or visited twice.

use log::{debug, info};
use rand::Rng;

use crate::config::{Tuning, SCORE_PER_KILL};
use crate::entities::{
    Bullet, GameStatus, InputState, Invader, Player, PowerUp, PowerUpKind, Rect, World,
};
use crate::spawner::{maybe_spawn_invader, maybe_spawn_power_up};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh session with the player centred on the bottom edge.
pub fn init_world(tuning: Tuning) -> World {
    World {
        player: Player {
            x: tuning.player_max_x() / 2.0,
        },
        bullets: Vec::new(),
        invaders: Vec::new(),
        power_ups: Vec::new(),
        score: 0,
        frame: 0,
        bullet_multiplier: 1,
        status: GameStatus::Playing,
        tuning,
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Apply held keys and queued drag steps to the player's x.
///
/// A move only happens while the player is not already at the matching
/// bound, and the result is clamped so a full step can never overshoot.
pub fn integrate_input(x: f32, input: &InputState, tuning: &Tuning) -> f32 {
    let max_x = tuning.player_max_x().max(0.0);
    let speed = tuning.player_speed;
    let mut x = x;

    if input.left && x > 0.0 {
        x -= speed;
    }
    if input.right && x < max_x {
        x += speed;
    }

    let direction = input.steps.signum();
    for _ in 0..input.steps.unsigned_abs() {
        if direction < 0 && x > 0.0 {
            x -= speed;
        } else if direction > 0 && x < max_x {
            x += speed;
        }
    }

    x.clamp(0.0, max_x)
}

/// Bullets fired in one volley, spread evenly across the player's width.
pub fn volley(player_x: f32, multiplier: u32, tuning: &Tuning) -> Vec<Bullet> {
    let spacing = tuning.player_width / (multiplier + 1) as f32;
    let y = tuning.player_y() - tuning.bullet_height;
    (1..=multiplier)
        .map(|i| Bullet {
            x: player_x + spacing * i as f32 - tuning.bullet_width / 2.0,
            y,
        })
        .collect()
}

/// Descent speed for the second, health-weighted pass.
pub fn adjusted_invader_speed(health: u32, tuning: &Tuning) -> f32 {
    tuning.invader_speed / (1.0 + 0.5 * health as f32)
}

// ── Per-frame tick (nearly pure, RNG is injected) ──────────────────────────

/// Advance the simulation by one frame. A finished game is returned as-is.
pub fn tick(state: &World, input: &InputState, rng: &mut impl Rng) -> World {
    if state.is_over() {
        return state.clone();
    }
    let t = &state.tuning;
    let player = state.player_rect();

    // ── 1. Invaders descend at the flat speed ────────────────────────────────
    let mut crashed = false;
    let mut invaders: Vec<Invader> = Vec::with_capacity(state.invaders.len());
    for invader in &state.invaders {
        let moved = Invader {
            y: invader.y + t.invader_speed,
            ..invader.clone()
        };
        let rect = moved.rect();

        // Touching the player or crossing the player's top line both end the run
        if player.overlaps(&rect) || rect.bottom() >= player.y {
            crashed = true;
        }

        if moved.y > t.canvas_height {
            debug!("invader escaped at x={:.1}", moved.x);
            continue;
        }
        invaders.push(moved);
    }

    // ── 2. Game over freezes everything but this last descent ────────────────
    if crashed {
        info!(
            "game over at frame {} with score {}",
            state.frame, state.score
        );
        return World {
            invaders,
            status: GameStatus::GameOver,
            ..state.clone()
        };
    }

    // ── 3. Bullets climb and hit at most one invader each ────────────────────
    let mut score = state.score;
    let mut bullets: Vec<Bullet> = Vec::with_capacity(state.bullets.len());
    for bullet in &state.bullets {
        let moved = Bullet {
            y: bullet.y - t.bullet_speed,
            ..bullet.clone()
        };
        let rect = state.bullet_rect(&moved);

        if let Some(hit) = invaders.iter().position(|inv| rect.overlaps(&inv.rect())) {
            if invaders[hit].health <= 1 {
                let dead = invaders.remove(hit);
                score += SCORE_PER_KILL;
                debug!("invader destroyed at x={:.1}, score {}", dead.x, score);
            } else {
                invaders[hit].health -= 1;
            }
            continue;
        }

        if moved.y < 0.0 {
            continue;
        }
        bullets.push(moved);
    }

    // ── 4. Second descent, slower for tougher invaders ───────────────────────
    let mut invaders: Vec<Invader> = invaders
        .into_iter()
        .filter_map(|invader| {
            let y = invader.y + adjusted_invader_speed(invader.health, t);
            (y <= t.canvas_height).then_some(Invader { y, ..invader })
        })
        .collect();

    // ── 5. Spawn and fire timers ─────────────────────────────────────────────
    let frame = state.frame + 1;
    if let Some(invader) = maybe_spawn_invader(frame, score, t, rng) {
        invaders.push(invader);
    }
    if t.bullet_fire_rate != 0 && frame % t.bullet_fire_rate == 0 {
        bullets.extend(volley(state.player.x, state.bullet_multiplier, t));
    }

    // ── 6. Player movement ───────────────────────────────────────────────────
    let player = Player {
        x: integrate_input(state.player.x, input, t),
    };
    let player_rect = Rect {
        x: player.x,
        ..state.player_rect()
    };

    // ── 7. Power-ups fall and may be caught ──────────────────────────────────
    let mut bullet_multiplier = state.bullet_multiplier;
    let mut power_ups: Vec<PowerUp> = Vec::with_capacity(state.power_ups.len() + 1);
    for power_up in &state.power_ups {
        let moved = PowerUp {
            y: power_up.y + t.power_up_speed,
            ..power_up.clone()
        };

        if player_rect.overlaps(&state.power_up_rect(&moved)) {
            match moved.kind {
                PowerUpKind::DoubleBullet => bullet_multiplier += 1,
            }
            info!("power-up collected, {} bullets per volley", bullet_multiplier);
            continue;
        }

        if moved.y > t.canvas_height {
            continue;
        }
        power_ups.push(moved);
    }

    // ── 8. Random power-up drop ──────────────────────────────────────────────
    if let Some(power_up) = maybe_spawn_power_up(t, rng) {
        power_ups.push(power_up);
    }

    World {
        player,
        bullets,
        invaders,
        power_ups,
        score,
        frame,
        bullet_multiplier,
        status: GameStatus::Playing,
        tuning: state.tuning,
    }
}
