//! All game entity types. Pure data, no game rules.

use crate::config::Tuning;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Adds one bullet to every volley for the rest of the session.
    DoubleBullet,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 1] = [PowerUpKind::DoubleBullet];
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in canvas units, y growing downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Invader {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Hits left; an invader in the live set always has at least one.
    pub health: u32,
}

impl Invader {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub kind: PowerUpKind,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// What the player is asking for this tick.
///
/// `left` / `right` are held-key flags. `steps` is the net number of
/// discrete drag steps queued since the last tick (negative = left).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub steps: i32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// One session of the game. Cloneable so `tick` can return a fresh copy
/// without touching the original.
#[derive(Clone, Debug)]
pub struct World {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub invaders: Vec<Invader>,
    pub power_ups: Vec<PowerUp>,
    pub score: u32,
    pub frame: u64,
    /// Bullets per volley; starts at 1 and only ever grows.
    pub bullet_multiplier: u32,
    pub status: GameStatus,
    pub tuning: Tuning,
}

impl World {
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn player_rect(&self) -> Rect {
        let t = &self.tuning;
        Rect::new(self.player.x, t.player_y(), t.player_width, t.player_height)
    }

    pub fn bullet_rect(&self, bullet: &Bullet) -> Rect {
        Rect::new(
            bullet.x,
            bullet.y,
            self.tuning.bullet_width,
            self.tuning.bullet_height,
        )
    }

    pub fn power_up_rect(&self, power_up: &PowerUp) -> Rect {
        Rect::new(
            power_up.x,
            power_up.y,
            self.tuning.power_up_width,
            self.tuning.power_up_height,
        )
    }
}
