//! Gameplay constants.
//!
//! Everything is in canvas units (the playfield is `CANVAS_WIDTH` by
//! `CANVAS_HEIGHT`); speeds are units per tick and rates are in ticks.

pub const CANVAS_WIDTH: f32 = 480.0;
pub const CANVAS_HEIGHT: f32 = 640.0;

pub const PLAYER_WIDTH: f32 = 30.0;
pub const PLAYER_HEIGHT: f32 = 30.0;
pub const PLAYER_SPEED: f32 = 7.0;

pub const BULLET_WIDTH: f32 = 5.0;
pub const BULLET_HEIGHT: f32 = 8.0;
pub const BULLET_SPEED: f32 = 7.0;
/// Ticks between automatic volleys.
pub const BULLET_FIRE_RATE: u64 = 75;

pub const INVADER_SPEED: f32 = 1.0;
pub const MIN_INVADER_WIDTH: f32 = 20.0;
pub const MAX_INVADER_WIDTH: f32 = 60.0;
/// Ticks between invader spawns.
pub const SPAWN_RATE: u64 = 150;

pub const POWER_UP_WIDTH: f32 = 20.0;
pub const POWER_UP_HEIGHT: f32 = 20.0;
pub const POWER_UP_SPEED: f32 = 2.0;
/// Per-tick chance of a power-up drop.
pub const POWER_UP_DROP_RATE: f64 = 0.0005;

pub const SCORE_PER_KILL: u32 = 10;

/// Every tunable the simulation reads, in one value.
///
/// `Tuning::default()` is the game as shipped. Tests build their own to
/// pin rates without touching the constants above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    pub canvas_width: f32,
    pub canvas_height: f32,

    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,

    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_speed: f32,
    pub bullet_fire_rate: u64,

    pub invader_speed: f32,
    pub min_invader_width: f32,
    pub max_invader_width: f32,
    pub spawn_rate: u64,

    pub power_up_width: f32,
    pub power_up_height: f32,
    pub power_up_speed: f32,
    pub power_up_drop_rate: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullet_speed: BULLET_SPEED,
            bullet_fire_rate: BULLET_FIRE_RATE,
            invader_speed: INVADER_SPEED,
            min_invader_width: MIN_INVADER_WIDTH,
            max_invader_width: MAX_INVADER_WIDTH,
            spawn_rate: SPAWN_RATE,
            power_up_width: POWER_UP_WIDTH,
            power_up_height: POWER_UP_HEIGHT,
            power_up_speed: POWER_UP_SPEED,
            power_up_drop_rate: POWER_UP_DROP_RATE,
        }
    }
}

impl Tuning {
    /// Rightmost x the player may occupy.
    pub fn player_max_x(&self) -> f32 {
        self.canvas_width - self.player_width
    }

    /// The player's top edge; the player never leaves the bottom row.
    pub fn player_y(&self) -> f32 {
        self.canvas_height - self.player_height
    }
}
