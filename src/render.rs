//! Rendering layer.
//!
//! `render` receives a drawing surface and an immutable view of the world.
//! No game logic is performed here; this module only translates state into
//! draw calls. What a draw call turns into is up to the `Surface`.

use crate::entities::{PowerUpKind, Rect, World};

/// Colours the game draws with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    White,
    Red,
    Green,
    Blue,
}

/// A 2D target with a fixed canvas size.
///
/// Coordinates are canvas units; text is anchored at its baseline-left.
pub trait Surface {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, rect: Rect, paint: Paint) -> Result<(), Self::Error>;

    fn fill_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        paint: Paint,
    ) -> Result<(), Self::Error>;

    /// Push the finished frame out. Surfaces that draw immediately need not
    /// override this.
    fn present(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

// ── Palette ───────────────────────────────────────────────────────────────────

const C_PLAYER: Paint = Paint::White;
const C_SCORE: Paint = Paint::White;
const C_BULLET: Paint = Paint::Red;
const C_INVADER: Paint = Paint::Green;
const C_GAME_OVER: Paint = Paint::Red;

const SCORE_SIZE: f32 = 24.0;
const GAME_OVER_SIZE: f32 = 48.0;

fn power_up_paint(kind: PowerUpKind) -> Paint {
    match kind {
        PowerUpKind::DoubleBullet => Paint::Blue,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<S: Surface>(surface: &mut S, world: &World) -> Result<(), S::Error> {
    surface.clear()?;

    surface.fill_rect(world.player_rect(), C_PLAYER)?;
    surface.fill_text(
        &format!("Score: {}", world.score),
        10.0,
        30.0,
        SCORE_SIZE,
        C_SCORE,
    )?;

    for invader in &world.invaders {
        surface.fill_rect(invader.rect(), C_INVADER)?;
    }
    for bullet in &world.bullets {
        surface.fill_rect(world.bullet_rect(bullet), C_BULLET)?;
    }
    for power_up in &world.power_ups {
        surface.fill_rect(world.power_up_rect(power_up), power_up_paint(power_up.kind))?;
    }

    if world.is_over() {
        let t = &world.tuning;
        surface.fill_text(
            "Game Over",
            t.canvas_width / 2.0 - 100.0,
            t.canvas_height / 2.0,
            GAME_OVER_SIZE,
            C_GAME_OVER,
        )?;
    }

    surface.present()
}
