//! Terminal back-end for the renderer.
//!
//! The game draws on a fixed canvas; `TerminalSurface` scales that canvas
//! onto whatever character grid the terminal currently has. The bottom row
//! is kept for the controls hint.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal, QueueableCommand,
};
use paddle_shooter::entities::Rect;
use paddle_shooter::render::{Paint, Surface};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HINT: Color = Color::DarkGrey;

fn color_of(paint: Paint) -> Color {
    match paint {
        Paint::White => Color::White,
        Paint::Red => Color::Red,
        Paint::Green => Color::Green,
        Paint::Blue => Color::Blue,
    }
}

/// Text at or above this size is drawn bold.
const LARGE_TEXT: f32 = 48.0;

const HINT: &str = "← → / A D / mouse drag : Move   R : Restart   Q : Quit";

pub struct TerminalSurface<W: Write> {
    out: W,
    canvas_width: f32,
    canvas_height: f32,
    cols: u16,
    rows: u16,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, canvas_width: f32, canvas_height: f32, cols: u16, rows: u16) -> Self {
        Self {
            out,
            canvas_width,
            canvas_height,
            cols,
            rows,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Terminal column a canvas x falls into.
    pub fn column_of(&self, x: f32) -> i32 {
        (x / self.canvas_width * self.cols as f32).floor() as i32
    }

    /// Rows available to the playfield.
    fn play_rows(&self) -> u16 {
        self.rows.saturating_sub(1)
    }

    fn row_of(&self, y: f32) -> i32 {
        (y / self.canvas_height * self.play_rows() as f32).floor() as i32
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    type Error = io::Error;

    fn clear(&mut self) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) -> io::Result<()> {
        // Anything on the canvas gets at least one cell, however small
        let c0 = self.column_of(rect.x);
        let c1 = self.column_of(rect.x + rect.w).max(c0 + 1);
        let r0 = self.row_of(rect.y);
        let r1 = self.row_of(rect.y + rect.h).max(r0 + 1);

        let c0 = c0.max(0);
        let c1 = c1.min(self.cols as i32);
        let r0 = r0.max(0);
        let r1 = r1.min(self.play_rows() as i32);
        if c0 >= c1 || r0 >= r1 {
            return Ok(());
        }

        let line = "█".repeat((c1 - c0) as usize);
        self.out.queue(style::SetForegroundColor(color_of(paint)))?;
        for row in r0..r1 {
            self.out.queue(cursor::MoveTo(c0 as u16, row as u16))?;
            self.out.queue(Print(&line))?;
        }
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, paint: Paint) -> io::Result<()> {
        // Canvas text is anchored on its baseline, so print on the row above
        let row = (self.row_of(y) - 1).clamp(0, self.play_rows().saturating_sub(1) as i32);
        let col = self.column_of(x).max(0);

        self.out.queue(cursor::MoveTo(col as u16, row as u16))?;
        self.out.queue(style::SetForegroundColor(color_of(paint)))?;
        if size >= LARGE_TEXT {
            self.out.queue(style::SetAttribute(Attribute::Bold))?;
            self.out.queue(Print(text))?;
            self.out.queue(style::SetAttribute(Attribute::Reset))?;
        } else {
            self.out.queue(Print(text))?;
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(1, self.rows.saturating_sub(1)))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print(HINT))?;

        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}
