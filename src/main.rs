mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use paddle_shooter::compute::init_world;
use paddle_shooter::config::Tuning;
use paddle_shooter::driver::{Flow, FrameDriver};
use paddle_shooter::entities::InputState;
use paddle_shooter::render::render;

use display::TerminalSurface;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

/// Set to a number to replay the same sequence of spawns every session.
const SEED_VAR: &str = "PADDLE_SHOOTER_SEED";

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈130 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn session_rng() -> StdRng {
    match std::env::var(SEED_VAR) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(seed) => {
                info!("seeding session rng with {seed}");
                StdRng::seed_from_u64(seed)
            }
            Err(_) => {
                warn!("ignoring {SEED_VAR}={raw:?}: not an unsigned integer");
                StdRng::from_entropy()
            }
        },
        Err(_) => StdRng::from_entropy(),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program, `false` → start a new session.
///
/// Input model: a `key_frame` map records the frame of the last press/repeat
/// event for every key, and each frame the still-fresh keys become the held
/// left/right flags. Keyboard-enhanced terminals also send releases, which
/// drop the key immediately. Mouse drags queue one discrete step per column
/// change. All of it reaches the world through a single `InputState` per tick.
fn game_loop<W: Write>(
    surface: &mut TerminalSurface<W>,
    rx: &mpsc::Receiver<Event>,
) -> Result<bool> {
    let mut driver = FrameDriver::new(init_world(Tuning::default()), session_rng());

    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut drag_col: Option<u16> = None;
    let mut frame: u64 = 0;
    let mut halted = false;

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let mut steps: i32 = 0;
        let mut redraw = false;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => match kind {
                    KeyEventKind::Press => {
                        key_frame.insert(code, frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(true);
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(true);
                            }
                            KeyCode::Char('r') | KeyCode::Char('R') if halted => {
                                return Ok(false);
                            }
                            _ => {}
                        }
                    }
                    KeyEventKind::Repeat => {
                        key_frame.insert(code, frame);
                    }
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Event::Mouse(MouseEvent { kind, column, .. }) => match kind {
                    MouseEventKind::Down(_) => drag_col = Some(column),
                    MouseEventKind::Drag(_) => {
                        if let Some(last) = drag_col {
                            if column < last {
                                steps -= 1;
                            } else if column > last {
                                steps += 1;
                            }
                        }
                        drag_col = Some(column);
                    }
                    MouseEventKind::Up(_) => drag_col = None,
                    _ => {}
                },
                Event::Resize(cols, rows) => {
                    surface.resize(cols, rows);
                    redraw = true;
                }
                _ => {}
            }
        }

        if !halted {
            let left = is_held(&key_frame, &KeyCode::Left, frame)
                || is_held(&key_frame, &KeyCode::Char('a'), frame)
                || is_held(&key_frame, &KeyCode::Char('A'), frame);
            let right = is_held(&key_frame, &KeyCode::Right, frame)
                || is_held(&key_frame, &KeyCode::Char('d'), frame)
                || is_held(&key_frame, &KeyCode::Char('D'), frame);
            let input = InputState { left, right, steps };

            if driver.frame(&input, surface)? == Flow::Halt {
                let world = driver.world();
                info!(
                    "session ended: score {} after {} frames",
                    world.score, world.frame
                );
                halted = true;
            }
        } else if redraw {
            // The world is frozen; only a resize warrants drawing it again
            render(surface, driver.world())?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .context("failed to enter the alternate screen")?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to HOLD_WINDOW.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> Result<()> {
    let tuning = Tuning::default();
    let (cols, rows) = terminal::size().context("failed to read terminal size")?;
    let mut surface =
        TerminalSurface::new(out, tuning.canvas_width, tuning.canvas_height, cols, rows);

    let mut sessions: u32 = 0;
    loop {
        sessions += 1;
        info!("starting session {sessions}");
        if game_loop(&mut surface, rx)? {
            break;
        }
    }
    Ok(())
}
