mod support;

use paddle_shooter::compute::init_world;
use paddle_shooter::config::Tuning;
use paddle_shooter::driver::{Flow, FrameDriver};
use paddle_shooter::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

use support::{Call, RecordingSurface};

fn quiet_world() -> World {
    init_world(Tuning {
        power_up_drop_rate: 0.0,
        ..Tuning::default()
    })
}

/// A world one tick away from game over.
fn doomed_world() -> World {
    let mut w = quiet_world();
    w.invaders.push(Invader { x: 0.0, y: 589.0, width: 20.0, height: 20.0, health: 1 });
    w
}

fn driver(world: World) -> FrameDriver<StdRng> {
    FrameDriver::new(world, StdRng::seed_from_u64(42))
}

#[test]
fn frame_ticks_and_renders() {
    let mut d = driver(quiet_world());
    let mut surface = RecordingSurface::default();
    let flow = d.frame(&InputState::default(), &mut surface).unwrap();
    assert_eq!(flow, Flow::Continue);
    assert_eq!(d.world().frame, 1);
    assert_eq!(surface.calls.first(), Some(&Call::Clear));
    assert_eq!(surface.calls.last(), Some(&Call::Present));
}

#[test]
fn run_ticks_runs_requested_count() {
    let mut d = driver(quiet_world());
    assert_eq!(d.run_ticks(&InputState::default(), 10), 10);
    assert_eq!(d.world().frame, 10);
}

#[test]
fn frame_halts_at_game_over_and_shows_banner() {
    let mut d = driver(doomed_world());
    let mut surface = RecordingSurface::default();
    let flow = d.frame(&InputState::default(), &mut surface).unwrap();
    assert_eq!(flow, Flow::Halt);
    assert!(surface.texts().contains(&"Game Over"));
}

#[test]
fn halted_driver_stays_frozen() {
    let mut d = driver(doomed_world());
    assert_eq!(d.run_ticks(&InputState::default(), 10), 1);
    let frozen = d.world().clone();

    let input = InputState { left: true, right: false, steps: 5 };
    assert_eq!(d.step(&input), Flow::Halt);
    assert_eq!(d.run_ticks(&input, 10), 0);

    let mut surface = RecordingSurface::default();
    assert_eq!(d.frame(&input, &mut surface).unwrap(), Flow::Halt);
    assert_eq!(d.world().frame, frozen.frame);
    assert_eq!(d.world().player, frozen.player);
    assert_eq!(d.world().invaders, frozen.invaders);
}

#[test]
fn unattended_session_eventually_ends() {
    let mut d = driver(init_world(Tuning::default()));
    let ran = d.run_ticks(&InputState::default(), 100_000);
    assert!(ran < 100_000);
    assert!(d.world().is_over());
    assert_eq!(d.world().score % 10, 0);
}
