//! The frame loop, made explicit.
//!
//! The host calls `FrameDriver::frame` once per display refresh and keeps
//! calling it for as long as it gets `Flow::Continue` back.

use rand::Rng;

use crate::compute::tick;
use crate::entities::{InputState, World};
use crate::render::{render, Surface};

/// What the host should do after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Schedule another frame.
    Continue,
    /// The game is over; the last frame stays on screen.
    Halt,
}

/// Owns one session: its world and its randomness.
pub struct FrameDriver<R: Rng> {
    world: World,
    rng: R,
}

impl<R: Rng> FrameDriver<R> {
    pub fn new(world: World, rng: R) -> Self {
        Self { world, rng }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Advance one tick (unless already over), then draw.
    pub fn frame<S: Surface>(
        &mut self,
        input: &InputState,
        surface: &mut S,
    ) -> Result<Flow, S::Error> {
        self.step(input);
        render(surface, &self.world)?;
        Ok(self.flow())
    }

    /// Advance the world one tick without drawing.
    pub fn step(&mut self, input: &InputState) -> Flow {
        if !self.world.is_over() {
            self.world = tick(&self.world, input, &mut self.rng);
        }
        self.flow()
    }

    /// Drive up to `ticks` steps headless, stopping early at game over.
    /// Returns how many ticks actually ran.
    pub fn run_ticks(&mut self, input: &InputState, ticks: u64) -> u64 {
        let mut ran = 0;
        while ran < ticks && !self.world.is_over() {
            self.step(input);
            ran += 1;
        }
        ran
    }

    fn flow(&self) -> Flow {
        if self.world.is_over() {
            Flow::Halt
        } else {
            Flow::Continue
        }
    }
}
