//! Frame-driven game loop
//!
//! The loop awaits one display frame, ticks the controller, and repeats until
//! the session ends, the controller is paused, or the clock stops. Frames
//! come from a [`FrameClock`], so tests and the native build can drive a
//! fixed number of ticks with [`ManualClock`] instead of real timing.

use std::cell::RefCell;
use std::future::{Future, ready};
use std::pin::pin;
use std::task::{Context, Poll, Waker};

use rand::Rng;

use crate::sim::{GameController, GamePhase, TickOutcome};
use crate::surface::Surface;

/// Source of display frames
pub trait FrameClock {
    /// Wait for the next frame. Resolves to the frame timestamp in
    /// milliseconds, or `None` once the host stops delivering frames.
    fn next_frame(&mut self) -> impl Future<Output = Option<f64>>;

    /// Invalidate any frame that is still pending
    fn cancel(&mut self);
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    GameOver,
    Paused,
    ClockStopped,
}

/// Run the game loop until it halts.
///
/// The controller is only borrowed for the duration of one tick, never across
/// an await, so input handlers sharing the same `RefCell` can run between
/// frames.
pub async fn run<R, S, C>(
    controller: &RefCell<GameController<R>>,
    surface: &mut S,
    clock: &mut C,
) -> LoopExit
where
    R: Rng,
    S: Surface + ?Sized,
    C: FrameClock,
{
    // A previous loop may still have a frame queued
    clock.cancel();
    controller.borrow().draw(surface);

    loop {
        let Some(_time) = clock.next_frame().await else {
            // Pausing cancels the pending frame, which ends up here
            if controller.borrow().is_paused() {
                return LoopExit::Paused;
            }
            log::info!("Frame clock stopped");
            return LoopExit::ClockStopped;
        };

        let mut game = controller.borrow_mut();
        match game.tick(surface) {
            TickOutcome::Continue => {}
            TickOutcome::GameOver => return LoopExit::GameOver,
            TickOutcome::Halted => {
                return if game.phase() == GamePhase::Over {
                    LoopExit::GameOver
                } else {
                    LoopExit::Paused
                };
            }
        }
    }
}

/// Nominal frame interval for the manual clock (60 Hz)
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// Deterministic clock that hands out a fixed number of frames immediately
#[derive(Debug, Clone)]
pub struct ManualClock {
    remaining: u64,
    time: f64,
    cancelled: u64,
}

impl ManualClock {
    pub fn new(frames: u64) -> Self {
        Self {
            remaining: frames,
            time: 0.0,
            cancelled: 0,
        }
    }

    /// Frames not yet handed out
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// How many times `cancel` was called
    pub fn cancel_count(&self) -> u64 {
        self.cancelled
    }
}

impl FrameClock for ManualClock {
    fn next_frame(&mut self) -> impl Future<Output = Option<f64>> {
        if self.remaining == 0 {
            return ready(None);
        }
        self.remaining -= 1;
        self.time += FRAME_INTERVAL_MS;
        ready(Some(self.time))
    }

    fn cancel(&mut self) {
        self.cancelled += 1;
    }
}

/// Poll a future that never suspends, such as a loop over [`ManualClock`].
///
/// Returns `None` if the future is not ready on the first poll.
pub fn block_on_ready<F: Future>(future: F) -> Option<F::Output> {
    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => Some(output),
        Poll::Pending => None,
    }
}
