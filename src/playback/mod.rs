//! Playback controller over a precomputed run
//!
//! - [`Controller`]: owns the current [`Run`] and the cursor into it
//! - [`clock`]: time sources ([`SystemClock`], [`ManualClock`] for tests)
//! - [`timer`]: the single-shot [`Timer`] driving auto-advance
//!
//! # State machine
//!
//! ```text
//!            start             pause
//!   Idle ───────────▶ Running ───────▶ Paused
//!    ▲ ▲                │  ▲   resume    │
//!    │ │     last tick  │  └─────────────┘
//!    │ │                ▼
//!    │ └──────────── Finished
//!    └── reset (from any state)
//! ```
//!
//! Every transition cancels the pending tick first and re-arms exactly one
//! tick only if the resulting state is `Running`. Operations that are not
//! valid in the current state are ignored and return `false`.

pub mod clock;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use timer::Timer;

use crate::algorithms::Algorithm;
use crate::config::{DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};
use crate::snapshot::{Run, Step};
use std::time::Duration;
use tracing::{debug, info, trace};

/// Playback mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No run installed
    Idle,
    /// Auto-advancing one step per tick
    Running,
    /// Frozen; manual stepping allowed
    Paused,
    /// Auto-advance ran past the last step; the run is kept for display
    Finished,
}

/// Time-driven cursor over a [`Run`]
#[derive(Debug)]
pub struct Controller<C: Clock = SystemClock> {
    clock: C,
    input: Vec<i32>,
    /// Shown when no run is installed
    idle_step: Step,
    run: Option<Run>,
    algorithm: Option<Algorithm>,
    cursor: usize,
    state: PlaybackState,
    /// Steps per second
    speed: u32,
    timer: Timer,
}

impl Controller<SystemClock> {
    pub fn new(input: Vec<i32>) -> Self {
        Self::with_clock(input, SystemClock)
    }
}

impl<C: Clock> Controller<C> {
    pub fn with_clock(input: Vec<i32>, clock: C) -> Self {
        Controller {
            clock,
            idle_step: Step::plain(&input),
            input,
            run: None,
            algorithm: None,
            cursor: 0,
            state: PlaybackState::Idle,
            speed: DEFAULT_SPEED,
            timer: Timer::new(),
        }
    }

    // ========== Control operations ==========

    /// Generate a run for `input` and start playing it.
    ///
    /// Ignored while already running.
    pub fn start(&mut self, algorithm: Algorithm, input: &[i32]) -> bool {
        if self.state == PlaybackState::Running {
            trace!("start ignored: already running");
            return false;
        }

        self.timer.cancel();
        self.discard_run();
        self.set_input(input.to_vec());

        let run = algorithm.generate(&self.input);
        if run.is_empty() {
            return false;
        }

        info!(
            algorithm = algorithm.name(),
            len = self.input.len(),
            steps = run.len(),
            bytes = run.estimated_size(),
            "starting playback"
        );
        self.run = Some(run);
        self.algorithm = Some(algorithm);
        self.cursor = 0;
        self.transition(PlaybackState::Running);
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.state != PlaybackState::Running {
            trace!(state = ?self.state, "pause ignored");
            return false;
        }
        self.transition(PlaybackState::Paused);
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != PlaybackState::Paused {
            trace!(state = ?self.state, "resume ignored");
            return false;
        }
        self.transition(PlaybackState::Running);
        true
    }

    /// Move one step forward while paused; no-op on the last step
    pub fn step_forward(&mut self) -> bool {
        if self.state != PlaybackState::Paused || self.cursor + 1 >= self.total_steps() {
            trace!(state = ?self.state, cursor = self.cursor, "step forward ignored");
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move one step backward while paused; no-op on the first step
    pub fn step_backward(&mut self) -> bool {
        if self.state != PlaybackState::Paused || self.cursor == 0 {
            trace!(state = ?self.state, cursor = self.cursor, "step backward ignored");
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Drop the run and go back to idle showing `new_array`
    pub fn reset(&mut self, new_array: Vec<i32>) {
        self.timer.cancel();
        self.discard_run();
        self.set_input(new_array);
        self.transition(PlaybackState::Idle);
    }

    /// Change the auto-advance rate. A pending tick is re-armed with the new
    /// interval.
    pub fn set_speed(&mut self, rate: u32) {
        self.speed = rate.clamp(MIN_SPEED, MAX_SPEED);
        debug!(speed = self.speed, "speed changed");
        self.reschedule();
    }

    /// Deliver the pending tick if it is due. Returns whether the cursor moved.
    pub fn poll(&mut self) -> bool {
        if self.state != PlaybackState::Running || !self.timer.fire(self.clock.now()) {
            return false;
        }

        self.cursor += 1;
        if self.cursor >= self.total_steps() {
            self.transition(PlaybackState::Finished);
        } else {
            self.reschedule();
        }
        true
    }

    // ========== Internals ==========

    fn transition(&mut self, next: PlaybackState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, cursor = self.cursor, "playback transition");
        }
        self.state = next;
        self.reschedule();
    }

    /// Cancel the pending tick, then arm a fresh one if running
    fn reschedule(&mut self) {
        self.timer.cancel();
        if self.state == PlaybackState::Running {
            self.timer.arm(self.clock.now(), self.interval());
        }
    }

    fn discard_run(&mut self) {
        self.run = None;
        self.algorithm = None;
        self.cursor = 0;
    }

    fn set_input(&mut self, input: Vec<i32>) {
        self.idle_step = Step::plain(&input);
        self.input = input;
    }

    // ========== Getter methods for UI ==========

    /// The step to render: the cursor's step, clamped to the last one, or a
    /// plain view of the input when no run exists
    pub fn displayed_state(&self) -> &Step {
        self.run
            .as_ref()
            .and_then(|run| run.get(self.cursor.min(run.len().saturating_sub(1))))
            .unwrap_or(&self.idle_step)
    }

    /// Index of the displayed step
    pub fn current_step(&self) -> usize {
        self.cursor.min(self.total_steps().saturating_sub(1))
    }

    pub fn total_steps(&self) -> usize {
        self.run.as_ref().map_or(0, Run::len)
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Running or paused
    pub fn is_sorting(&self) -> bool {
        matches!(self.state, PlaybackState::Running | PlaybackState::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlaybackState::Paused
    }

    pub fn is_finished(&self) -> bool {
        self.state == PlaybackState::Finished
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Delay between two auto-advance ticks
    pub fn interval(&self) -> Duration {
        Duration::from_secs(1) / self.speed.max(1)
    }

    /// Time left before the next tick, if one is pending
    pub fn time_until_tick(&self) -> Option<Duration> {
        self.timer.remaining(self.clock.now())
    }

    pub fn has_pending_tick(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn input(&self) -> &[i32] {
        &self.input
    }

    pub fn run(&self) -> Option<&Run> {
        self.run.as_ref()
    }

    /// Algorithm of the installed run
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }
}
