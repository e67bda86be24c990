//! Counter animation
//!
//! Drives a numeric count-up display: given a target integer, the displayed
//! value rises with an exponential ease-out over a fixed duration, then
//! freezes exactly at the target. The animation is a plain state machine
//! stepped with frame deltas; it knows nothing about any scheduler API.

use crate::easing::Easing;

/// Default count-up duration in milliseconds
pub const DEFAULT_COUNTER_DURATION_MS: f32 = 2000.0;

/// Lifecycle of a counter animation
///
/// `Idle → Running → Completed`; `Completed` is terminal. A completed
/// counter is never resumed or restarted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterState {
    Idle,
    Running,
    Completed,
}

/// Whether the animation wants another frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// Keep scheduling frames
    Continue,
    /// Terminal; stop scheduling frames
    Completed,
}

/// An eased count-up animation toward a fixed integer target
///
/// The displayed value is `floor(target * (1 - 2^(-10 * progress)))` while
/// running, and exactly `target` once complete. It is monotonic
/// non-decreasing over time and never mutates again after completion.
#[derive(Clone, Copy, Debug)]
pub struct CounterAnimation {
    target: u64,
    duration_ms: f32,
    elapsed_ms: f32,
    displayed: u64,
    state: CounterState,
}

impl CounterAnimation {
    /// Create an idle counter toward `target` with the default duration
    pub fn new(target: u64) -> Self {
        Self::with_duration_ms(target, DEFAULT_COUNTER_DURATION_MS)
    }

    /// Create an idle counter with a custom duration
    pub fn with_duration_ms(target: u64, duration_ms: f32) -> Self {
        Self {
            target,
            // A non-positive duration would make progress undefined; the
            // shortest meaningful animation is one frame.
            duration_ms: duration_ms.max(1.0),
            elapsed_ms: 0.0,
            displayed: 0,
            state: CounterState::Idle,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// The currently displayed value
    pub fn value(&self) -> u64 {
        self.displayed
    }

    /// Normalized progress in [0, 1]
    pub fn progress(&self) -> f32 {
        (self.elapsed_ms / self.duration_ms).min(1.0)
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == CounterState::Running
    }

    pub fn is_completed(&self) -> bool {
        self.state == CounterState::Completed
    }

    /// Begin the count-up
    ///
    /// Only an idle counter starts; calling this on a running or completed
    /// counter is a no-op, so a re-entering trigger cannot restart it.
    pub fn start(&mut self) {
        if self.state == CounterState::Idle {
            self.state = CounterState::Running;
        }
    }

    /// Advance by one frame delta (milliseconds)
    ///
    /// Returns [`StepResult::Completed`] once the target is reached; further
    /// calls keep returning it without changing the displayed value.
    pub fn step(&mut self, dt_ms: f32) -> StepResult {
        match self.state {
            CounterState::Idle => StepResult::Continue,
            CounterState::Completed => StepResult::Completed,
            CounterState::Running => {
                self.elapsed_ms += dt_ms.max(0.0);
                let progress = self.progress();
                if progress >= 1.0 {
                    self.displayed = self.target;
                    self.state = CounterState::Completed;
                    StepResult::Completed
                } else {
                    let eased = Easing::ExpoOut.apply(progress) as f64;
                    self.displayed = (self.target as f64 * eased).floor() as u64;
                    StepResult::Continue
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_idle() {
        let counter = CounterAnimation::new(100);
        assert_eq!(counter.state(), CounterState::Idle);
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_step_while_idle_is_a_no_op() {
        let mut counter = CounterAnimation::new(100);
        assert_eq!(counter.step(500.0), StepResult::Continue);
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.progress(), 0.0);
    }

    #[test]
    fn test_midpoint_value_matches_ease_out_expo() {
        // target = 100, duration = 2000ms: at progress 0.5 the displayed
        // value is floor(100 * (1 - 2^-5)) = floor(96.875) = 96.
        let mut counter = CounterAnimation::new(100);
        counter.start();
        assert_eq!(counter.step(1000.0), StepResult::Continue);
        assert_eq!(counter.value(), 96);
    }

    #[test]
    fn test_converges_exactly_to_target() {
        let mut counter = CounterAnimation::new(100);
        counter.start();
        counter.step(1000.0);
        assert_eq!(counter.step(1000.0), StepResult::Completed);
        assert_eq!(counter.value(), 100);
        assert_eq!(counter.state(), CounterState::Completed);
    }

    #[test]
    fn test_monotonic_non_decreasing() {
        let mut counter = CounterAnimation::new(4_200_000);
        counter.start();
        let mut last = 0;
        // Uneven frame deltas, like a real frame clock under load
        for dt in [3.0, 16.7, 8.0, 40.0, 16.7, 100.0, 5.0, 16.7, 33.4] {
            counter.step(dt);
            assert!(counter.value() >= last);
            last = counter.value();
        }
    }

    #[test]
    fn test_idempotent_after_completion() {
        let mut counter = CounterAnimation::new(42);
        counter.start();
        counter.step(5000.0);
        assert_eq!(counter.value(), 42);

        for _ in 0..10 {
            assert_eq!(counter.step(16.7), StepResult::Completed);
            assert_eq!(counter.value(), 42);
        }
    }

    #[test]
    fn test_completed_counter_never_restarts() {
        let mut counter = CounterAnimation::new(42);
        counter.start();
        counter.step(5000.0);

        counter.start();
        assert_eq!(counter.state(), CounterState::Completed);
        assert_eq!(counter.value(), 42);
    }

    #[test]
    fn test_zero_target() {
        let mut counter = CounterAnimation::new(0);
        counter.start();
        assert_eq!(counter.step(100.0), StepResult::Continue);
        assert_eq!(counter.value(), 0);
        counter.step(2000.0);
        assert_eq!(counter.value(), 0);
        assert!(counter.is_completed());
    }

    #[test]
    fn test_negative_dt_does_not_rewind() {
        let mut counter = CounterAnimation::new(100);
        counter.start();
        counter.step(1000.0);
        let value = counter.value();
        counter.step(-500.0);
        assert!(counter.value() >= value);
    }
}
