//! EcoPulse Animation System
//!
//! Eased counter animations, frame scheduling, and visibility triggers.
//!
//! # Features
//!
//! - **Counter Animations**: count-up displays with exponential ease-out,
//!   frozen exactly at their target once complete
//! - **Easing Functions**: time-to-value mappings for timed animations
//! - **Frame Scheduler**: ticks every registered animation once per frame,
//!   with weak handles for registration from components
//! - **Visibility Observer**: fires a callback once when a watched element
//!   first crosses its visibility threshold
//!
//! Everything here runs on a single cooperatively scheduled frame clock:
//! the embedder calls [`AnimationScheduler::tick`] once per frame and stops
//! calling it when nothing is active.

pub mod counter;
pub mod easing;
pub mod scheduler;
pub mod visibility;

pub use counter::{CounterAnimation, CounterState, StepResult, DEFAULT_COUNTER_DURATION_MS};
pub use easing::Easing;
pub use scheduler::{
    AnimatedCounter, AnimationScheduler, CounterId, SchedulerHandle, TickCallback, TickCallbackId,
};
pub use visibility::{VisibilityObserver, WatchId, DEFAULT_VISIBILITY_THRESHOLD};
