//! Animation scheduler
//!
//! Manages all active animations and updates them each frame. The embedder
//! drives the scheduler: it calls [`AnimationScheduler::tick`] once per
//! animation frame and stops calling when nothing is active. Components
//! register through [`SchedulerHandle`], a weak handle that safely no-ops
//! once the scheduler is gone.

use crate::counter::{CounterAnimation, CounterState, StepResult};
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};
use std::time::Instant;

new_key_type! {
    /// Handle to a registered counter animation
    pub struct CounterId;
    /// Handle to a registered per-frame callback
    pub struct TickCallbackId;
}

/// A per-frame callback
///
/// Receives the frame delta in milliseconds and returns whether it wants
/// another frame. Returning `false` unregisters the callback; that is the
/// only cancellation mechanism - cooperative, no preemption.
pub type TickCallback = Box<dyn FnMut(f32) -> bool + Send>;

/// Internal state of the animation scheduler
struct SchedulerInner {
    counters: SlotMap<CounterId, CounterAnimation>,
    tick_callbacks: SlotMap<TickCallbackId, TickCallback>,
    last_frame: Instant,
}

impl SchedulerInner {
    fn has_active(&self) -> bool {
        !self.tick_callbacks.is_empty() || self.counters.iter().any(|(_, c)| c.is_running())
    }
}

/// The animation scheduler that ticks all active animations
///
/// Held by the application context and shared via [`SchedulerHandle`].
/// Completed counters stay registered until their wrapper drops, so their
/// final value remains readable; they just stop being active.
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                counters: SlotMap::with_key(),
                tick_callbacks: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Tick all animations
    ///
    /// Computes the frame delta from the previous tick, steps every running
    /// counter, and runs every tick callback. Returns true if anything is
    /// still active (needs another frame).
    pub fn tick(&self) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let now = Instant::now();
        let dt_ms = (now - inner.last_frame).as_secs_f32() * 1000.0;
        inner.last_frame = now;
        Self::advance(&mut inner, dt_ms)
    }

    /// Tick with an explicit frame delta (milliseconds)
    ///
    /// Lets tests and headless embedders drive the clock deterministically.
    pub fn tick_with_dt(&self, dt_ms: f32) -> bool {
        let mut inner = self.inner.lock().unwrap();
        inner.last_frame = Instant::now();
        Self::advance(&mut inner, dt_ms)
    }

    fn advance(inner: &mut SchedulerInner, dt_ms: f32) -> bool {
        for (_, counter) in inner.counters.iter_mut() {
            counter.step(dt_ms);
        }

        // Run callbacks and drop the ones that decline the next frame.
        let finished: Vec<TickCallbackId> = inner
            .tick_callbacks
            .iter_mut()
            .filter_map(|(id, callback)| (!callback(dt_ms)).then_some(id))
            .collect();
        for id in finished {
            tracing::trace!(?id, "tick callback finished");
            inner.tick_callbacks.remove(id);
        }

        inner.has_active()
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        self.inner.lock().unwrap().has_active()
    }

    /// Get the number of registered counters
    pub fn counter_count(&self) -> usize {
        self.inner.lock().unwrap().counters.len()
    }

    /// Get the number of registered tick callbacks
    pub fn tick_callback_count(&self) -> usize {
        self.inner.lock().unwrap().tick_callbacks.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
///
/// Passed to components that need to register animations. It won't prevent
/// the scheduler from being dropped; every operation no-ops once it is.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Register a counter animation and return its ID
    pub fn register_counter(&self, counter: CounterAnimation) -> Option<CounterId> {
        self.inner.upgrade().map(|inner| {
            let mut guard = inner.lock().unwrap();
            // Reset last_frame to now to prevent a huge dt on the first tick
            // after a registration while the scheduler was parked.
            guard.last_frame = Instant::now();
            guard.counters.insert(counter)
        })
    }

    /// Start a counter (no-op unless it is idle)
    pub fn start_counter(&self, id: CounterId) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(counter) = inner.lock().unwrap().counters.get_mut(id) {
                counter.start();
            }
        }
    }

    /// Get a counter's currently displayed value
    pub fn counter_value(&self, id: CounterId) -> Option<u64> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().counters.get(id).map(|c| c.value()))
    }

    /// Get a counter's lifecycle state
    pub fn counter_state(&self, id: CounterId) -> Option<CounterState> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().counters.get(id).map(|c| c.state()))
    }

    /// Step a single counter directly, outside the shared frame clock
    pub fn step_counter(&self, id: CounterId, dt_ms: f32) -> Option<StepResult> {
        self.inner.upgrade().and_then(|inner| {
            inner
                .lock()
                .unwrap()
                .counters
                .get_mut(id)
                .map(|c| c.step(dt_ms))
        })
    }

    /// Remove a counter
    pub fn remove_counter(&self, id: CounterId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().counters.remove(id);
        }
    }

    /// Register a per-frame callback
    pub fn register_tick_callback(&self, callback: TickCallback) -> Option<TickCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().tick_callbacks.insert(callback))
    }

    /// Remove a tick callback before it finishes on its own
    pub fn remove_tick_callback(&self, id: TickCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().tick_callbacks.remove(id);
        }
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

/// A counter animation that automatically registers with the scheduler
///
/// Created idle; [`start`](AnimatedCounter::start) begins the count-up
/// (typically from a visibility trigger). The underlying animation is
/// removed from the scheduler when this wrapper drops.
pub struct AnimatedCounter {
    handle: SchedulerHandle,
    id: Option<CounterId>,
    target: u64,
}

impl AnimatedCounter {
    /// Register a counter toward `target` with the default duration
    pub fn new(handle: SchedulerHandle, target: u64) -> Self {
        Self::with_animation(handle, CounterAnimation::new(target))
    }

    /// Register a pre-configured counter animation
    pub fn with_animation(handle: SchedulerHandle, counter: CounterAnimation) -> Self {
        let target = counter.target();
        let id = handle.register_counter(counter);
        Self { handle, id, target }
    }

    /// The scheduler-side ID, if registration succeeded
    pub fn id(&self) -> Option<CounterId> {
        self.id
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Begin the count-up (no-op if already running or completed)
    pub fn start(&self) {
        if let Some(id) = self.id {
            self.handle.start_counter(id);
        }
    }

    /// Get the currently displayed value
    ///
    /// Falls back to the target if the scheduler is gone - the animation
    /// would have converged there anyway.
    pub fn value(&self) -> u64 {
        self.id
            .and_then(|id| self.handle.counter_value(id))
            .unwrap_or(self.target)
    }

    pub fn state(&self) -> Option<CounterState> {
        self.id.and_then(|id| self.handle.counter_state(id))
    }

    pub fn is_running(&self) -> bool {
        self.state() == Some(CounterState::Running)
    }

    pub fn is_completed(&self) -> bool {
        self.state() == Some(CounterState::Completed)
    }
}

impl Drop for AnimatedCounter {
    fn drop(&mut self) {
        if let Some(id) = self.id {
            self.handle.remove_counter(id);
        }
    }
}
