//! Application context
//!
//! Owns the services every section shares: the animation scheduler, the
//! visibility observer, the embedded dataset, and the configuration. There
//! is no ambient global; embedders construct a context and pass it down
//! explicitly, which also keeps tests hermetic.

use crate::config::AppConfig;
use crate::error::Result;
use ecopulse_animation::{
    AnimatedCounter, AnimationScheduler, CounterAnimation, CounterState, SchedulerHandle,
    VisibilityObserver, WatchId,
};
use ecopulse_core::DisplaySink;
use ecopulse_data::Dataset;

/// A stat card binding: one counter, one display sink
///
/// The counter starts when the card first becomes visible. While it runs,
/// every frame publishes the eased value into the sink; on completion the
/// exact target is published once and the binding goes quiet.
struct StatBinding {
    counter: AnimatedCounter,
    sink: Box<dyn DisplaySink + Send>,
    published_final: bool,
}

/// Shared application state
pub struct EcoPulseContext {
    config: AppConfig,
    scheduler: AnimationScheduler,
    observer: VisibilityObserver,
    dataset: Dataset,
    stats: Vec<StatBinding>,
}

impl EcoPulseContext {
    /// Create a context with the default configuration
    pub fn new() -> Self {
        Self::build(AppConfig::default())
    }

    /// Create a context with a validated configuration
    pub fn with_config(config: AppConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: AppConfig) -> Self {
        Self {
            observer: VisibilityObserver::with_threshold(config.visibility_threshold),
            scheduler: AnimationScheduler::new(),
            dataset: Dataset,
            stats: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn dataset(&self) -> Dataset {
        self.dataset
    }

    /// Handle for registering animations outside the stat bindings
    pub fn scheduler_handle(&self) -> SchedulerHandle {
        self.scheduler.handle()
    }

    /// Bind a stat card
    ///
    /// Registers a counter toward `target` and watches for the card's first
    /// visibility, which starts the count-up. Returns the watch ID the
    /// platform layer reports intersections against.
    pub fn bind_stat(&mut self, target: u64, sink: Box<dyn DisplaySink + Send>) -> WatchId {
        let counter = AnimatedCounter::with_animation(
            self.scheduler.handle(),
            CounterAnimation::with_duration_ms(target, self.config.counter_duration_ms),
        );
        let handle = self.scheduler.handle();
        let counter_id = counter.id();
        let watch = self.observer.watch(move || {
            if let Some(id) = counter_id {
                handle.start_counter(id);
            }
        });
        tracing::debug!(target, ?watch, "stat card bound");
        self.stats.push(StatBinding {
            counter,
            sink,
            published_final: false,
        });
        watch
    }

    /// Report the visible fraction of a watched element
    pub fn report_visibility(&mut self, watch: WatchId, visible_fraction: f32) -> bool {
        self.observer.report(watch, visible_fraction)
    }

    pub fn stat_count(&self) -> usize {
        self.stats.len()
    }

    pub fn has_active_animations(&self) -> bool {
        self.scheduler.has_active_animations()
    }

    /// Advance one frame on the wall clock
    ///
    /// Returns true if anything still wants another frame.
    pub fn frame(&mut self) -> bool {
        let active = self.scheduler.tick();
        self.publish();
        active
    }

    /// Advance one frame with an explicit delta (milliseconds)
    pub fn frame_with_dt(&mut self, dt_ms: f32) -> bool {
        let active = self.scheduler.tick_with_dt(dt_ms);
        self.publish();
        active
    }

    fn publish(&mut self) {
        for binding in &mut self.stats {
            match binding.counter.state() {
                Some(CounterState::Running) => {
                    binding.sink.set_text(&binding.counter.value().to_string());
                }
                Some(CounterState::Completed) if !binding.published_final => {
                    binding.sink.set_text(&binding.counter.target().to_string());
                    binding.published_final = true;
                }
                _ => {}
            }
        }
    }
}

impl Default for EcoPulseContext {
    fn default() -> Self {
        Self::new()
    }
}
