//! Visibility observer
//!
//! Fires a callback the first time a watched element crosses the visibility
//! threshold. Each entry triggers at most once and the guard never resets,
//! so an element scrolling in and out of view cannot re-fire its animation.
//!
//! The platform layer owns the actual intersection measurements; it just
//! reports visible fractions here.

use slotmap::{new_key_type, SlotMap};

/// Fraction of an element's area that must be visible to trigger
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.1;

new_key_type! {
    /// Handle to a watched element
    pub struct WatchId;
}

type VisibilityCallback = Box<dyn FnMut() + Send>;

struct WatchEntry {
    callback: VisibilityCallback,
    triggered: bool,
}

/// Watches elements and fires each entry's callback once on first visibility
pub struct VisibilityObserver {
    threshold: f32,
    entries: SlotMap<WatchId, WatchEntry>,
}

impl VisibilityObserver {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_VISIBILITY_THRESHOLD)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            entries: SlotMap::with_key(),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Watch an element; the callback fires once when it first becomes visible
    pub fn watch(&mut self, callback: impl FnMut() + Send + 'static) -> WatchId {
        self.entries.insert(WatchEntry {
            callback: Box::new(callback),
            triggered: false,
        })
    }

    /// Stop watching an element
    pub fn unwatch(&mut self, id: WatchId) {
        self.entries.remove(id);
    }

    /// Report the visible fraction of a watched element
    ///
    /// Returns true if this report fired the callback. Already-triggered
    /// entries and fractions below the threshold are ignored.
    pub fn report(&mut self, id: WatchId, visible_fraction: f32) -> bool {
        let Some(entry) = self.entries.get_mut(id) else {
            return false;
        };
        if entry.triggered || visible_fraction < self.threshold {
            return false;
        }
        entry.triggered = true;
        tracing::debug!(?id, visible_fraction, "visibility trigger fired");
        (entry.callback)();
        true
    }

    /// Whether an entry has already fired
    pub fn has_triggered(&self, id: WatchId) -> bool {
        self.entries.get(id).map(|e| e.triggered).unwrap_or(false)
    }

    pub fn watch_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for VisibilityObserver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn counting_observer() -> (VisibilityObserver, WatchId, Arc<Mutex<u32>>) {
        let fired = Arc::new(Mutex::new(0u32));
        let mut observer = VisibilityObserver::new();
        let counter = Arc::clone(&fired);
        let id = observer.watch(move || *counter.lock().unwrap() += 1);
        (observer, id, fired)
    }

    #[test]
    fn test_fires_at_threshold() {
        let (mut observer, id, fired) = counting_observer();

        assert!(!observer.report(id, 0.05));
        assert_eq!(*fired.lock().unwrap(), 0);

        assert!(observer.report(id, 0.1));
        assert_eq!(*fired.lock().unwrap(), 1);
        assert!(observer.has_triggered(id));
    }

    #[test]
    fn test_fires_at_most_once() {
        let (mut observer, id, fired) = counting_observer();

        assert!(observer.report(id, 1.0));
        // Element scrolls out and back in
        assert!(!observer.report(id, 0.0));
        assert!(!observer.report(id, 1.0));
        assert_eq!(*fired.lock().unwrap(), 1);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let (mut observer, id, _) = counting_observer();
        observer.unwatch(id);
        assert!(!observer.report(id, 1.0));
        assert!(!observer.has_triggered(id));
    }

    #[test]
    fn test_custom_threshold() {
        let fired = Arc::new(Mutex::new(0u32));
        let counter = Arc::clone(&fired);
        let mut observer = VisibilityObserver::with_threshold(0.5);
        let id = observer.watch(move || *counter.lock().unwrap() += 1);

        assert!(!observer.report(id, 0.49));
        assert!(observer.report(id, 0.5));
        assert_eq!(*fired.lock().unwrap(), 1);
    }
}
