use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::source::{EventSource, Subscription};

/// Vertical scroll offset of the page, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
}

pub fn scrolled_past(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Tracks whether the page is scrolled past a fixed threshold.
///
/// Mounting registers against the page's scroll source; `on_change` listeners
/// only hear about flips of the boolean, not every sample.
pub struct ScrollTracker {
    scrolled: Arc<AtomicBool>,
    changes: EventSource<bool>,
    registration: Subscription,
}

impl ScrollTracker {
    pub fn mount(source: &EventSource<ScrollSample>, threshold: f64) -> Self {
        let scrolled = Arc::new(AtomicBool::new(false));
        let changes = EventSource::new();

        let registration = {
            let scrolled = Arc::clone(&scrolled);
            let changes = changes.clone();
            source.subscribe(move |sample: &ScrollSample| {
                let next = scrolled_past(sample.offset, threshold);
                if scrolled.swap(next, Ordering::SeqCst) != next {
                    changes.emit(&next);
                }
            })
        };

        Self {
            scrolled,
            changes,
            registration,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.load(Ordering::SeqCst)
    }

    pub fn on_change(&self, listener: impl Fn(&bool) + Send + Sync + 'static) -> Subscription {
        self.changes.subscribe(listener)
    }

    pub fn is_mounted(&self) -> bool {
        self.registration.is_active()
    }

    pub fn unmount(&self) {
        self.registration.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    const T: f64 = 50.0;

    fn scroll_to(source: &EventSource<ScrollSample>, offset: f64) {
        source.emit(&ScrollSample { offset });
    }

    #[test]
    fn test_threshold_boundaries() {
        let source = EventSource::new();
        let tracker = ScrollTracker::mount(&source, T);
        assert!(!tracker.is_scrolled());

        scroll_to(&source, T - 1.0);
        assert!(!tracker.is_scrolled());
        scroll_to(&source, T);
        assert!(!tracker.is_scrolled());
        scroll_to(&source, T + 1.0);
        assert!(tracker.is_scrolled());
    }

    #[test]
    fn test_notifies_only_on_flip() {
        let source = EventSource::new();
        let tracker = ScrollTracker::mount(&source, T);
        let flips = Arc::new(AtomicUsize::new(0));
        let f = Arc::clone(&flips);
        let _watch = tracker.on_change(move |_| {
            f.fetch_add(1, Ordering::SeqCst);
        });

        for offset in [0.0, 10.0, 60.0, 120.0, 400.0, 20.0, 0.0] {
            scroll_to(&source, offset);
        }
        assert_eq!(flips.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unmount_stops_tracking() {
        let source = EventSource::new();
        let tracker = ScrollTracker::mount(&source, T);
        let flips = Arc::new(AtomicUsize::new(0));
        let f = Arc::clone(&flips);
        let _watch = tracker.on_change(move |_| {
            f.fetch_add(1, Ordering::SeqCst);
        });

        tracker.unmount();
        tracker.unmount();
        assert!(!tracker.is_mounted());
        assert_eq!(source.listener_count(), 0);

        scroll_to(&source, 500.0);
        assert!(!tracker.is_scrolled());
        assert_eq!(flips.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drop_releases_scroll_listener() {
        let source = EventSource::new();
        let tracker = ScrollTracker::mount(&source, T);
        assert_eq!(source.listener_count(), 1);
        drop(tracker);
        assert_eq!(source.listener_count(), 0);
    }
}
