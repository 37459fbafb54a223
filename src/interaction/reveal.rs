use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::source::{EventSource, Subscription, SubscriptionSlot};

/// Observer thresholds for reveal targets.
///
/// An element first reported while touching the viewport edge has already
/// crossed 0.0 with a ratio of 0, so without a positive threshold the browser
/// would not report it again until it left and came back.
pub const REVEAL_THRESHOLDS: [f64; 2] = [0.0, 1e-3];

/// Transition delay for the `index`th item of a revealed grid.
pub fn stagger_delay(index: usize, step_ms: u64) -> u64 {
    (index as u64).saturating_mul(step_ms)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    NotYetSeen,
    Revealed,
}

/// Axis-aligned box in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn overlap_area(&self, other: &Rect) -> f64 {
        let w = (self.x + self.width).min(other.x + other.width) - self.x.max(other.x);
        let h = (self.y + self.height).min(other.y + other.height) - self.y.max(other.y);
        w.max(0.0) * h.max(0.0)
    }

    /// Nonzero-area overlap. Touching edges don't count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.overlap_area(other) > 0.0
    }

    /// Fraction of `self` inside `viewport`, 0.0 for degenerate boxes.
    pub fn visible_fraction(&self, viewport: &Rect) -> f64 {
        let area = self.area();
        if area > 0.0 {
            self.overlap_area(viewport) / area
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub element: ElementId,
    /// Visible fraction of the element, as an IntersectionObserver reports it.
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn from_layout(element: ElementId, bounds: Rect, viewport: Rect) -> Self {
        Self {
            element,
            ratio: bounds.visible_fraction(&viewport),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.ratio > 0.0
    }
}

/// Fire-once reveal bookkeeping for every tagged element on the page.
///
/// Each registered element starts `NotYetSeen` and flips to `Revealed` on its
/// first visible intersection sample, at which point it stops listening.
#[derive(Clone)]
pub struct RevealAnimator {
    source: EventSource<IntersectionSample>,
    states: Arc<DashMap<ElementId, RevealState>>,
    next_id: Arc<AtomicU64>,
}

impl RevealAnimator {
    pub fn new(source: &EventSource<IntersectionSample>) -> Self {
        Self {
            source: source.clone(),
            states: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn register(&self) -> RevealHandle {
        let id = ElementId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.states.insert(id, RevealState::NotYetSeen);

        let reveals = EventSource::new();
        let observation = Arc::new(SubscriptionSlot::new());

        let listener = {
            let states = Arc::clone(&self.states);
            let reveals = reveals.clone();
            let observation = Arc::downgrade(&observation);
            move |sample: &IntersectionSample| {
                if sample.element != id || !sample.is_visible() {
                    return;
                }
                let newly_revealed = states
                    .get_mut(&id)
                    .map(|mut state| {
                        let was_hidden = *state == RevealState::NotYetSeen;
                        *state = RevealState::Revealed;
                        was_hidden
                    })
                    .unwrap_or(false);
                if newly_revealed {
                    reveals.emit(&());
                }
                if let Some(observation) = observation.upgrade() {
                    observation.cancel();
                }
            }
        };
        observation.fill(self.source.subscribe(listener));

        RevealHandle {
            id,
            states: Arc::clone(&self.states),
            reveals,
            observation,
        }
    }

    pub fn state(&self, id: ElementId) -> Option<RevealState> {
        self.states.get(&id).map(|s| *s)
    }

    pub fn registered(&self) -> usize {
        self.states.len()
    }

    /// Elements still waiting for their first intersection.
    pub fn pending(&self) -> usize {
        self.states
            .iter()
            .filter(|s| *s.value() == RevealState::NotYetSeen)
            .count()
    }
}

/// One registered element. Dropping it forgets the element.
pub struct RevealHandle {
    id: ElementId,
    states: Arc<DashMap<ElementId, RevealState>>,
    reveals: EventSource<()>,
    observation: Arc<SubscriptionSlot>,
}

impl RevealHandle {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn state(&self) -> RevealState {
        self.states
            .get(&self.id)
            .map(|s| *s)
            .unwrap_or(RevealState::NotYetSeen)
    }

    pub fn is_revealed(&self) -> bool {
        self.state() == RevealState::Revealed
    }

    /// Whether the element is still subscribed to intersection samples.
    pub fn is_observing(&self) -> bool {
        self.observation.is_active()
    }

    pub fn on_reveal(&self, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
        self.reveals.subscribe(move |_| listener())
    }

    pub fn unmount(&self) {
        self.observation.cancel();
        self.states.remove(&self.id);
    }
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 720.0)
    }

    #[test]
    fn test_rect_intersection() {
        let vp = viewport();
        assert!(Rect::new(100.0, 700.0, 200.0, 200.0).intersects(&vp));
        // touching the bottom edge is not an intersection
        assert!(!Rect::new(100.0, 720.0, 200.0, 200.0).intersects(&vp));
        assert!(!Rect::new(0.0, 1500.0, 200.0, 200.0).intersects(&vp));
        assert!(!Rect::new(10.0, 10.0, 0.0, 50.0).intersects(&vp));

        let half = Rect::new(0.0, 620.0, 100.0, 200.0);
        assert_eq!(half.visible_fraction(&vp), 0.5);
        assert_eq!(Rect::default().visible_fraction(&vp), 0.0);
    }

    #[test]
    fn test_thresholds_catch_first_nonzero_overlap() {
        assert!(REVEAL_THRESHOLDS.contains(&0.0));
        assert!(REVEAL_THRESHOLDS.iter().any(|t| *t > 0.0 && *t < 0.01));
    }

    #[test]
    fn test_stagger_delay() {
        let delays = (0..3).map(|i| stagger_delay(i, 100)).collect::<Vec<_>>();
        assert_eq!(delays, vec![0, 100, 200]);
        assert_eq!(stagger_delay(usize::MAX, u64::MAX), u64::MAX);
    }

    #[test]
    fn test_edge_contact_then_overlap_reveals() {
        let source = EventSource::new();
        let animator = RevealAnimator::new(&source);
        let card = animator.register();

        // first report: bottom edge of the viewport, zero overlap
        source.emit(&IntersectionSample::from_layout(
            card.id(),
            Rect::new(0.0, 720.0, 400.0, 300.0),
            viewport(),
        ));
        assert_eq!(card.state(), RevealState::NotYetSeen);
        assert!(card.is_observing());

        source.emit(&IntersectionSample {
            element: card.id(),
            ratio: 0.3,
        });
        assert_eq!(card.state(), RevealState::Revealed);
        assert!(!card.is_observing());
    }

    #[test]
    fn test_stays_hidden_until_visible() {
        let source = EventSource::new();
        let animator = RevealAnimator::new(&source);
        let card = animator.register();

        source.emit(&IntersectionSample {
            element: card.id(),
            ratio: 0.0,
        });
        source.emit(&IntersectionSample::from_layout(
            card.id(),
            Rect::new(0.0, 2000.0, 400.0, 300.0),
            viewport(),
        ));

        assert_eq!(card.state(), RevealState::NotYetSeen);
        assert!(card.is_observing());
        assert_eq!(animator.pending(), 1);
    }

    #[test]
    fn test_reveal_is_fire_once() {
        let source = EventSource::new();
        let animator = RevealAnimator::new(&source);
        let card = animator.register();
        let plays = Arc::new(AtomicUsize::new(0));
        let p = Arc::clone(&plays);
        let _watch = card.on_reveal(move || {
            p.fetch_add(1, Ordering::SeqCst);
        });

        let bounds = Rect::new(0.0, 600.0, 400.0, 300.0);
        source.emit(&IntersectionSample::from_layout(card.id(), bounds, viewport()));
        assert!(card.is_revealed());
        assert!(!card.is_observing());

        // scrolls back out, then in again
        source.emit(&IntersectionSample {
            element: card.id(),
            ratio: 0.0,
        });
        source.emit(&IntersectionSample {
            element: card.id(),
            ratio: 1.0,
        });

        assert_eq!(card.state(), RevealState::Revealed);
        assert_eq!(plays.load(Ordering::SeqCst), 1);
        assert_eq!(source.listener_count(), 0);
        assert_eq!(animator.pending(), 0);
    }

    #[test]
    fn test_elements_reveal_independently() {
        let source = EventSource::new();
        let animator = RevealAnimator::new(&source);
        let header = animator.register();
        let card = animator.register();
        assert_ne!(header.id(), card.id());

        source.emit(&IntersectionSample {
            element: card.id(),
            ratio: 0.25,
        });

        assert_eq!(header.state(), RevealState::NotYetSeen);
        assert_eq!(card.state(), RevealState::Revealed);
        assert_eq!(animator.state(card.id()), Some(RevealState::Revealed));
        assert_eq!(source.listener_count(), 1);
    }

    #[test]
    fn test_unmount_before_reveal() {
        let source = EventSource::new();
        let animator = RevealAnimator::new(&source);
        let card = animator.register();
        let id = card.id();
        let plays = Arc::new(AtomicUsize::new(0));
        let p = Arc::clone(&plays);
        let _watch = card.on_reveal(move || {
            p.fetch_add(1, Ordering::SeqCst);
        });

        drop(card);
        source.emit(&IntersectionSample {
            element: id,
            ratio: 1.0,
        });

        assert_eq!(plays.load(Ordering::SeqCst), 0);
        assert_eq!(animator.state(id), None);
        assert_eq!(animator.registered(), 0);
        assert_eq!(source.listener_count(), 0);
    }
}
