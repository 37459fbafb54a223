use super::pointer::PointerSample;
use super::reveal::IntersectionSample;
use super::scroll::ScrollSample;
use super::source::EventSource;

/// Page-wide event streams.
///
/// The browser layer is the only producer; components subscribe through the
/// trackers and release their registrations when they unmount.
#[derive(Debug, Clone, Default)]
pub struct PageEvents {
    pub scroll: EventSource<ScrollSample>,
    pub pointer: EventSource<PointerSample>,
    pub intersections: EventSource<IntersectionSample>,
}

impl PageEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_to(&self, offset: f64) {
        self.scroll.emit(&ScrollSample { offset });
    }

    pub fn move_pointer(&self, sample: PointerSample) {
        self.pointer.emit(&sample);
    }

    pub fn intersect(&self, sample: IntersectionSample) {
        self.intersections.emit(&sample);
    }

    /// Live registrations across every stream.
    pub fn listener_count(&self) -> usize {
        self.scroll.listener_count()
            + self.pointer.listener_count()
            + self.intersections.listener_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{
        ManualScheduler, PointerPosition, PointerTracker, Rect, RevealAnimator, RevealState,
        ScrollTracker, TypewriterEffect,
    };
    use std::time::Duration;

    #[test]
    fn test_page_scroll_scenario() {
        let events = PageEvents::new();
        let navbar = ScrollTracker::mount(&events.scroll, 50.0);

        events.scroll_to(0.0);
        assert!(!navbar.is_scrolled());
        events.scroll_to(200.0);
        assert!(navbar.is_scrolled());
        events.scroll_to(10.0);
        assert!(!navbar.is_scrolled());
    }

    #[test]
    fn test_streams_are_independent() {
        let events = PageEvents::new();
        let scheduler = ManualScheduler::new();
        let navbar = ScrollTracker::mount(&events.scroll, 50.0);
        let glow = PointerTracker::mount(&events.pointer);
        let hero = TypewriterEffect::mount(&scheduler, "KAVIN", Duration::from_millis(100));
        let animator = RevealAnimator::new(&events.intersections);
        let section = animator.register();

        events.move_pointer(PointerSample::mouse(12.0, 34.0));
        scheduler.advance(2);

        assert!(!navbar.is_scrolled());
        assert_eq!(glow.position(), PointerPosition { x: 12.0, y: 34.0 });
        assert_eq!(hero.revealed_text(), "KA");
        assert_eq!(section.state(), RevealState::NotYetSeen);

        events.scroll_to(300.0);
        events.intersect(IntersectionSample::from_layout(
            section.id(),
            Rect::new(0.0, 100.0, 800.0, 400.0),
            Rect::new(0.0, 0.0, 1280.0, 720.0),
        ));

        assert!(navbar.is_scrolled());
        assert_eq!(glow.position(), PointerPosition { x: 12.0, y: 34.0 });
        assert_eq!(hero.revealed(), 2);
        assert_eq!(section.state(), RevealState::Revealed);
    }

    #[test]
    fn test_intersect_reaches_registered_element() {
        let events = PageEvents::new();
        let animator = RevealAnimator::new(&events.intersections);
        let section = animator.register();

        events.intersect(IntersectionSample {
            element: section.id(),
            ratio: 0.0,
        });
        assert_eq!(section.state(), RevealState::NotYetSeen);
        events.intersect(IntersectionSample {
            element: section.id(),
            ratio: 0.01,
        });
        assert_eq!(section.state(), RevealState::Revealed);
    }

    #[test]
    fn test_unmounting_everything_leaves_no_listeners() {
        let events = PageEvents::new();
        let scheduler = ManualScheduler::new();
        let navbar = ScrollTracker::mount(&events.scroll, 50.0);
        let glow = PointerTracker::mount(&events.pointer);
        let hero = TypewriterEffect::mount(&scheduler, "KAVIN", Duration::from_millis(100));
        let animator = RevealAnimator::new(&events.intersections);
        let sections = (0..4).map(|_| animator.register()).collect::<Vec<_>>();
        assert_eq!(events.listener_count(), 6);
        assert_eq!(scheduler.active_tasks(), 1);

        navbar.unmount();
        glow.unmount();
        hero.unmount();
        drop(sections);

        assert_eq!(events.listener_count(), 0);
        assert_eq!(scheduler.active_tasks(), 0);

        events.scroll_to(999.0);
        events.move_pointer(PointerSample::mouse(1.0, 2.0));
        scheduler.advance(5);
        assert!(!navbar.is_scrolled());
        assert_eq!(glow.position(), PointerPosition::default());
        assert_eq!(hero.revealed(), 0);
        assert_eq!(animator.registered(), 0);
    }
}
