use leptos::prelude::*;

use crate::interaction::PageEvents;

#[cfg(feature = "hydrate")]
use crate::interaction::{PointerKind, PointerSample, ScheduleError, Scheduler, Subscription, Task};
#[cfg(feature = "hydrate")]
use std::time::Duration;

/// Creates the page-wide event streams and puts them in context.
///
/// In the browser the window's scroll and pointer listeners feed them; they
/// are removed with the owning component. On the server nothing is attached.
pub fn provide_page_events() -> PageEvents {
    let events = PageEvents::new();
    provide_context(events.clone());

    #[cfg(feature = "hydrate")]
    attach_window_listeners(&events);

    events
}

#[cfg(feature = "hydrate")]
fn current_scroll() -> f64 {
    window().scroll_y().unwrap_or_default()
}

#[cfg(feature = "hydrate")]
fn attach_window_listeners(events: &PageEvents) {
    use leptos::ev;
    use leptos_use::{use_event_listener, use_window};

    let scroll = events.clone();
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        scroll.scroll_to(current_scroll());
    });

    let pointer = events.clone();
    let _ = use_event_listener(use_window(), ev::pointermove, move |ev| {
        pointer.move_pointer(PointerSample {
            x: ev.client_x() as f64,
            y: ev.client_y() as f64,
            kind: PointerKind::from(ev.pointer_type().as_str()),
        });
    });

    // trackers mount during render; give them the offset we loaded at
    let initial = events.clone();
    Effect::new(move |_| {
        let offset = current_scroll();
        log::debug!("initial scroll offset {}", offset);
        initial.scroll_to(offset);
    });
}

/// Runs tasks on `window.setInterval`.
#[cfg(feature = "hydrate")]
pub struct IntervalScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for IntervalScheduler {
    fn every(&self, period: Duration, task: Task) -> Result<Subscription, ScheduleError> {
        let handle = set_interval_with_handle(move || task(), period)
            .map_err(|e| ScheduleError::Unavailable(format!("{e:?}")))?;
        Ok(Subscription::new(move || handle.clear()))
    }
}
