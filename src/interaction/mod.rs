//! Client-side interaction state for the portfolio page.
//!
//! Four independent machines, each driven by its own event stream:
//! - [`ScrollTracker`]: is the page scrolled past the navbar threshold
//! - [`PointerTracker`]: where the cursor glow should sit
//! - [`TypewriterEffect`]: how much of the hero name is typed out
//! - [`RevealAnimator`]: which sections have played their enter animation
//!
//! Nothing here touches the DOM. The `app` layer feeds [`PageEvents`] from
//! browser listeners, and tests feed them by hand.

mod page;
mod pointer;
mod reveal;
mod schedule;
mod scroll;
mod source;
mod typewriter;

pub use page::PageEvents;
pub use pointer::{PointerKind, PointerPosition, PointerSample, PointerTracker};
pub use reveal::{
    ElementId, IntersectionSample, Rect, RevealAnimator, RevealHandle, RevealState,
    stagger_delay, REVEAL_THRESHOLDS,
};
pub use schedule::{ManualScheduler, ScheduleError, Scheduler, Task, Tick};
pub use scroll::{scrolled_past, ScrollSample, ScrollTracker};
pub use source::{EventSource, Subscription, SubscriptionSlot};
pub use typewriter::{char_prefix, TypewriterEffect};
