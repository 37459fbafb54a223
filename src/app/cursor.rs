use leptos::prelude::*;

use crate::interaction::{PageEvents, PointerPosition, PointerTracker};

/// Decorative glow that trails the pointer. Hidden on small screens; touch
/// input never moves it.
#[component]
pub fn CursorGlow() -> impl IntoView {
    let events = expect_context::<PageEvents>();
    let (position, set_position) = signal(PointerPosition::default());

    let tracker = PointerTracker::mount(&events.pointer);
    let watch = tracker.on_change(move |p| set_position.set(*p));
    on_cleanup(move || {
        watch.cancel();
        tracker.unmount();
    });

    view! {
        <div
            class="cursor-glow hidden md:block"
            style:left=move || format!("{}px", position.get().x)
            style:top=move || format!("{}px", position.get().y)
        />
    }
}
