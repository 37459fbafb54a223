use leptos::prelude::*;

use crate::content::interaction_config;
use crate::interaction::{PageEvents, ScrollTracker};

pub const SECTIONS: [&str; 5] = ["About", "Education", "Skills", "Projects", "Contact"];

#[component]
pub fn NavBar() -> impl IntoView {
    let events = expect_context::<PageEvents>();
    let (scrolled, set_scrolled) = signal(false);

    let tracker = ScrollTracker::mount(&events.scroll, interaction_config().scroll_threshold);
    let watch = tracker.on_change(move |s| set_scrolled.set(*s));
    on_cleanup(move || {
        watch.cancel();
        tracker.unmount();
    });

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-bat-black/80 backdrop-blur-md border-b border-white/5 py-4"
            } else {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-transparent py-8"
            }
        }>
            <div class="max-w-7xl mx-auto px-6 flex justify-between items-center">
                <div class="text-xl font-black tracking-tighter text-bat-accent flex items-center gap-2 nav-brand">
                    <div class="w-2 h-2 bg-bat-accent rounded-full animate-pulse" />
                    "KAVIN"
                    <span class="text-white">"KISHORE"</span>
                </div>
                <div class="hidden md:flex gap-8 text-xs font-bold uppercase tracking-widest text-zinc-400">
                    {SECTIONS
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=format!("#{}", item.to_lowercase())
                                    class="hover:text-bat-accent transition-colors relative group"
                                >
                                    {item}
                                    <span class="absolute -bottom-1 left-0 w-0 h-px bg-bat-accent transition-all group-hover:w-full" />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}
