use leptos::{html, prelude::*};

use crate::content::interaction_config;
use crate::interaction::RevealAnimator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealMotion {
    #[default]
    Rise,
    Slide,
    Fade,
}

impl RevealMotion {
    fn class(self) -> &'static str {
        match self {
            Self::Rise => "reveal reveal-rise",
            Self::Slide => "reveal reveal-slide",
            Self::Fade => "reveal reveal-fade",
        }
    }
}

/// Plays a one-shot enter transition the first time its content scrolls into view.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] motion: RevealMotion,
    /// Stagger before the transition starts.
    #[prop(optional)]
    delay_ms: u64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let animator = expect_context::<RevealAnimator>();
    let node_ref = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);

    let handle = animator.register();
    let watch = handle.on_reveal(move || set_revealed.set(true));

    #[cfg(feature = "hydrate")]
    {
        use crate::interaction::{IntersectionSample, PageEvents, REVEAL_THRESHOLDS};
        use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

        let id = handle.id();
        let events = expect_context::<PageEvents>();
        let observer = use_intersection_observer_with_options(
            node_ref,
            move |entries, _| {
                for entry in entries {
                    events.intersect(IntersectionSample {
                        element: id,
                        ratio: entry.intersection_ratio(),
                    });
                }
            },
            UseIntersectionObserverOptions::default().thresholds(REVEAL_THRESHOLDS.to_vec()),
        );
        let stop = observer.stop;
        Effect::watch(
            move || revealed.get(),
            move |revealed, _, _| {
                if *revealed {
                    stop();
                }
            },
            false,
        );
    }

    on_cleanup(move || {
        watch.cancel();
        handle.unmount();
    });

    let duration_ms = interaction_config().reveal_duration_ms;
    let base = format!("{} {}", motion.class(), class);
    view! {
        <div
            node_ref=node_ref
            class=move || {
                if revealed.get() { format!("{base} is-revealed") } else { base.clone() }
            }
            style=format!("transition-delay: {delay_ms}ms; transition-duration: {duration_ms}ms")
        >
            {children()}
        </div>
    }
}

#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    let stagger = interaction_config().reveal_stagger_ms;
    view! {
        <div class="mb-12">
            <Reveal motion=RevealMotion::Slide class="flex items-center gap-4 mb-2">
                <div class="h-px w-12 bg-bat-accent" />
                <h2 class="text-3xl font-bold tracking-tighter uppercase text-bat-accent text-glow">
                    {title}
                </h2>
            </Reveal>
            {subtitle
                .map(|subtitle| {
                    view! {
                        <Reveal motion=RevealMotion::Fade delay_ms=stagger>
                            <p class="text-zinc-500 ml-16 max-w-2xl">{subtitle}</p>
                        </Reveal>
                    }
                })}
        </div>
    }
}
