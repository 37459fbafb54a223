use leptos::prelude::*;

use crate::content::interaction_config;
use crate::interaction::char_prefix;

#[cfg(feature = "hydrate")]
use super::events::IntervalScheduler;
#[cfg(feature = "hydrate")]
use crate::interaction::TypewriterEffect;

#[component]
pub fn Hero() -> impl IntoView {
    let config = interaction_config();
    let name = config.hero_name.clone();
    let (revealed, set_revealed) = signal(0usize);

    // the server renders the empty prefix; typing starts once hydrated
    #[cfg(feature = "hydrate")]
    {
        let effect =
            TypewriterEffect::mount(&IntervalScheduler, name.as_str(), config.type_interval());
        let watch = effect.on_change(move |n| set_revealed.set(*n));
        on_cleanup(move || {
            watch.cancel();
            effect.unmount();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_revealed;

    let typed = move || char_prefix(&name, revealed.get()).to_string();

    view! {
        <section class="relative h-screen flex items-center justify-center px-6 overflow-hidden">
            <div class="absolute inset-0 bat-gradient opacity-50" />
            <div class="max-w-7xl mx-auto w-full relative z-10">
                <div class="text-center hero-enter">
                    <div class="inline-block px-4 py-1 border border-bat-accent/30 rounded-full text-[10px] font-bold uppercase tracking-[0.3em] text-bat-accent mb-8 bg-bat-accent/5 flicker-text">
                        "Computer Science Student"
                    </div>
                    <h1 class="text-6xl md:text-8xl lg:text-9xl font-black tracking-tighter mb-6 leading-none min-h-[1.2em]">
                        <span class="text-bat-accent text-glow">
                            {typed}
                            <span class="inline-block w-[4px] h-[0.8em] bg-bat-accent ml-2 animate-pulse" />
                        </span>
                    </h1>
                    <p class="text-zinc-500 text-lg md:text-xl max-w-2xl mx-auto font-light leading-relaxed mb-12 hero-enter-late">
                        "A responsible and orderly Computer Science enthusiast dedicated to building efficient solutions and exploring the depths of technology."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center hero-enter-late">
                        <a
                            href="#projects"
                            class="px-8 py-4 bg-bat-accent text-bat-black font-bold uppercase tracking-widest rounded-lg transition-all hover:scale-105 active:scale-95"
                        >
                            "View Projects"
                        </a>
                        <a
                            href="#contact"
                            class="px-8 py-4 border border-white/10 font-bold uppercase tracking-widest rounded-lg transition-all hover:scale-105 hover:border-bat-accent/50 active:scale-95"
                        >
                            "Get In Touch"
                        </a>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce">
                <div class="w-px h-12 bg-gradient-to-b from-bat-accent to-transparent" />
            </div>
        </section>
    }
}
