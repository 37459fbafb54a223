use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{Project, Skill};

#[component]
pub fn SkillCard(skill: Skill, #[prop(optional)] delay_ms: u64) -> impl IntoView {
    view! {
        <Reveal delay_ms>
            <div class="bat-card group hover:-translate-y-1 transition-transform">
                <div class="w-12 h-12 rounded-lg bg-bat-accent/10 flex items-center justify-center mb-4 group-hover:bg-bat-accent/20 transition-colors">
                    <i class=format!("{} text-2xl text-bat-accent", skill.icon) />
                </div>
                <h3 class="text-xl font-bold mb-2">{skill.name}</h3>
                <p class="text-zinc-400 text-sm">{skill.description}</p>
            </div>
        </Reveal>
    }
}

#[component]
pub fn ProjectCard(project: Project, #[prop(optional)] delay_ms: u64) -> impl IntoView {
    view! {
        <Reveal delay_ms class="h-full">
            <div class="bat-card group flex flex-col h-full hover:scale-[1.02] transition-transform">
                <div class="flex justify-between items-start mb-4">
                    <div class="p-2 bg-bat-accent/5 rounded-md">
                        <i class="extra-terminal text-bat-accent" />
                    </div>
                    <i class="extra-link text-zinc-600 hover:text-bat-accent" />
                </div>
                <h3 class="text-xl font-bold mb-3 group-hover:text-bat-accent transition-colors">
                    {project.title}
                </h3>
                <p class="text-zinc-400 text-sm mb-6 flex-grow leading-relaxed">
                    {project.description}
                </p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="text-[10px] uppercase tracking-widest font-bold px-2 py-1 bg-white/5 border border-white/10 rounded text-zinc-300">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Reveal>
    }
}
