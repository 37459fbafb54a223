use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::cards::{ProjectCard, SkillCard};
use super::contact::Contact;
use super::cursor::CursorGlow;
use super::hero::Hero;
use super::navbar::NavBar;
use super::reveal::{Reveal, SectionHeader};
use crate::config::build_year;
use crate::content::{site_content, SiteContent};
use crate::interaction::stagger_delay;

const CARD_STAGGER_MS: u64 = 100;
const PROFILE_IMAGE: &str = "https://picsum.photos/seed/batman/1200/800?grayscale";

#[component]
pub fn HomePage() -> impl IntoView {
    let content = match site_content() {
        Ok(content) => Either::Left(view! { <Sections content /> }),
        Err(e) => {
            log::error!("{}", e);
            Either::Right(view! {
                <p class="py-32 text-center text-zinc-500">"This page failed to load."</p>
            })
        }
    };

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-bat-black selection:bg-bat-accent selection:text-bat-black cursor-none">
            <CursorGlow />
            <Backdrop />
            <NavBar />
            <Hero />
            {content}
            <Footer />
        </div>
    }
}

#[component]
fn Sections(content: &'static SiteContent) -> impl IntoView {
    view! {
        <About />
        <Education />
        <Skills content />
        <Projects content />
        <Contact contacts=content.contacts.clone() />
    }
}

#[component]
fn Backdrop() -> impl IntoView {
    view! {
        <div class="fixed inset-0 pointer-events-none overflow-hidden">
            <div class="absolute top-[-10%] left-[-10%] w-[40%] h-[40%] bat-signal" />
            <div class="absolute bottom-[-10%] right-[-10%] w-[40%] h-[40%] bat-signal" />
            <div class="absolute inset-0 carbon-fibre opacity-[0.03]" />
            <div class="scan-line" />
        </div>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-32 px-6 relative">
            <div class="max-w-7xl mx-auto">
                <SectionHeader
                    title="The Profile"
                    subtitle="I consider myself a responsible and orderly person, looking forward to my first professional work experience where I can contribute and grow."
                />
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <Reveal class="space-y-6">
                        <div class="bat-card">
                            <p class="text-zinc-300 leading-relaxed italic">
                                "\"I am looking forward to my first work experience. I am a dedicated student with a strong foundation in computer science principles and a passion for problem-solving.\""
                            </p>
                        </div>
                        <div class="grid grid-cols-2 gap-4">
                            <Stat value="2023" label="Started Journey" />
                            <Stat value="2+" label="Key Projects" />
                        </div>
                    </Reveal>
                    <div class="relative aspect-square md:aspect-video rounded-3xl overflow-hidden border border-white/10 group">
                        <img
                            src=PROFILE_IMAGE
                            alt="Abstract Dark Tech"
                            class="w-full h-full object-cover opacity-40 group-hover:scale-110 transition-transform duration-700"
                        />
                        <div class="absolute inset-0 bg-gradient-to-t from-bat-black via-transparent to-transparent" />
                        <div class="absolute bottom-8 left-8">
                            <div class="text-xs font-bold uppercase tracking-[0.3em] text-bat-accent mb-2">
                                "Location"
                            </div>
                            <div class="text-2xl font-bold">"Namakkal, India"</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="p-6 border border-white/5 rounded-2xl bg-white/5">
            <div class="text-bat-accent text-3xl font-bold mb-1">{value}</div>
            <div class="text-zinc-500 text-xs uppercase tracking-widest font-bold">{label}</div>
        </div>
    }
}

#[component]
fn Education() -> impl IntoView {
    view! {
        <section id="education" class="py-32 px-6 bg-bat-gray/30">
            <div class="max-w-7xl mx-auto">
                <SectionHeader
                    title="Education"
                    subtitle="Academic background and foundation in engineering."
                />
                <Reveal class="bat-card border-l-4 border-l-bat-accent">
                    <div class="flex flex-col md:flex-row md:items-center justify-between gap-6">
                        <div>
                            <div class="flex items-center gap-2 text-bat-accent mb-2">
                                <i class="extra-graduation" />
                                <span class="text-xs font-bold uppercase tracking-widest">
                                    "Bachelor of Engineering"
                                </span>
                            </div>
                            <h3 class="text-2xl font-bold mb-1">
                                "M. Kumarasamy College of Engineering"
                            </h3>
                            <p class="text-zinc-400">"Computer Science and Engineering"</p>
                        </div>
                        <div class="text-right">
                            <div class="text-xl font-bold text-white">"2023 — 2027"</div>
                            <div class="text-zinc-500 text-xs uppercase tracking-widest">
                                "Current Degree"
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Skills(content: &'static SiteContent) -> impl IntoView {
    view! {
        <section id="skills" class="py-32 px-6">
            <div class="max-w-7xl mx-auto">
                <SectionHeader
                    title="Computer Skills"
                    subtitle="Technical arsenal and programming proficiencies."
                />
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {content
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! { <SkillCard skill=skill.clone() delay_ms={stagger_delay(i, CARD_STAGGER_MS)} /> }
                        })
                        .collect_view()}
                </div>
                <div class="mt-16 flex flex-wrap justify-center gap-12 opacity-50 grayscale hover:grayscale-0 transition-all">
                    {content
                        .languages
                        .iter()
                        .map(|language| {
                            view! {
                                <div class="flex items-center gap-2 font-bold tracking-widest text-sm uppercase">
                                    <span class="w-2 h-2 rounded-full bg-bat-accent" />
                                    {language.clone()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Projects(content: &'static SiteContent) -> impl IntoView {
    view! {
        <section id="projects" class="py-32 px-6 bg-bat-gray/30">
            <div class="max-w-7xl mx-auto">
                <SectionHeader
                    title="Projects"
                    subtitle="Featured work and technical implementations."
                />
                <div class="grid md:grid-cols-2 gap-8">
                    {content
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <ProjectCard
                                    project=project.clone()
                                    delay_ms={stagger_delay(i, CARD_STAGGER_MS)}
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-white/5 px-6">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row justify-between items-center gap-6">
                <div class="text-xs font-bold uppercase tracking-widest text-zinc-500">
                    {format!("© {} KAVIN KISHORE P. All Rights Reserved.", build_year())}
                </div>
                <div class="flex gap-6 text-zinc-500">
                    <a
                        href="https://www.linkedin.com/in/kavin-P-525206328"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-bat-accent transition-colors"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain" />
                    </a>
                    <i class="devicon-github-plain hover:text-bat-accent transition-colors" />
                    <a
                        href="mailto:kavinkishore250@gmail.com"
                        class="hover:text-bat-accent transition-colors"
                        aria-label="Email"
                    >
                        <i class="extra-email" />
                    </a>
                </div>
            </div>
        </footer>
    }
}
