use leptos::{either::EitherOf3, prelude::*};

use super::reveal::{Reveal, SectionHeader};
use crate::content::ContactLink;

#[component]
pub fn Contact(contacts: Vec<ContactLink>) -> impl IntoView {
    view! {
        <section id="contact" class="py-32 px-6 relative overflow-hidden">
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[600px] h-[600px] bat-signal opacity-5" />
            <div class="max-w-7xl mx-auto relative z-10">
                <SectionHeader
                    title="Contact Me"
                    subtitle="Let's connect and discuss potential opportunities."
                />
                <div class="grid lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-1 space-y-4">
                        {contacts
                            .into_iter()
                            .map(|contact| view! { <ContactCard contact /> })
                            .collect_view()}
                    </div>
                    <div class="lg:col-span-2">
                        <Reveal>
                            <ContactForm />
                        </Reveal>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(contact: ContactLink) -> impl IntoView {
    let body = view! {
        <div class="w-10 h-10 rounded-lg bg-bat-accent/10 flex items-center justify-center group-hover:bg-bat-accent/20 transition-colors">
            <i class=format!("{} text-bat-accent", contact.icon) />
        </div>
        <div>
            <div class="text-[10px] uppercase tracking-widest text-zinc-500 font-bold">
                {contact.label}
            </div>
            <div class="text-sm font-bold">{contact.value}</div>
        </div>
    };
    let class = "bat-card flex items-center gap-4 group";
    match contact.href {
        Some(href) if contact.external => EitherOf3::A(view! {
            <a href=href target="_blank" rel="noopener noreferrer" class=class>
                {body}
            </a>
        }),
        Some(href) => EitherOf3::B(view! {
            <a href=href class=class>
                {body}
            </a>
        }),
        None => EitherOf3::C(view! { <div class=class>{body}</div> }),
    }
}

/// Decorative only: submitting neither sends nor navigates.
#[component]
fn ContactForm() -> impl IntoView {
    let input_class = "w-full bg-white/5 border border-white/10 rounded-lg px-4 py-3 focus:outline-none focus:border-bat-accent/50 transition-colors";
    let label_class = "text-[10px] uppercase tracking-widest font-bold text-zinc-500 ml-1";
    view! {
        <form class="bat-card space-y-6" on:submit=move |ev| ev.prevent_default()>
            <div class="grid md:grid-cols-2 gap-6">
                <div class="space-y-2">
                    <label class=label_class>"Name"</label>
                    <input type="text" class=input_class placeholder="Bruce Wayne" />
                </div>
                <div class="space-y-2">
                    <label class=label_class>"Email"</label>
                    <input type="email" class=input_class placeholder="bruce@waynecorp.com" />
                </div>
            </div>
            <div class="space-y-2">
                <label class=label_class>"Message"</label>
                <textarea
                    rows=4
                    class=format!("{input_class} resize-none")
                    placeholder="I have a mission for you..."
                />
            </div>
            <button
                type="submit"
                class="w-full py-4 bg-bat-accent text-bat-black font-bold uppercase tracking-widest rounded-lg transition-all hover:scale-[1.02] active:scale-[0.98]"
            >
                "Send Signal"
            </button>
        </form>
    }
}
