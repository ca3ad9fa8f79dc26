use leptos::{either::Either, prelude::*};

use super::reveal::Reveal;
use crate::{
    content::{TechItem, TECH_STACK},
    motion::TECH_ITEM,
};

#[component]
pub fn TechStacks() -> impl IntoView {
    view! {
        <section id="tech-stacks" class="relative py-24 md:py-32">
            <div class="container relative z-10 mx-auto px-6">
                <h2 class="section-title">"Tech Stacks"</h2>
                <div class="max-w-4xl mx-auto card rounded-2xl px-4 py-6 md:px-6 md:py-7 overflow-x-hidden">
                    <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-6">
                        {TECH_STACK
                            .iter()
                            .enumerate()
                            .map(|(index, tech)| {
                                view! {
                                    <Reveal
                                        motion=TECH_ITEM
                                        index
                                        class="flex items-center gap-3 min-w-0"
                                    >
                                        <TechIcon tech=*tech />
                                        <p class="text-xs md:text-sm font-medium text-foreground leading-tight break-words">
                                            {tech.name}
                                        </p>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Remote logo, or the local glyph once the logo fails to load.
#[component]
fn TechIcon(tech: TechItem) -> impl IntoView {
    let (logo_failed, set_logo_failed) = signal(false);

    move || match tech.logo {
        Some(logo) if !logo_failed.get() => Either::Left(view! {
            <img
                src=logo
                alt=format!("{} icon", tech.name)
                loading="lazy"
                class="w-8 h-8 object-contain flex-shrink-0"
                on:error=move |_| set_logo_failed.set(true)
            />
        }),
        _ => Either::Right(view! {
            <div class="w-8 h-8 rounded-md gradient-primary flex items-center justify-center flex-shrink-0 text-sm">
                {tech.glyph}
            </div>
        }),
    }
}
