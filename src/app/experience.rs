use leptos::prelude::*;

use super::reveal::Reveal;
use crate::{
    content::{ExperienceEntry, EXPERIENCE},
    motion::EXPERIENCE_CARD,
};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="relative py-24 md:py-32">
            <div class="container relative z-10 mx-auto px-6">
                <h2 class="section-title">"Experience"</h2>
                <div class="mx-auto grid max-w-6xl grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                    {EXPERIENCE
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <ExperienceCard entry=*entry index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Title on the front; hovering flips it over to the details.
#[component]
fn ExperienceCard(entry: ExperienceEntry, index: usize) -> impl IntoView {
    view! {
        <Reveal motion=EXPERIENCE_CARD index class="flip-card h-[280px] w-full">
            <div class="flip-card-inner">
                <div class="flip-card-front card flex items-center justify-center p-6">
                    <h3 class="gradient-text text-center text-2xl font-bold">{entry.title}</h3>
                </div>
                <div class="flip-card-back card flex flex-col justify-center border-primary/60 p-6">
                    <h3 class="mb-1 text-xl font-bold text-foreground">{entry.company}</h3>
                    {entry
                        .parent_company
                        .map(|parent| {
                            view! { <p class="mb-2 text-sm text-primary">"(" {parent} ")"</p> }
                        })}
                    <p class="mb-4 text-sm text-muted-foreground">
                        {entry.location} " | " {entry.duration}
                    </p>
                    <p class="text-justify text-sm leading-relaxed text-foreground/80">
                        {entry.description}
                    </p>
                </div>
            </div>
        </Reveal>
    }
}
