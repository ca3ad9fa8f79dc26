use leptos::{either::Either, html, prelude::*};
use leptos_use::use_element_visibility;

use super::reveal::Reveal;
use crate::{
    content::{split_lead, TimelineEntry, TIMELINE},
    motion::timeline_entry,
};

/// "My Journey". Not rendered at all until `show` flips on.
#[component]
pub fn Timeline(show: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || show.get()>
            <TimelineSection />
        </Show>
    }
}

#[component]
fn TimelineSection() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let visible = use_element_visibility(section);

    view! {
        <section id="timeline" node_ref=section class="relative py-24 md:py-32">
            <div class="container relative z-10 mx-auto px-6">
                <h2 class="section-title">"My Journey"</h2>
                <div class="relative mx-auto max-w-4xl">
                    <div class=move || {
                        if visible.get() { "timeline-line is-visible" } else { "timeline-line" }
                    } />
                    <div class="space-y-12">
                        {TIMELINE
                            .iter()
                            .enumerate()
                            .map(|(index, entry)| view! { <TimelineItem entry=*entry index /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(entry: TimelineEntry, index: usize) -> impl IntoView {
    let is_left = index % 2 == 0;
    let row_class = if is_left {
        "relative flex flex-col items-center gap-8 md:flex-row"
    } else {
        "relative flex flex-col items-center gap-8 md:flex-row-reverse"
    };
    let text_class = if is_left {
        "flex-1 md:text-right"
    } else {
        "flex-1 md:text-left"
    };

    view! {
        <Reveal motion=timeline_entry(index) class=row_class>
            <div class=text_class>
                <div class="inline-block card p-6">
                    <h3 class="gradient-text mb-4 text-xl font-bold">{entry.title}</h3>
                    <ul class="space-y-2">
                        {entry
                            .lines
                            .iter()
                            .map(|line| {
                                view! {
                                    <li class="break-words text-justify leading-[1.55] text-foreground/80 md:leading-[1.7]">
                                        {match split_lead(line) {
                                            Some((lead, rest)) => {
                                                Either::Left(
                                                    view! {
                                                        <strong class="text-foreground">{lead}</strong>
                                                        " - "
                                                        {rest}
                                                    },
                                                )
                                            }
                                            None => Either::Right(*line),
                                        }}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <div class="relative z-10 shrink-0 self-center">
                <div class="gradient-primary flex h-16 w-16 items-center justify-center rounded-full text-2xl">
                    {entry.glyph}
                </div>
            </div>
            <div class="hidden flex-1 md:block" />
        </Reveal>
    }
}
