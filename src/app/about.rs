use leptos::prelude::*;

use super::reveal::Reveal;
use crate::{content::ABOUT_HIGHLIGHTS, motion::SECTION};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="relative py-24 md:py-32">
            <div class="container relative z-10 mx-auto px-6">
                <Reveal motion=SECTION class="mx-auto max-w-6xl text-center">
                    <h2 class="section-title">"About Me"</h2>
                    <div class="card p-8 md:p-12">
                        <p class="mb-8 text-justify text-lg leading-[1.7] text-foreground/90 md:text-xl md:leading-[1.9]">
                            "I'm " <span class="font-semibold text-foreground">"Akash"</span> ", an "
                            <span class="gradient-text font-semibold">"AI Developer"</span>
                            " specializing in machine learning, deep learning, and computer vision, with hands-on experience in designing, building, and deploying intelligent systems for real-world applications. I focus on writing clean, scalable, and production-ready code while transforming complex datasets into meaningful insights and developing end-to-end AI pipelines optimized for performance and accuracy. Driven by innovation and problem-solving, I'm passionate about creating impactful, data-driven AI solutions that bridge cutting-edge research with practical applications."
                        </p>
                        <div class="flex flex-wrap justify-center gap-6">
                            {ABOUT_HIGHLIGHTS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <div class="flex items-center gap-3 rounded-full border border-border/90 px-5 py-2.5">
                                            <span class="text-primary">{item.glyph}</span>
                                            <span class="text-foreground/90">{item.label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
