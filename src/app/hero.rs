use leptos::{ev::MouseEvent, prelude::*};

use super::{navbar::scroll_to_section, reveal::Reveal};
use crate::motion::{HERO_IMAGE, HERO_TEXT};

#[component]
pub fn Hero(show_timeline: RwSignal<bool>) -> impl IntoView {
    let explore = move |_: MouseEvent| {
        show_timeline.set(true);
        // the timeline only mounts on the next frame
        request_animation_frame(|| {
            scroll_to_section("timeline");
        });
    };

    view! {
        <section class="relative min-h-screen flex items-center pt-24">
            <div class="container mx-auto px-6">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <Reveal motion=HERO_TEXT>
                        <h1 class="text-5xl md:text-7xl font-bold mb-4 gradient-text">
                            "Akash Portfolio"
                        </h1>
                        <div class="mb-8">
                            <h2 class="text-2xl md:text-3xl font-semibold text-foreground/90 mb-2">
                                "AI Developer"
                            </h2>
                            <p class="text-lg text-muted-foreground italic">
                                "think it, let the AI do it"
                            </p>
                        </div>
                        <button
                            class="px-8 py-3 rounded-lg bg-gradient-to-r from-primary to-blue-600 text-white font-medium hover:shadow-lg hover:scale-105 transition-all duration-300"
                            on:click=explore
                        >
                            "Click here → to explore more"
                        </button>
                    </Reveal>
                    <Reveal motion=HERO_IMAGE class="flex justify-center">
                        <img
                            src="/ak-profile.png"
                            alt="Akash profile"
                            class="w-72 h-72 md:w-96 md:h-96 rounded-full object-cover border-4 border-primary/40"
                        />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
