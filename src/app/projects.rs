use leptos::{either::Either, prelude::*};

use super::reveal::Reveal;
use crate::{
    content::{Project, PROJECTS},
    motion::PROJECT_CARD,
};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="relative py-24 md:py-32">
            <div class="container relative z-10 mx-auto px-6">
                <h2 class="section-title">"Projects"</h2>
                <div class="mx-auto grid max-w-6xl grid-cols-1 gap-6 md:grid-cols-2">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let link_icon = match project.link {
        Some(href) => Either::Left(view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                title="Open project"
                class="flex-shrink-0 text-muted-foreground hover:text-primary transition-colors"
            >
                "↗"
            </a>
        }),
        None => Either::Right(view! {
            <span class="flex-shrink-0 text-muted-foreground group-hover:text-primary transition-colors">
                "↗"
            </span>
        }),
    };

    view! {
        <Reveal motion=PROJECT_CARD class="group card p-8 hover:border-primary/60 transition-colors">
            <div class="flex items-start gap-6">
                <div class="flex-shrink-0">
                    <div class="w-16 h-16 rounded-xl gradient-primary flex items-center justify-center text-3xl group-hover:scale-110 transition-transform duration-300">
                        {project.glyph}
                    </div>
                </div>
                <div class="flex-1">
                    <div class="flex items-center gap-3 mb-3">
                        <h3 class="text-2xl font-bold text-foreground">{project.title}</h3>
                        {project
                            .year
                            .map(|year| {
                                view! {
                                    <span class="px-3 py-1 rounded-full bg-primary/20 text-primary text-sm">
                                        {year}
                                    </span>
                                }
                            })}
                    </div>
                    <p class="text-muted-foreground mb-4 leading-relaxed text-justify">
                        {project.description}
                    </p>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .features
                            .iter()
                            .map(|feature| {
                                view! {
                                    <span class="px-3 py-1 rounded-md bg-secondary text-secondary-foreground text-sm">
                                        {*feature}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                {link_icon}
            </div>
        </Reveal>
    }
}
