use leptos::prelude::*;

use super::{
    about::About, contact::Contact, experience::Experience, footer::Footer, hero::Hero,
    navbar::Navbar, projects::Projects, seo::Seo, tech_stacks::TechStacks, timeline::Timeline,
};
use crate::config::{SITE_DESCRIPTION, SITE_TITLE};

/// The whole portfolio, one section after another.
#[component]
pub fn HomePage(show_timeline: RwSignal<bool>) -> impl IntoView {
    view! {
        <Seo title=SITE_TITLE description=SITE_DESCRIPTION path="/" />
        <div class="min-h-screen overflow-x-hidden">
            <Navbar />
            <main>
                <Hero show_timeline />
                <About />
                <Experience />
                <Projects />
                <TechStacks />
                <Timeline show=show_timeline />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
