use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

use super::seo::Seo;

#[component]
pub fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname.get_untracked();
    log::error!("404 Error: User attempted to access non-existent route: {pathname}");

    #[cfg(feature = "ssr")]
    if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
        res.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Seo
            title="404 | Page Not Found"
            description="The page you are looking for does not exist."
            path=pathname
            robots="noindex, nofollow"
        />
        <div class="flex min-h-screen items-center justify-center bg-muted">
            <div class="text-center">
                <h1 class="mb-4 text-4xl font-bold">"404"</h1>
                <p class="mb-4 text-xl text-muted-foreground">"Oops! Page not found"</p>
                <A href="/" attr:class="text-primary underline hover:text-primary/90">
                    "Return to Home"
                </A>
            </div>
        </div>
    }
}
