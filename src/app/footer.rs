use leptos::prelude::*;

use crate::config::BUILD_YEAR;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border/50 py-8">
            <div class="container mx-auto px-6 text-center space-y-2">
                <p class="text-foreground/80">
                    "Designed and Developed by "
                    <span class="gradient-text font-semibold">"Akash"</span>
                    " "
                    <span class="text-red-500" aria-hidden="true">"♥"</span>
                </p>
                <p class="text-sm text-muted-foreground">
                    "© " {BUILD_YEAR} " All rights reserved."
                </p>
            </div>
        </footer>
    }
}
