use std::time::Duration;

use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::use_window_scroll;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_session_storage;

use crate::config::RESUME_PATH;
use crate::content::NAV_ITEMS;

const SCROLLED_AFTER_PX: f64 = 50.0;
// long enough for a second click to turn into a double click
const LOGO_CLICK_DELAY: Duration = Duration::from_millis(250);
#[cfg(feature = "hydrate")]
const RELOAD_FLAG_KEY: &str = "scrollToTopAfterReload";

pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

/// Scrolls the section with `id` into view. Smoothness comes from the stylesheet,
/// which turns it off for reduced-motion users.
pub fn scroll_to_section(id: &str) -> bool {
    match document().get_element_by_id(id) {
        Some(el) => {
            el.scroll_into_view();
            true
        }
        None => {
            log::debug!("no section with id {id}");
            false
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = move || scroll_y.get() > SCROLLED_AFTER_PX;
    let (menu_open, set_menu_open) = signal(false);
    let pending_click = StoredValue::new(None::<TimeoutHandle>);

    #[cfg(feature = "hydrate")]
    let (reload_flag, set_reload_flag, remove_reload_flag) =
        use_session_storage::<bool, JsonSerdeWasmCodec>(RELOAD_FLAG_KEY);

    // a double click on the logo reloads the page and asks us to land at the top
    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            if reload_flag.get_untracked() {
                remove_reload_flag();
                scroll_to_top();
            }
        },
        true,
    );

    let go_to = move |id: &'static str| {
        if scroll_to_section(id) {
            set_menu_open.set(false);
        }
    };

    let on_logo_click = move |_: MouseEvent| {
        if pending_click.get_value().is_some() {
            return;
        }
        let handle = set_timeout_with_handle(
            move || {
                scroll_to_top();
                pending_click.set_value(None);
            },
            LOGO_CLICK_DELAY,
        )
        .ok();
        pending_click.set_value(handle);
    };

    let on_logo_dblclick = move |_: MouseEvent| {
        if let Some(handle) = pending_click.get_value() {
            handle.clear();
            pending_click.set_value(None);
        }
        #[cfg(feature = "hydrate")]
        set_reload_flag.set(true);
        if let Err(err) = location().reload() {
            log::warn!("couldn't reload page: {err:?}");
        }
    };

    view! {
        <nav
            aria-label="Primary"
            class=move || {
                if is_scrolled() {
                    "fixed top-0 inset-x-0 z-50 transition-all duration-300 glass py-3"
                } else {
                    "fixed top-0 inset-x-0 z-50 transition-all duration-300 bg-transparent py-5"
                }
            }
        >
            <div class="container mx-auto px-6 flex items-center justify-between">
                <button
                    class="flex items-center gap-2"
                    aria-label="Scroll to top. Double click to reload."
                    on:click=on_logo_click
                    on:dblclick=on_logo_dblclick
                >
                    <img
                        src="/logo.png"
                        alt="Akash portfolio logo"
                        width="40"
                        height="40"
                        loading="eager"
                        decoding="async"
                    />
                    <span class="text-xl font-bold gradient-text">"✯°"</span>
                </button>

                <div class="hidden md:flex items-center gap-8">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let id = item.id;
                            view! {
                                <button
                                    class="text-foreground/80 hover:text-foreground transition-colors"
                                    on:click=move |_| go_to(id)
                                >
                                    {item.label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <a
                        href=RESUME_PATH
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 rounded-md border border-primary/60 text-primary hover:bg-primary/10 transition-colors"
                    >
                        "Resume"
                    </a>
                </div>

                <button
                    class="md:hidden text-foreground"
                    aria-controls="mobile-menu"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div id="mobile-menu" class="md:hidden glass mt-3">
                    <div class="container mx-auto px-6 py-4 flex flex-col gap-4">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let id = item.id;
                                view! {
                                    <button
                                        class="text-left text-foreground/80 hover:text-foreground"
                                        on:click=move |_| go_to(id)
                                    >
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <a href=RESUME_PATH download class="text-primary">
                            "Resume"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
