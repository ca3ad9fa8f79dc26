use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::motion::Motion;

/// Slides and fades its children in whenever they scroll into view.
#[component]
pub fn Reveal(
    motion: Motion,
    #[prop(optional)] index: usize,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(el);
    let style = motion.style(index);

    view! {
        <div
            node_ref=el
            style=style
            class=move || {
                if visible.get() {
                    format!("reveal is-visible {class}")
                } else {
                    format!("reveal {class}")
                }
            }
        >
            {children()}
        </div>
    }
}
