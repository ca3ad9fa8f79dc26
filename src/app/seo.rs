use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::config::canonical_url;

/// Title, description, social cards, canonical link and robots for a page.
#[component]
pub fn Seo(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] path: String,
    #[prop(default = "index, follow")] robots: &'static str,
) -> impl IntoView {
    let canonical = canonical_url(&path);
    view! {
        <Title text=title.clone() />
        <Meta name="description" content=description.clone() />
        <Meta name="twitter:title" content=title.clone() />
        <Meta name="twitter:description" content=description.clone() />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=description />
        <Meta property="og:url" content=canonical.clone() />
        <Link rel="canonical" href=canonical />
        <Meta name="robots" content=robots />
    }
}
