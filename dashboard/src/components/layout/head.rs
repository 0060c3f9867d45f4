use dioxus::prelude::*;

use crate::hooks::PageConfig;

/// Title, description, keywords, canonical link and favicons of the page
#[component]
pub fn LayoutHead(config: PageConfig) -> Element {
    let head = config.head();

    rsx! {
        document::Meta { charset: "utf-8" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1, user-scalable=0, minimal-ui",
        }
        document::Title { "{head.title}" }
        document::Meta { name: "description", content: head.description.clone() }
        document::Meta { name: "keywords", content: head.keywords.clone() }
        if !head.canonical_url.is_empty() {
            document::Link { rel: "canonical", href: head.canonical_url.clone() }
        }
        for icon in head.fav_icons.iter() {
            document::Link { rel: icon.rel.clone(), href: icon.href.clone() }
        }
    }
}
