use dioxus::prelude::*;

use crate::hooks::PageConfig;

#[component]
pub fn TopNavbar(config: PageConfig) -> Element {
    let head = config.head();
    let ctx = config.context();

    rsx! {
        header { class: "navbar navbar--top",
            button {
                class: "navbar-toggle",
                title: "Toggle sidebar",
                onclick: move |_| config.toggle_sidebar(),
                "☰"
            }
            h2 { class: "navbar-title", "{head.title}" }
            if let Some(size) = ctx.state.screen_size {
                span { class: "navbar-badge", "{size}" }
            }
        }
    }
}

/// Second sticky bar, stacked below the top navbar
#[component]
pub fn Breadcrumbs(config: PageConfig) -> Element {
    let ctx = config.context();
    let page = ctx.state.page_title.unwrap_or_else(|| "Home".to_string());

    rsx! {
        div { class: "navbar navbar--breadcrumbs",
            span { class: "breadcrumb", "Home" }
            span { class: "breadcrumb-separator", "/" }
            span { class: "breadcrumb breadcrumb--active", "{page}" }
        }
    }
}
