use dioxus::prelude::*;

use crate::hooks::PageConfig;
use crate::Route;

const NAV_ITEMS: [(&str, &str); 3] = [("◧", "Dashboard"), ("☺", "Profile"), ("⚿", "Login")];

fn route_for(label: &str) -> Route {
    match label {
        "Profile" => Route::Profile {},
        "Login" => Route::Login {},
        _ => Route::Dashboard {},
    }
}

#[component]
pub fn SideNav(config: PageConfig, sidebar_slim: bool, sidebar_collapsed: bool) -> Element {
    let ctx = config.context();
    let overlay = ctx.state.screen_size.is_some_and(|size| size.is_overlay());

    // A slim-capable layout never injects `sidebar_collapsed`; the overlay
    // still has to close at narrow sizes.
    let closed = sidebar_collapsed || (overlay && ctx.state.sidebar_collapsed);

    let class = if sidebar_slim {
        "sidebar sidebar--slim"
    } else if closed {
        "sidebar sidebar--collapsed"
    } else {
        "sidebar"
    };


    rsx! {
        aside { class: "{class}",
            div { class: "sidebar-header",
                div { class: "sidebar-brand",
                    if sidebar_slim {
                        span { "A" }
                    } else {
                        span { "Admin" }
                    }
                }
                button {
                    class: "btn-collapse",
                    title: if closed || sidebar_slim { "Expand navigation" } else { "Collapse navigation" },
                    onclick: move |_| config.toggle_sidebar(),
                    if closed || sidebar_slim { "›" } else { "‹" }
                }
            }

            nav { class: "sidebar-content",
                for (icon, label) in NAV_ITEMS {
                    Link {
                        key: "{label}",
                        class: "sidebar-link",
                        to: route_for(label),
                        span { class: "sidebar-link__icon", "{icon}" }
                        if !sidebar_slim {
                            span { class: "sidebar-link__label", "{label}" }
                        }
                    }
                }
            }
        }

        // Dismiss layer behind the open overlay sidebar
        if overlay && !ctx.state.sidebar_collapsed {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| config.toggle_sidebar(),
            }
        }
    }
}
