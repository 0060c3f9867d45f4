use dioxus::prelude::*;
use layout_engine::prelude::*;

use crate::components::layout::LayoutFooter;
use crate::hooks::use_page_config;

#[component]
pub fn Dashboard() -> Element {
    let config = use_page_config();
    use_effect(move || {
        config.set_meta(
            MetaUpdate::title("Dashboard").description("Overview of the workspace"),
        );
    });

    let ctx = config.context();
    let size = ctx
        .state
        .screen_size
        .map(|size| size.to_string())
        .unwrap_or_else(|| "unset".to_string());

    rsx! {
        section { class: "page page--dashboard",
            h1 { "Dashboard" }
            div { class: "card-grid",
                div { class: "card",
                    p { class: "card-label", "Screen size" }
                    p { class: "card-value", "{size}" }
                }
                div { class: "card",
                    p { class: "card-label", "Sidebar" }
                    p { class: "card-value",
                        if ctx.sidebar_slim {
                            "slim"
                        } else if ctx.state.sidebar_collapsed {
                            "collapsed"
                        } else {
                            "open"
                        }
                    }
                }
            }
            LayoutFooter { "© Admin Dashboard" }
        }
    }
}
