use dioxus::prelude::*;
use layout_engine::prelude::*;

use crate::components::layout::LayoutFooter;
use crate::hooks::use_page_config;

#[component]
pub fn Profile() -> Element {
    let config = use_page_config();
    use_effect(move || {
        config.set_meta(MetaUpdate::title("Profile").keywords("profile,account"));
    });

    rsx! {
        section { class: "page page--profile",
            h1 { "Profile" }
            div { class: "card",
                p { class: "card-label", "Name" }
                p { class: "card-value", "Jane Doe" }
                p { class: "card-label", "Role" }
                p { class: "card-value", "Administrator" }
            }
            LayoutFooter { "© Admin Dashboard" }
        }
    }
}
