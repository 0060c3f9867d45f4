use dioxus::prelude::*;
use layout_engine::prelude::*;

use crate::hooks::use_page_config;
use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let config = use_page_config();
    use_effect(move || {
        config.set_meta(MetaUpdate::title("Not Found"));
    });
    let path = segments.join("/");

    rsx! {
        section { class: "page page--not-found",
            h1 { "An error has occurred" }
            p { "No page at /{path}" }
            Link { to: Route::Dashboard {}, "Correct errors" }
        }
    }
}
