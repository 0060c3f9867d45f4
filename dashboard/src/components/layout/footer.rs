use dioxus::prelude::*;

use crate::hooks::use_page_config;

/// Page footer; hidden when a page calls `set_visibility` with `footer(true)`
#[component]
pub fn LayoutFooter(children: Element) -> Element {
    let config = use_page_config();
    if config.context().state.footer_hidden {
        return rsx! {};
    }

    rsx! {
        footer { class: "layout__footer", {children} }
    }
}
