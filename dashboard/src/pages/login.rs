use dioxus::prelude::*;
use layout_engine::prelude::*;

use crate::components::layout::LayoutFooter;
use crate::hooks::use_page_config;
use crate::Route;

/// Auth-style page: no sidebar and no footer, only the navbars
#[component]
pub fn Login() -> Element {
    let config = use_page_config();

    use_effect(move || {
        config.set_visibility(VisibilityUpdate::default().sidebar(true).footer(true));
        config.set_meta(MetaUpdate::title("Login"));
    });

    use_drop(move || {
        config.set_visibility(VisibilityUpdate::default().sidebar(false).footer(false));
    });

    rsx! {
        section { class: "page page--login",
            h1 { "Sign in" }
            form { class: "login-form",
                onsubmit: move |event| event.prevent_default(),
                label { class: "form-label", "Email" }
                input { class: "form-input", r#type: "email" }
                label { class: "form-label", "Password" }
                input { class: "form-input", r#type: "password" }
                button { class: "btn-primary", r#type: "submit", "Sign in" }
            }
            Link { to: Route::Dashboard {}, "Back to dashboard" }
            LayoutFooter { "never shown on this page" }
        }
    }
}
