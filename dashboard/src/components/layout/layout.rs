use std::cell::RefCell;
use std::rc::Rc;

use dioxus::document::eval;
use dioxus::prelude::*;
use layout_engine::prelude::*;

use crate::components::layout::{LayoutHead, LayoutPart, SlotProps};
use crate::dom::{self, NAVBAR_CLASS};
use crate::hooks::use_layout_controller;

const RESIZE_SCRIPT: &str = r#"
    if (window.__layoutResize) {
        window.removeEventListener('resize', window.__layoutResize);
    }
    window.__layoutResize = () => dioxus.send(true);
    window.addEventListener('resize', window.__layoutResize);
"#;

const RESIZE_TEARDOWN_SCRIPT: &str = r#"
    if (window.__layoutResize) {
        window.removeEventListener('resize', window.__layoutResize);
        window.__layoutResize = null;
    }
"#;

/// Dashboard frame: optional sidebar, stacked navbars and the page content
///
/// `parts` are matched by role, so their order does not matter. Pages reach
/// the layout through [`crate::hooks::use_page_config`].
#[component]
pub fn Layout(
    parts: Vec<LayoutPart>,
    site: SiteConfig,
    #[props(default)] slim_capable: bool,
    #[props(into)] pathname: String,
) -> Element {
    let options = LayoutOptions {
        slim_capable,
        is_mobile: dom::is_mobile_client(),
    };
    let config = use_layout_controller(site, options);
    use_context_provider(|| config);

    let mut container = use_signal(|| None::<web_sys::Element>);
    let mut navbar_epoch = use_signal(|| 0u64);
    let reconciler = use_hook(|| Rc::new(RefCell::new(NavbarReconciler::new())));

    // Mount: first classification, resize listener
    use_effect(move || {
        config.mount();

        let mut resize_events = eval(RESIZE_SCRIPT);
        spawn(async move {
            while resize_events.recv::<serde_json::Value>().await.is_ok() {
                config.on_resize();
                navbar_epoch += 1;
            }
        });
    });

    use_drop(move || {
        config.unmount();
        let _ = eval(RESIZE_TEARDOWN_SCRIPT);
    });

    // Route changes
    use_effect(use_reactive((&pathname,), move |(pathname,)| {
        config.navigate(&pathname);
    }));

    // Stacked navbar offsets, after every layout change, route change or navbar mount
    use_effect(use_reactive((&pathname,), move |(_pathname,)| {
        config.track();
        navbar_epoch();
        if let Some(element) = container.read().as_ref() {
            reconciler.borrow_mut().reconcile(&dom::navbars_in(element));
        }
    }));

    let ctx = config.context();
    let slots = resolve_slots(parts);
    let sidebar_props = config.sidebar_props();
    let slot = SlotProps {
        config,
        sidebar_slim: sidebar_props.sidebar_slim,
        sidebar_collapsed: sidebar_props.sidebar_collapsed,
    };

    let mut class = String::from("layout");
    if ctx.only_navbar {
        class.push_str(" layout--only-navbar");
    }
    if ctx.state.animations_disabled {
        class.push_str(" layout--animations-disabled");
    }
    if slim_capable {
        class.push_str(" layout--slim-capable");
    }

    let sidebar = slots.sidebar.filter(|_| !ctx.state.sidebar_hidden);
    let navbars = if ctx.state.navbar_hidden { Vec::new() } else { slots.navbars };

    rsx! {
        LayoutHead { config }
        div {
            class: "{class}",
            "data-screen-size": ctx.state.screen_size.map(|size| size.label()).unwrap_or_default(),
            onmounted: move |event| {
                if let Some(element) = event.data().downcast::<web_sys::Element>() {
                    container.set(Some(element.clone()));
                }
            },

            if let Some(render) = sidebar {
                {render(slot.clone())}
            }

            div { class: "layout__wrap",
                for (index, render) in navbars.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: NAVBAR_CLASS,
                        onmounted: move |_| navbar_epoch += 1,
                        {render(slot.clone())}
                    }
                }

                if let Some(render) = slots.content {
                    {render(slot.clone())}
                }
            }
        }
    }
}
