use dioxus::prelude::*;
use layout_engine::prelude::*;

// Module Declarations
mod components;
mod dom;
mod hooks;
mod pages;

use components::layout::{Layout, LayoutPart, SlotProps};
use components::navigation::{Breadcrumbs, SideNav, TopNavbar};
use pages::{Dashboard, Login, NotFound, Profile};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Dashboard {},
        #[route("/apps/profile")]
        Profile {},
        #[route("/pages/login")]
        Login {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

static SITE_CONFIG: &str = include_str!("../assets/site.json");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

fn load_site_config() -> SiteConfig {
    match SiteConfig::from_json(SITE_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Falling back to default site config: {}", err);
            SiteConfig::default()
        }
    }
}

fn sidebar(slot: SlotProps) -> Element {
    rsx! {
        SideNav {
            config: slot.config,
            sidebar_slim: slot.sidebar_slim,
            sidebar_collapsed: slot.sidebar_collapsed,
        }
    }
}

fn top_navbar(slot: SlotProps) -> Element {
    rsx! { TopNavbar { config: slot.config } }
}

fn breadcrumbs(slot: SlotProps) -> Element {
    rsx! { Breadcrumbs { config: slot.config } }
}

fn content(_slot: SlotProps) -> Element {
    rsx! {
        main { class: "layout__content", Outlet::<Route> {} }
    }
}

/// Frame shared by every route; survives navigation between pages
#[component]
fn AppShell() -> Element {
    let site = use_hook(load_site_config);
    let route = use_route::<Route>();

    let parts = vec![
        LayoutPart::content(content),
        LayoutPart::sidebar(sidebar),
        LayoutPart::Group(vec![
            LayoutPart::navbar(top_navbar),
            LayoutPart::navbar(breadcrumbs),
        ]),
    ];

    rsx! {
        Layout {
            parts,
            site,
            slim_capable: true,
            pathname: route.to_string(),
        }
    }
}
