//! Document head metadata

use crate::config::{FavIcon, SiteConfig};
use crate::state::LayoutState;

/// Everything the layout writes into `<head>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical_url: String,
    pub fav_icons: Vec<FavIcon>,
}

impl HeadMeta {
    pub fn compose(site: &SiteConfig, state: &LayoutState) -> Self {
        Self {
            title: page_title(&site.site_title, state.page_title.as_deref()),
            description: state.page_description.clone(),
            keywords: state.page_keywords.clone(),
            canonical_url: site.site_canonical_url.clone(),
            fav_icons: site.fav_icons.clone(),
        }
    }
}

/// `"<site>"` or `"<site> - <page>"` when the page has a title.
pub fn page_title(site_title: &str, page_title: Option<&str>) -> String {
    match page_title.map(str::trim).filter(|title| !title.is_empty()) {
        Some(title) => format!("{site_title} - {title}"),
        None => site_title.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MetaUpdate;
    use crate::store::LayoutStore;

    #[test]
    fn page_title_is_appended_to_site_title() {
        let site = SiteConfig {
            site_title: "Acme".to_string(),
            ..SiteConfig::default()
        };
        let mut store = LayoutStore::new(&site, false);
        assert_eq!(HeadMeta::compose(&site, store.state()).title, "Acme");

        store.set_meta(MetaUpdate::title("Profile"));
        assert_eq!(HeadMeta::compose(&site, store.state()).title, "Acme - Profile");
    }

    #[test]
    fn blank_page_title_is_ignored() {
        assert_eq!(page_title("Acme", Some("  ")), "Acme");
        assert_eq!(page_title("Acme", None), "Acme");
    }

    #[test]
    fn description_follows_state_and_links_follow_site() {
        let site = SiteConfig {
            site_title: "Acme".to_string(),
            site_description: "Site".to_string(),
            site_canonical_url: "https://acme.test".to_string(),
            fav_icons: vec![FavIcon {
                rel: "icon".to_string(),
                href: "/favicon.ico".to_string(),
                sizes: None,
                mime_type: None,
            }],
            ..SiteConfig::default()
        };
        let mut store = LayoutStore::new(&site, false);
        assert_eq!(HeadMeta::compose(&site, store.state()).description, "Site");

        store.set_meta(MetaUpdate::default().description("Page"));
        let head = HeadMeta::compose(&site, store.state());
        assert_eq!(head.description, "Page");
        assert_eq!(head.canonical_url, "https://acme.test");
        assert_eq!(head.fav_icons.len(), 1);
    }
}
