//! Layout state record and the partial updates pages send into it

use serde::{Deserialize, Serialize};

use crate::breakpoint::ScreenSize;
use crate::config::SiteConfig;

/// Mutable layout state, owned by a single layout instance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutState {
    pub sidebar_hidden: bool,
    pub navbar_hidden: bool,
    pub footer_hidden: bool,
    /// Sidebar minimized (slim at lg/xl) or closed (overlay sizes)
    pub sidebar_collapsed: bool,
    /// `None` until the first measurement
    pub screen_size: Option<ScreenSize>,
    /// Suppresses CSS transitions during the first paint
    pub animations_disabled: bool,
    pub page_title: Option<String>,
    pub page_description: String,
    pub page_keywords: String,
}

impl LayoutState {
    pub fn new(site: &SiteConfig, is_mobile: bool) -> Self {
        Self {
            sidebar_hidden: false,
            navbar_hidden: false,
            footer_hidden: false,
            sidebar_collapsed: is_mobile,
            screen_size: None,
            animations_disabled: true,
            page_title: None,
            page_description: site.site_description.clone(),
            page_keywords: site.site_keywords.clone(),
        }
    }

    /// True when the current size draws the sidebar as an overlay.
    pub fn is_overlay(&self) -> bool {
        self.screen_size.is_some_and(ScreenSize::is_overlay)
    }

    /// True when the current size is lg or xl.
    pub fn is_wide(&self) -> bool {
        self.screen_size.is_some_and(ScreenSize::is_wide)
    }

    /// Only the navbar is shown (auth-style pages).
    pub fn only_navbar(&self) -> bool {
        self.sidebar_hidden && !self.navbar_hidden
    }

    /// The overlay sidebar is open over the content.
    pub fn overlay_open(&self) -> bool {
        self.is_overlay() && !self.sidebar_collapsed && !self.sidebar_hidden
    }
}

/// Partial visibility change; `None` fields are left untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisibilityUpdate {
    pub sidebar_hidden: Option<bool>,
    pub navbar_hidden: Option<bool>,
    pub footer_hidden: Option<bool>,
}

impl VisibilityUpdate {
    pub fn sidebar(mut self, hidden: bool) -> Self {
        self.sidebar_hidden = Some(hidden);
        self
    }

    pub fn navbar(mut self, hidden: bool) -> Self {
        self.navbar_hidden = Some(hidden);
        self
    }

    pub fn footer(mut self, hidden: bool) -> Self {
        self.footer_hidden = Some(hidden);
        self
    }

    /// Hide or show every region at once.
    pub fn all(hidden: bool) -> Self {
        Self::default().sidebar(hidden).navbar(hidden).footer(hidden)
    }
}

/// Partial page metadata change; `None` fields are left untouched
///
/// `page_title: Some(None)` clears a previously set title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetaUpdate {
    pub page_title: Option<Option<String>>,
    pub page_description: Option<String>,
    pub page_keywords: Option<String>,
}

impl MetaUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            page_title: Some(Some(title.into())),
            ..Self::default()
        }
    }

    pub fn clear_title(mut self) -> Self {
        self.page_title = Some(None);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.page_description = Some(description.into());
        self
    }

    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.page_keywords = Some(keywords.into());
        self
    }
}
