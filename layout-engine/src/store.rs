//! Layout state store and its transition rules

use tracing::debug;

use crate::breakpoint::{Breakpoints, ScreenSize};
use crate::config::SiteConfig;
use crate::state::{LayoutState, MetaUpdate, VisibilityUpdate};

/// Owns the [`LayoutState`] and applies every transition to it
///
/// Each method returns whether the state changed; every change bumps
/// [`LayoutStore::revision`].
#[derive(Debug, Clone)]
pub struct LayoutStore {
    state: LayoutState,
    breakpoints: Breakpoints,
    /// Collapse value to restore when the viewport returns to lg/xl
    last_large_sidebar_collapsed: bool,
    revision: u64,
}

impl LayoutStore {
    pub fn new(site: &SiteConfig, is_mobile: bool) -> Self {
        Self::with_breakpoints(site, is_mobile, Breakpoints::BOOTSTRAP)
    }

    pub fn with_breakpoints(site: &SiteConfig, is_mobile: bool, breakpoints: Breakpoints) -> Self {
        let state = LayoutState::new(site, is_mobile);
        Self {
            last_large_sidebar_collapsed: state.sidebar_collapsed,
            state,
            breakpoints,
            revision: 0,
        }
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    pub fn last_large_sidebar_collapsed(&self) -> bool {
        self.last_large_sidebar_collapsed
    }

    /// Reclassify the viewport and run the breakpoint transition when the
    /// size class changed.
    pub fn on_viewport_change(&mut self, width: f64) -> bool {
        let next = self.breakpoints.classify(width);
        let previous = self.state.screen_size;
        if previous == Some(next) {
            return false;
        }

        debug!(from = ?previous, to = %next, width, "screen size changed");
        self.state.screen_size = Some(next);
        self.apply_breakpoint_transition(previous, next);
        self.bump();
        true
    }

    fn apply_breakpoint_transition(&mut self, previous: Option<ScreenSize>, next: ScreenSize) {
        if next.is_overlay() {
            // Moving between two overlay sizes must not overwrite the saved
            // large-screen value with the forced collapse.
            if !previous.is_some_and(ScreenSize::is_overlay) {
                self.last_large_sidebar_collapsed = self.state.sidebar_collapsed;
            }
            self.state.sidebar_collapsed = true;
        } else {
            self.state.sidebar_collapsed = self.last_large_sidebar_collapsed;
        }
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.state.sidebar_collapsed = !self.state.sidebar_collapsed;
        if self.state.is_wide() {
            self.last_large_sidebar_collapsed = self.state.sidebar_collapsed;
        }
        debug!(collapsed = self.state.sidebar_collapsed, "sidebar toggled");
        self.bump();
        true
    }

    /// Collapse an open overlay sidebar; no-op at lg/xl or when already closed.
    pub fn collapse_overlay(&mut self) -> bool {
        if !self.state.is_overlay() || self.state.sidebar_collapsed {
            return false;
        }
        self.state.sidebar_collapsed = true;
        self.bump();
        true
    }

    pub fn set_visibility(&mut self, update: VisibilityUpdate) -> bool {
        let before = (self.state.sidebar_hidden, self.state.navbar_hidden, self.state.footer_hidden);
        if let Some(hidden) = update.sidebar_hidden {
            self.state.sidebar_hidden = hidden;
        }
        if let Some(hidden) = update.navbar_hidden {
            self.state.navbar_hidden = hidden;
        }
        if let Some(hidden) = update.footer_hidden {
            self.state.footer_hidden = hidden;
        }
        let after = (self.state.sidebar_hidden, self.state.navbar_hidden, self.state.footer_hidden);
        self.bump_if(before != after)
    }

    pub fn set_meta(&mut self, update: MetaUpdate) -> bool {
        let mut changed = false;
        if let Some(title) = update.page_title {
            changed |= self.state.page_title != title;
            self.state.page_title = title;
        }
        if let Some(description) = update.page_description {
            changed |= self.state.page_description != description;
            self.state.page_description = description;
        }
        if let Some(keywords) = update.page_keywords {
            changed |= self.state.page_keywords != keywords;
            self.state.page_keywords = keywords;
        }
        self.bump_if(changed)
    }

    /// Clear the first-paint animation guard. Happens once per lifetime.
    pub fn enable_animations(&mut self) -> bool {
        let changed = self.state.animations_disabled;
        self.state.animations_disabled = false;
        self.bump_if(changed)
    }

    fn bump_if(&mut self, changed: bool) -> bool {
        if changed {
            self.bump();
        }
        changed
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
