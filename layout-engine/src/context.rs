//! Snapshot of the layout published to the sidebar, navbars and pages

use serde::Serialize;

use crate::config::LayoutOptions;
use crate::state::LayoutState;

/// Read-only view of the layout handed to every consumer
///
/// Two snapshots are equal only when they carry the same revision, so a
/// consumer comparing against its previous snapshot sees every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutContext {
    #[serde(flatten)]
    pub state: LayoutState,
    /// Slim-capable layout, collapsed, at lg or xl
    pub sidebar_slim: bool,
    pub only_navbar: bool,
    pub revision: u64,
}

impl LayoutContext {
    pub fn new(state: &LayoutState, options: LayoutOptions, revision: u64) -> Self {
        Self {
            sidebar_slim: sidebar_slim(state, options),
            only_navbar: state.only_navbar(),
            state: state.clone(),
            revision,
        }
    }

    /// Props injected into the sidebar region
    pub fn sidebar_props(&self, options: LayoutOptions) -> SidebarProps {
        SidebarProps {
            sidebar_slim: self.sidebar_slim,
            sidebar_collapsed: !options.slim_capable && self.state.sidebar_collapsed,
        }
    }
}

/// Flags injected into the sidebar region by the layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarProps {
    pub sidebar_slim: bool,
    pub sidebar_collapsed: bool,
}

pub fn sidebar_slim(state: &LayoutState, options: LayoutOptions) -> bool {
    options.slim_capable && state.sidebar_collapsed && state.is_wide()
}
