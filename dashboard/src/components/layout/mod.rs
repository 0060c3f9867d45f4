pub mod footer;
pub mod head;
pub mod layout;

use dioxus::prelude::*;
use layout_engine::slots::Part;

use crate::hooks::PageConfig;

pub use footer::LayoutFooter;
pub use head::LayoutHead;
pub use layout::Layout;

/// Props handed to every region renderer
///
/// `sidebar_slim` and `sidebar_collapsed` are only meaningful to the sidebar.
#[derive(Clone, PartialEq)]
pub struct SlotProps {
    pub config: PageConfig,
    pub sidebar_slim: bool,
    pub sidebar_collapsed: bool,
}

/// Renders one region. Must not call hooks itself; wrap hook-using markup in
/// a component and return that.
pub type Renderer = fn(SlotProps) -> Element;

/// A role-tagged child of the [`Layout`]
pub type LayoutPart = Part<Renderer>;
