//! Layout Engine - responsive state machine for a dashboard shell
//!
//! The engine decides how the dashboard frame (sidebar, stacked navbars,
//! content) is arranged for the current viewport:
//! - Breakpoint classification of the viewport width (xs..xl)
//! - Sidebar collapse rules, including restoring the wide-screen state
//! - Offsets for stacked sticky navbars
//! - A published snapshot with the derived slim-sidebar flag
//! - Role-based resolution of the sidebar / navbar / content regions
//!
//! It holds no DOM handles; hosts implement [`document::Document`] and
//! [`navbar::NavbarElement`].
//!
//! ## Example
//! ```rust
//! use layout_engine::prelude::*;
//!
//! let mut layout = LayoutController::new(
//!     SiteConfig::default(),
//!     LayoutOptions { slim_capable: true, is_mobile: false },
//!     Headless,
//! );
//! layout.mount();
//! layout.on_viewport_change(1300.0);
//! assert_eq!(layout.state().screen_size, Some(ScreenSize::Xl));
//!
//! layout.toggle_sidebar();
//! assert!(layout.context().sidebar_slim);
//! ```

pub mod breakpoint;
pub mod config;
pub mod context;
pub mod controller;
pub mod device;
pub mod document;
pub mod error;
pub mod head;
pub mod navbar;
pub mod schedule;
pub mod scroll_lock;
pub mod slots;
pub mod state;
pub mod store;

// Re-export common types
pub mod prelude {
    pub use crate::breakpoint::{classify, Breakpoints, ScreenSize};
    pub use crate::config::{FavIcon, LayoutOptions, SiteConfig};
    pub use crate::context::{LayoutContext, SidebarProps};
    pub use crate::controller::LayoutController;
    pub use crate::device::is_mobile_user_agent;
    pub use crate::document::{Document, Headless, TouchAction};
    pub use crate::error::{LayoutError, LayoutResult};
    pub use crate::head::HeadMeta;
    pub use crate::navbar::{stack_offsets, NavbarElement, NavbarReconciler};
    pub use crate::schedule::{Deferred, Timing};
    pub use crate::slots::{resolve_slots, Part, PartRole, ResolvedSlots};
    pub use crate::state::{LayoutState, MetaUpdate, VisibilityUpdate};
    pub use crate::store::LayoutStore;
}
