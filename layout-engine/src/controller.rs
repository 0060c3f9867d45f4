//! Layout orchestrator
//!
//! [`LayoutController`] owns the store, the scroll lock and the deferred task
//! queue for one layout instance, and reaches the page only through a
//! [`Document`]. A host drives it with three kinds of events: viewport
//! resizes, route changes and explicit calls from pages. After every call the
//! host drains [`LayoutController::drain_scheduled`], waits for each task's
//! timing and hands it back to [`LayoutController::run`].

use tracing::{debug, info};

use crate::breakpoint::Breakpoints;
use crate::config::{LayoutOptions, SiteConfig};
use crate::context::{LayoutContext, SidebarProps};
use crate::document::Document;
use crate::head::HeadMeta;
use crate::schedule::{Deferred, TaskQueue};
use crate::scroll_lock::ScrollLock;
use crate::state::{LayoutState, MetaUpdate, VisibilityUpdate};
use crate::store::LayoutStore;

pub struct LayoutController<D: Document> {
    site: SiteConfig,
    options: LayoutOptions,
    store: LayoutStore,
    document: D,
    scroll_lock: ScrollLock,
    tasks: TaskQueue,
    mounted: bool,
    /// Set by `unmount`; every later call is ignored.
    retired: bool,
    pathname: Option<String>,
}

impl<D: Document> LayoutController<D> {
    pub fn new(site: SiteConfig, options: LayoutOptions, document: D) -> Self {
        Self::with_breakpoints(site, options, document, Breakpoints::BOOTSTRAP)
    }

    pub fn with_breakpoints(
        site: SiteConfig,
        options: LayoutOptions,
        document: D,
        breakpoints: Breakpoints,
    ) -> Self {
        let store = LayoutStore::with_breakpoints(&site, options.is_mobile, breakpoints);
        Self {
            site,
            options,
            store,
            document,
            scroll_lock: ScrollLock::new(),
            tasks: TaskQueue::new(),
            mounted: false,
            retired: false,
            pathname: None,
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn state(&self) -> &LayoutState {
        self.store.state()
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    pub fn options(&self) -> LayoutOptions {
        self.options
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// `true` once the layout was torn down
    pub fn is_retired(&self) -> bool {
        self.retired
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_held()
    }

    pub fn is_pending(&self, task: Deferred) -> bool {
        self.tasks.is_pending(task)
    }

    /// Snapshot published to the layout's consumers
    pub fn context(&self) -> LayoutContext {
        LayoutContext::new(self.store.state(), self.options, self.store.revision())
    }

    pub fn sidebar_props(&self) -> SidebarProps {
        self.context().sidebar_props(self.options)
    }

    pub fn head(&self) -> HeadMeta {
        HeadMeta::compose(&self.site, self.store.state())
    }

    // ========================
    // Lifecycle
    // ========================

    /// Classify the viewport once and schedule the animation guard reset.
    pub fn mount(&mut self) {
        if self.mounted || self.retired {
            return;
        }
        self.mounted = true;

        if let Some(width) = self.document.viewport_width() {
            self.store.on_viewport_change(width);
            self.tasks.schedule(Deferred::EnableAnimations);
        }
        info!(screen_size = ?self.state().screen_size, "layout mounted");
        self.sync_scroll_lock();
    }

    /// Drop pending tasks and release the scroll lock.
    ///
    /// The controller is dead afterwards: state stays frozen at its last
    /// value and cannot be mounted again.
    pub fn unmount(&mut self) {
        if self.retired {
            return;
        }
        self.retired = true;
        self.mounted = false;
        self.tasks.clear();
        self.scroll_lock.release(&self.document);
        info!("layout unmounted");
    }

    /// Tasks the host has to schedule, in scheduling order
    pub fn drain_scheduled(&mut self) -> Vec<Deferred> {
        self.tasks.drain()
    }

    /// Run a deferred task handed back by the host.
    ///
    /// Returns `true` when the state changed. Tasks arriving after unmount,
    /// or that are no longer pending, do nothing.
    pub fn run(&mut self, task: Deferred) -> bool {
        if !self.mounted {
            debug!(?task, "dropping task after unmount");
            return false;
        }
        if !self.tasks.take(task) {
            return false;
        }

        let changed = match task {
            Deferred::Classify => match self.document.viewport_width() {
                Some(width) => self.store.on_viewport_change(width),
                None => false,
            },
            Deferred::EnableAnimations => self.store.enable_animations(),
            Deferred::AutoCollapse => self.store.collapse_overlay(),
        };
        self.sync_scroll_lock();
        changed
    }

    // ========================
    // Events
    // ========================

    /// A resize notification; classification is deferred to the next tick.
    pub fn on_resize(&mut self) {
        if self.mounted && self.tasks.schedule(Deferred::Classify) {
            debug!("viewport classification scheduled");
        }
    }

    /// Classify an explicit viewport width right away.
    pub fn on_viewport_change(&mut self, width: f64) -> bool {
        if self.retired {
            return false;
        }
        let changed = self.store.on_viewport_change(width);
        self.sync_scroll_lock();
        changed
    }

    /// The router moved to `pathname`.
    ///
    /// The first path only records where the layout started. A later, distinct
    /// path scrolls to the top and closes an open overlay sidebar after a short
    /// delay.
    pub fn navigate(&mut self, pathname: &str) -> bool {
        if self.retired {
            return false;
        }
        let previous = self.pathname.replace(pathname.to_string());
        match previous.as_deref() {
            None => return false,
            Some(previous) if previous == pathname => return false,
            Some(_) => {}
        }

        debug!(pathname, "route changed");
        self.document.scroll_to_top();
        if self.mounted && self.state().overlay_open() {
            self.tasks.schedule(Deferred::AutoCollapse);
        }
        true
    }

    // ========================
    // Page API
    // ========================

    pub fn toggle_sidebar(&mut self) -> bool {
        if self.retired {
            return false;
        }
        let changed = self.store.toggle_sidebar();
        self.sync_scroll_lock();
        changed
    }

    pub fn set_visibility(&mut self, update: VisibilityUpdate) -> bool {
        if self.retired {
            debug!("ignoring visibility update after unmount");
            return false;
        }
        let changed = self.store.set_visibility(update);
        self.sync_scroll_lock();
        changed
    }

    pub fn set_meta(&mut self, update: MetaUpdate) -> bool {
        if self.retired {
            return false;
        }
        self.store.set_meta(update)
    }

    fn sync_scroll_lock(&mut self) {
        let wanted = self.mounted && self.store.state().overlay_open();
        self.scroll_lock.sync(&self.document, wanted);
    }
}

impl<D: Document> Drop for LayoutController<D> {
    fn drop(&mut self) {
        self.scroll_lock.release(&self.document);
    }
}
