use dioxus::prelude::*;
use layout_engine::prelude::*;

use crate::dom::{self, WebDocument};

type Controller = LayoutController<WebDocument>;

/// Handle on the layout of the current page
///
/// The controller lives in a signal. Readers subscribe to `revision`, a memo
/// over the controller's revision counter, so they re-render only when the
/// engine reports a change.
#[derive(Clone, Copy, PartialEq)]
pub struct PageConfig {
    controller: Signal<Controller>,
    revision: Memo<u64>,
}

/// Create the controller for a layout instance. Called once by `Layout`.
pub fn use_layout_controller(site: SiteConfig, options: LayoutOptions) -> PageConfig {
    let controller = use_signal(|| LayoutController::new(site, options, WebDocument));
    let revision = use_memo(move || controller.read().revision());
    PageConfig { controller, revision }
}

/// The layout handle provided by the enclosing `Layout`.
pub fn use_page_config() -> PageConfig {
    use_context::<PageConfig>()
}

impl PageConfig {
    /// Current snapshot; subscribes the calling component to layout changes.
    pub fn context(&self) -> LayoutContext {
        self.track();
        self.controller.peek().context()
    }

    pub fn head(&self) -> HeadMeta {
        self.track();
        self.controller.peek().head()
    }

    pub fn sidebar_props(&self) -> SidebarProps {
        self.track();
        self.controller.peek().sidebar_props()
    }

    /// Subscribe to every layout change without reading the state.
    pub fn track(&self) -> u64 {
        (self.revision)()
    }

    pub fn toggle_sidebar(&self) {
        self.update(|controller| {
            controller.toggle_sidebar();
        });
    }

    pub fn set_visibility(&self, update: VisibilityUpdate) {
        self.update(|controller| {
            controller.set_visibility(update);
        });
    }

    pub fn set_meta(&self, update: MetaUpdate) {
        self.update(|controller| {
            controller.set_meta(update);
        });
    }

    pub(crate) fn mount(&self) {
        self.update(Controller::mount);
    }

    pub(crate) fn unmount(&self) {
        self.update(Controller::unmount);
    }

    pub(crate) fn on_resize(&self) {
        self.update(Controller::on_resize);
    }

    pub(crate) fn navigate(&self, pathname: &str) {
        self.update(|controller| {
            controller.navigate(pathname);
        });
    }

    fn run(&self, task: Deferred) {
        self.update(|controller| {
            controller.run(task);
        });
    }

    /// Apply `change` through the signal, then hand queued tasks to the
    /// runtime. Tasks are owned by the calling scope, which for every
    /// scheduling call is the `Layout` itself.
    fn update(&self, change: impl FnOnce(&mut Controller)) {
        let mut signal = self.controller;
        let tasks = match signal.try_write() {
            Ok(mut controller) => {
                change(&mut *controller);
                controller.drain_scheduled()
            }
            Err(err) => {
                tracing::warn!("Layout controller unavailable: {}", err);
                return;
            }
        };

        let this = *self;
        for task in tasks {
            spawn(async move {
                match dom::wait_for(task.timing()).await {
                    Ok(()) => this.run(task),
                    Err(err) => tracing::warn!("Dropping {:?}: {}", task, err),
                }
            });
        }
    }
}
