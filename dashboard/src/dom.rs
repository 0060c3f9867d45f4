//! Browser bindings for the layout engine
//!
//! Everything here checks for a window/document first and degrades to a
//! no-op without one, so the layout also renders during SSR.

use layout_engine::prelude::*;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlElement};

/// Class carried by every navbar wrapper rendered by the layout
pub const NAVBAR_CLASS: &str = "layout__navbar";

#[derive(Error, Debug)]
pub enum DomError {
    #[error("No window available")]
    NoWindow,

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{value:?}"))
    }
}

/// [`Document`] backed by `window` / `document`
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDocument;

impl WebDocument {
    fn body_and_root() -> Option<(HtmlElement, HtmlElement)> {
        let document = web_sys::window()?.document()?;
        let body = document.body()?;
        let root = document.document_element()?.dyn_into::<HtmlElement>().ok()?;
        Some((body, root))
    }
}

impl Document for WebDocument {
    fn viewport_width(&self) -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }

    fn set_touch_action(&self, action: TouchAction) -> bool {
        let Some((body, root)) = Self::body_and_root() else {
            return false;
        };
        for element in [&body, &root] {
            if let Err(err) = element.style().set_property("touch-action", action.css_value()) {
                tracing::warn!("Failed to set touch-action: {:?}", err);
            }
        }
        true
    }

    fn scroll_to_top(&self) {
        if let Some((body, root)) = Self::body_and_root() {
            root.set_scroll_top(0);
            body.set_scroll_top(0);
        }
    }
}

/// Whether the current browser reports a mobile user agent.
pub fn is_mobile_client() -> bool {
    web_sys::window()
        .and_then(|window| window.navigator().user_agent().ok())
        .is_some_and(|agent| is_mobile_user_agent(&agent))
}

/// A rendered navbar wrapper
pub struct DomNavbar(HtmlElement);

impl NavbarElement for DomNavbar {
    fn height(&self) -> f64 {
        self.0.get_bounding_client_rect().height()
    }

    fn set_top(&self, top: f64) {
        if let Err(err) = self.0.style().set_property("top", &format!("{top}px")) {
            tracing::warn!("Failed to position navbar: {:?}", err);
        }
    }
}

/// Navbar wrappers inside `container`, in document order.
pub fn navbars_in(container: &Element) -> Vec<DomNavbar> {
    let selector = format!(":scope .{NAVBAR_CLASS}");
    let nodes = match container.query_selector_all(&selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            tracing::warn!("Navbar query failed: {:?}", err);
            return Vec::new();
        }
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(DomNavbar)
        .collect()
}

/// Resolve after `millis` via `setTimeout`.
pub async fn sleep(millis: i32) -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let mut scheduled = Ok(0);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
    });
    scheduled?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Resolve on the next animation frame.
pub async fn next_frame() -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let mut scheduled = Ok(0);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        scheduled = window.request_animation_frame(&resolve);
    });
    scheduled?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Wait for a deferred layout task to become due.
pub async fn wait_for(timing: Timing) -> Result<(), DomError> {
    match timing {
        Timing::NextTick => sleep(0).await,
        Timing::NextFrame => next_frame().await,
        Timing::After { millis } => sleep(i32::try_from(millis).unwrap_or(i32::MAX)).await,
    }
}
