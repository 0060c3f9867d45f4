//! Host document access
//!
//! The engine never touches a browser directly. Hosts implement
//! [`Document`]; every method must be a harmless no-op when there is no
//! window or document (server-side rendering, tests).

/// Value written to the `touch-action` style of `<body>` and `<html>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    Auto,
    None,
}

impl TouchAction {
    pub const fn css_value(self) -> &'static str {
        match self {
            TouchAction::Auto => "auto",
            TouchAction::None => "none",
        }
    }
}

pub trait Document {
    /// Current viewport width in CSS pixels, `None` without a viewport
    fn viewport_width(&self) -> Option<f64>;

    /// Apply `touch-action` to the body and root elements.
    ///
    /// Returns `false` when there is no document to write to.
    fn set_touch_action(&self, action: TouchAction) -> bool;

    /// Reset the page scroll position to the top.
    fn scroll_to_top(&self);
}

/// Document for environments without a browser
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl Document for Headless {
    fn viewport_width(&self) -> Option<f64> {
        None
    }

    fn set_touch_action(&self, _action: TouchAction) -> bool {
        false
    }

    fn scroll_to_top(&self) {}
}
