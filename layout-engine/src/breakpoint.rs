//! Breakpoint classification of the viewport width
//!
//! The default table mirrors the Bootstrap 4 grid: xs < 576, sm [576, 768),
//! md [768, 992), lg [992, 1200), xl >= 1200. The `max` bounds keep the
//! 0.2px sub-pixel offset used by the stylesheet media queries so that
//! [`Breakpoints::media_query`] produces the same queries as the CSS.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

/// Offset subtracted from the next range's `min` to form a `max` bound.
pub const SUBPIXEL_OFFSET: f64 = 0.2;

/// Named viewport size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenSize {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl ScreenSize {
    /// All sizes in ascending order.
    pub const ALL: [ScreenSize; 5] = [
        ScreenSize::Xs,
        ScreenSize::Sm,
        ScreenSize::Md,
        ScreenSize::Lg,
        ScreenSize::Xl,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ScreenSize::Xs => "xs",
            ScreenSize::Sm => "sm",
            ScreenSize::Md => "md",
            ScreenSize::Lg => "lg",
            ScreenSize::Xl => "xl",
        }
    }

    /// Sizes where the sidebar is drawn as a dismissible overlay.
    pub const fn is_overlay(self) -> bool {
        matches!(self, ScreenSize::Xs | ScreenSize::Sm | ScreenSize::Md)
    }

    /// Sizes where the sidebar sits beside the content (and may go slim).
    pub const fn is_wide(self) -> bool {
        matches!(self, ScreenSize::Lg | ScreenSize::Xl)
    }

    const fn index(self) -> usize {
        match self {
            ScreenSize::Xs => 0,
            ScreenSize::Sm => 1,
            ScreenSize::Md => 2,
            ScreenSize::Lg => 3,
            ScreenSize::Xl => 4,
        }
    }
}

impl fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Width range of a single size class, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakpointRange {
    pub size: ScreenSize,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Ordered, contiguous table of breakpoint ranges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    ranges: [BreakpointRange; 5],
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::BOOTSTRAP
    }
}

impl Breakpoints {
    pub const BOOTSTRAP: Self = Self {
        ranges: [
            BreakpointRange { size: ScreenSize::Xs, min: None, max: Some(575.8) },
            BreakpointRange { size: ScreenSize::Sm, min: Some(576.0), max: Some(767.8) },
            BreakpointRange { size: ScreenSize::Md, min: Some(768.0), max: Some(991.8) },
            BreakpointRange { size: ScreenSize::Lg, min: Some(992.0), max: Some(1199.8) },
            BreakpointRange { size: ScreenSize::Xl, min: Some(1200.0), max: None },
        ],
    };

    /// Build a table from the minimum widths of sm, md, lg and xl.
    ///
    /// Thresholds must be finite, positive and strictly increasing.
    pub fn new(sm: f64, md: f64, lg: f64, xl: f64) -> LayoutResult<Self> {
        let mins = [sm, md, lg, xl];
        if mins.iter().any(|m| !m.is_finite() || *m <= 0.0) {
            return Err(LayoutError::InvalidBreakpoints(format!(
                "thresholds must be finite and positive, got {mins:?}"
            )));
        }
        if mins.windows(2).any(|w| w[1] <= w[0]) {
            return Err(LayoutError::InvalidBreakpoints(format!(
                "thresholds must be strictly increasing, got {mins:?}"
            )));
        }

        let max_below = |next: f64| Some(next - SUBPIXEL_OFFSET);
        Ok(Self {
            ranges: [
                BreakpointRange { size: ScreenSize::Xs, min: None, max: max_below(sm) },
                BreakpointRange { size: ScreenSize::Sm, min: Some(sm), max: max_below(md) },
                BreakpointRange { size: ScreenSize::Md, min: Some(md), max: max_below(lg) },
                BreakpointRange { size: ScreenSize::Lg, min: Some(lg), max: max_below(xl) },
                BreakpointRange { size: ScreenSize::Xl, min: Some(xl), max: None },
            ],
        })
    }

    pub fn ranges(&self) -> &[BreakpointRange; 5] {
        &self.ranges
    }

    pub fn range(&self, size: ScreenSize) -> BreakpointRange {
        self.ranges[size.index()]
    }

    /// Classify a viewport width.
    ///
    /// Only the `min` bounds are consulted, so the sub-pixel gap between a
    /// range's `max` and the next `min` (e.g. 575.9) stays in the lower class
    /// and every width maps to exactly one size. NaN and negative widths are
    /// `Xs`.
    pub fn classify(&self, width: f64) -> ScreenSize {
        self.ranges
            .iter()
            .rev()
            .find(|range| range.min.is_none_or(|min| width >= min))
            .map(|range| range.size)
            .unwrap_or(ScreenSize::Xs)
    }

    /// CSS media query string matching `size`, e.g.
    /// `(min-width: 576px) and (max-width: 767.8px)`.
    pub fn media_query(&self, size: ScreenSize) -> String {
        let range = self.range(size);
        let parts: Vec<String> = [
            range.min.map(|min| format!("(min-width: {min}px)")),
            range.max.map(|max| format!("(max-width: {max}px)")),
        ]
        .into_iter()
        .flatten()
        .collect();
        parts.join(" and ")
    }
}

/// Classify with the default table.
pub fn classify(width: f64) -> ScreenSize {
    Breakpoints::BOOTSTRAP.classify(width)
}
