//! Stacked navbar positioning
//!
//! Sticky navbars are laid out top to bottom; each one is pushed down by the
//! total height of the navbars above it so none of them overlap.

/// A rendered navbar that can be measured and repositioned
pub trait NavbarElement {
    /// Rendered height in CSS pixels
    fn height(&self) -> f64;
    /// Set the element's `top` offset in CSS pixels
    fn set_top(&self, top: f64);
}

/// Cumulative offsets for navbars of the given heights.
///
/// The first offset is always 0 and offsets never decrease; negative or NaN
/// heights contribute nothing.
pub fn stack_offsets(heights: &[f64]) -> Vec<f64> {
    let mut total = 0.0;
    heights
        .iter()
        .map(|height| {
            let top = total;
            if height.is_finite() && *height > 0.0 {
                total += height;
            }
            top
        })
        .collect()
}

/// Applies [`stack_offsets`] to live elements, writing only what changed
#[derive(Debug, Default, Clone)]
pub struct NavbarReconciler {
    applied: Vec<f64>,
}

impl NavbarReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offsets written by the last pass, in document order
    pub fn offsets(&self) -> &[f64] {
        &self.applied
    }

    /// Measure `navbars` in document order and assign their offsets.
    ///
    /// Returns the number of elements whose `top` was written.
    pub fn reconcile<E: NavbarElement>(&mut self, navbars: &[E]) -> usize {
        let heights: Vec<f64> = navbars.iter().map(NavbarElement::height).collect();
        let offsets = stack_offsets(&heights);

        let mut written = 0;
        for (index, (navbar, top)) in navbars.iter().zip(&offsets).enumerate() {
            if self.applied.get(index) != Some(top) {
                navbar.set_top(*top);
                written += 1;
            }
        }

        if written > 0 {
            tracing::debug!(navbars = navbars.len(), written, "navbar offsets updated");
        }
        self.applied = offsets;
        written
    }

    /// Forget applied offsets, forcing the next pass to write every element.
    pub fn invalidate(&mut self) {
        self.applied.clear();
    }
}
