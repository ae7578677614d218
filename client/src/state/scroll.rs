//! Back to top control visibility.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Tracks whether the back to top control should be visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackToTop {
    offset: f64,
    visible: bool,
}

impl BackToTop {
    /// Hidden until the page scrolls strictly past `offset` pixels.
    pub fn new(offset: f64) -> Self {
        Self { offset, visible: false }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed the current vertical scroll offset. Returns the new visibility
    /// only when it changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<bool> {
        let visible = scroll_y > self.offset;
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        Some(visible)
    }
}
