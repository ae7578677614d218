//! Image slider state machine.
//!
//! One index in `[0, len)`, wrapping both ways. Manual buttons, indicator
//! clicks, and the autoplay timer all go through [`SlideController::step`],
//! and every transition repaints the same way: clear all, mark one.

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

/// A requested transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
    Goto(usize),
}

/// Slides and indicators as the page shows them.
pub trait SlideSurface {
    /// Remove the active mark from every slide and indicator.
    fn deactivate_all(&self);
    /// Mark slide `index` and indicator `index` active (when present).
    fn activate(&self, index: usize);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideController {
    index: usize,
    len: usize,
}

impl SlideController {
    /// A controller over `len` slides starting at the first; `None` when
    /// there are no slides.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn current(&self) -> usize {
        self.index
    }

    /// Apply `step` and return the new index. An out-of-range `Goto` is
    /// rejected and leaves the index unchanged.
    pub fn apply(&mut self, step: Step) -> Option<usize> {
        self.index = match step {
            Step::Next => (self.index + 1) % self.len,
            Step::Previous => (self.index + self.len - 1) % self.len,
            Step::Goto(target) if target < self.len => target,
            Step::Goto(_) => return None,
        };
        Some(self.index)
    }

    /// Repaint `surface` for the current index.
    pub fn show(&self, surface: &impl SlideSurface) {
        surface.deactivate_all();
        surface.activate(self.index);
    }

    /// Apply `step` and repaint when it was accepted.
    pub fn step(&mut self, step: Step, surface: &impl SlideSurface) -> Option<usize> {
        let index = self.apply(step)?;
        self.show(surface);
        Some(index)
    }
}
