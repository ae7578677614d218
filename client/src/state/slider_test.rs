use std::cell::RefCell;

use super::*;

/// Slide and indicator `active` flags, like the classes on the page.
struct FakeSurface {
    slides: RefCell<Vec<bool>>,
    indicators: RefCell<Vec<bool>>,
}

impl FakeSurface {
    fn new(slides: usize, indicators: usize) -> Self {
        Self { slides: RefCell::new(vec![false; slides]), indicators: RefCell::new(vec![false; indicators]) }
    }

    fn active(flags: &RefCell<Vec<bool>>) -> Vec<usize> {
        flags
            .borrow()
            .iter()
            .enumerate()
            .filter_map(|(i, on)| on.then_some(i))
            .collect()
    }

    fn active_slides(&self) -> Vec<usize> {
        Self::active(&self.slides)
    }

    fn active_indicators(&self) -> Vec<usize> {
        Self::active(&self.indicators)
    }
}

impl SlideSurface for FakeSurface {
    fn deactivate_all(&self) {
        self.slides.borrow_mut().iter_mut().for_each(|on| *on = false);
        self.indicators.borrow_mut().iter_mut().for_each(|on| *on = false);
    }

    fn activate(&self, index: usize) {
        if let Some(on) = self.slides.borrow_mut().get_mut(index) {
            *on = true;
        }
        if let Some(on) = self.indicators.borrow_mut().get_mut(index) {
            *on = true;
        }
    }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn zero_slides_disables_the_controller() {
    assert!(SlideController::new(0).is_none());
}

#[test]
fn starts_at_first_slide() {
    let slider = SlideController::new(4).unwrap();
    assert_eq!(slider.current(), 0);
    assert_eq!(slider.len, 4);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn next_wraps_to_first() {
    let mut slider = SlideController::new(3).unwrap();
    assert_eq!(slider.apply(Step::Next), Some(1));
    assert_eq!(slider.apply(Step::Next), Some(2));
    assert_eq!(slider.apply(Step::Next), Some(0));
}

#[test]
fn previous_wraps_to_last() {
    let mut slider = SlideController::new(3).unwrap();
    assert_eq!(slider.apply(Step::Previous), Some(2));
    assert_eq!(slider.apply(Step::Previous), Some(1));
}

#[test]
fn next_n_times_returns_to_start_for_any_start() {
    for len in 1..=7 {
        for start in 0..len {
            let mut slider = SlideController::new(len).unwrap();
            slider.apply(Step::Goto(start));
            for _ in 0..len {
                slider.apply(Step::Next);
            }
            assert_eq!(slider.current(), start, "next, len={len} start={start}");
            for _ in 0..len {
                slider.apply(Step::Previous);
            }
            assert_eq!(slider.current(), start, "previous, len={len} start={start}");
        }
    }
}

#[test]
fn single_slide_stays_put() {
    let mut slider = SlideController::new(1).unwrap();
    assert_eq!(slider.apply(Step::Next), Some(0));
    assert_eq!(slider.apply(Step::Previous), Some(0));
}

#[test]
fn goto_out_of_range_is_rejected() {
    let mut slider = SlideController::new(3).unwrap();
    slider.apply(Step::Goto(1));
    assert_eq!(slider.apply(Step::Goto(3)), None);
    assert_eq!(slider.current(), 1);
}

// =============================================================
// Repaint
// =============================================================

#[test]
fn goto_leaves_exactly_one_slide_and_indicator_active() {
    let len = 5;
    let surface = FakeSurface::new(len, len);
    let mut slider = SlideController::new(len).unwrap();
    for i in (0..len).rev() {
        slider.step(Step::Goto(i), &surface);
        assert_eq!(surface.active_slides(), vec![i]);
        assert_eq!(surface.active_indicators(), vec![i]);
    }
}

#[test]
fn manual_and_timed_steps_repaint_identically() {
    let manual = FakeSurface::new(3, 3);
    let timed = FakeSurface::new(3, 3);
    let mut a = SlideController::new(3).unwrap();
    let mut b = SlideController::new(3).unwrap();

    a.step(Step::Next, &manual);
    b.step(Step::Goto(1), &timed);
    assert_eq!(manual.active_slides(), timed.active_slides());
    assert_eq!(manual.active_indicators(), timed.active_indicators());
}

#[test]
fn rejected_step_does_not_repaint() {
    let surface = FakeSurface::new(2, 2);
    let mut slider = SlideController::new(2).unwrap();
    slider.show(&surface);
    assert_eq!(slider.step(Step::Goto(9), &surface), None);
    assert_eq!(surface.active_slides(), vec![0]);
}

#[test]
fn show_clears_stale_marks() {
    let surface = FakeSurface::new(3, 3);
    surface.activate(2);
    let slider = SlideController::new(3).unwrap();
    slider.show(&surface);
    assert_eq!(surface.active_slides(), vec![0]);
    assert_eq!(surface.active_indicators(), vec![0]);
}
