//! Image slider bound to [`SlideController`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{Document, Element};

use crate::components::MountError;
use crate::config::PageConfig;
use crate::consts::{ACTIVE_CLASS, INDICATOR_SELECTOR, NEXT_BUTTON_ID, PREV_BUTTON_ID, SLIDE_SELECTOR};
use crate::state::slider::{SlideController, SlideSurface, Step};
use crate::util::dom::{Listener, query_all, set_class};

/// Slides and indicator dots, queried once at mount.
struct PageSlides {
    slides: Vec<Element>,
    indicators: Vec<Element>,
}

impl SlideSurface for PageSlides {
    fn deactivate_all(&self) {
        for el in self.slides.iter().chain(&self.indicators) {
            set_class(el, ACTIVE_CLASS, false);
        }
    }

    fn activate(&self, index: usize) {
        if let Some(slide) = self.slides.get(index) {
            set_class(slide, ACTIVE_CLASS, true);
        }
        if let Some(indicator) = self.indicators.get(index) {
            set_class(indicator, ACTIVE_CLASS, true);
        }
    }
}

/// Manual controls and the autoplay timer. Dropping it stops both.
pub struct ImageSlider {
    _controls: Vec<Listener>,
    _autoplay: Interval,
}

/// Wire the slider. `Ok(None)` when the page has no slides.
pub fn mount(doc: &Document, config: &PageConfig) -> Result<Option<ImageSlider>, MountError> {
    let slides = query_all(doc, SLIDE_SELECTOR)?;
    let Some(controller) = SlideController::new(slides.len()) else {
        return Ok(None);
    };
    let indicators = query_all(doc, INDICATOR_SELECTOR)?;
    let surface = PageSlides { slides, indicators: indicators.clone() };
    controller.show(&surface);

    let controller = Rc::new(RefCell::new(controller));
    let surface = Rc::new(surface);
    let step: Rc<dyn Fn(Step)> = Rc::new(move |step| {
        if controller.borrow_mut().step(step, &*surface).is_none() {
            log::debug!("slider ignored {step:?}");
        }
    });

    let mut controls = Vec::new();
    for (id, direction) in [(NEXT_BUTTON_ID, Step::Next), (PREV_BUTTON_ID, Step::Previous)] {
        let Some(button) = doc.get_element_by_id(id) else {
            log::debug!("slider control #{id} missing");
            continue;
        };
        let step = Rc::clone(&step);
        controls.push(Listener::attach(&button, "click", move |_event| step(direction))?);
    }

    for (index, indicator) in indicators.iter().enumerate() {
        let step = Rc::clone(&step);
        controls.push(Listener::attach(indicator, "click", move |_event| step(Step::Goto(index)))?);
    }

    let autoplay = Interval::new(config.slide_interval_ms, move || step(Step::Next));

    Ok(Some(ImageSlider { _controls: controls, _autoplay: autoplay }))
}
