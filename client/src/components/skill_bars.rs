//! Skill bars filled on first sight, bound to [`RevealTracker`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::components::MountError;
use crate::config::PageConfig;
use crate::consts::{DATA_PROGRESS, PROGRESS_FILL_SELECTOR};
use crate::state::progress::{INITIAL_WIDTH, RevealTracker, parse_target, width_style};
use crate::util::dom::{js_message, query_all, set_style};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// The intersection observer and any reveals still waiting on their delay.
///
/// Dropping it disconnects the observer and cancels pending reveals.
pub struct SkillBars {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
    _pending: Rc<RefCell<Vec<Timeout>>>,
}

impl Drop for SkillBars {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn mount(doc: &Document, config: &PageConfig) -> Result<SkillBars, MountError> {
    let bars = query_all(doc, PROGRESS_FILL_SELECTOR)?;
    let targets: Vec<f64> = bars
        .iter()
        .map(|bar| {
            let raw = bar.get_attribute(DATA_PROGRESS);
            parse_target(raw.as_deref()).unwrap_or_else(|| {
                log::warn!("skill bar has unusable {DATA_PROGRESS}={raw:?}; keeping it empty");
                0.0
            })
        })
        .collect();
    let tracker = RefCell::new(RevealTracker::new(targets, config.reveal_threshold));
    let pending = Rc::new(RefCell::new(Vec::new()));

    for bar in &bars {
        set_style(bar, "width", INITIAL_WIDTH);
    }
    let observed = bars.clone();

    let delay_ms = config.reveal_delay_ms;
    let queue = Rc::clone(&pending);
    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry = entry.unchecked_into::<IntersectionObserverEntry>();
            let target = entry.target();
            let Some(index) = bars.iter().position(|bar| *bar == target) else {
                continue;
            };
            let Some(percent) = tracker.borrow_mut().observe(index, entry.intersection_ratio()) else {
                continue;
            };
            observer.unobserve(&target);
            queue.borrow_mut().push(reveal_later(target, percent, delay_ms));
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|err| MountError::Js(js_message(&err)))?;
    for bar in &observed {
        observer.observe(bar);
    }

    Ok(SkillBars { observer, _callback: callback, _pending: pending })
}

fn reveal_later(bar: Element, percent: f64, delay_ms: u32) -> Timeout {
    Timeout::new(delay_ms, move || set_style(&bar, "width", &width_style(percent)))
}
