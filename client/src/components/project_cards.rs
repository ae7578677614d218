//! Project cards bound to [`ProjectCard`] click routing.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Window};

use crate::components::MountError;
use crate::consts::{DATA_GITHUB_URL, DATA_PROJECT_URL, PROJECT_CARD_SELECTOR, PROJECT_LINK_CLASS};
use crate::state::cards::{ClickOrigin, ProjectCard};
use crate::util::dom::{Listener, query_all, set_style};
use crate::util::navigation::WindowNavigator;

/// One click listener per card. Dropping it detaches them all.
pub struct ProjectCards {
    _clicks: Vec<Listener>,
}

/// Classify where a click landed. Only the element actually clicked is
/// inspected, not its ancestors.
fn click_origin(event: &Event) -> ClickOrigin {
    let Some(target) = event.target() else {
        return ClickOrigin::Card;
    };
    match target.dyn_ref::<Element>() {
        Some(el) if el.class_list().contains(PROJECT_LINK_CLASS) => {
            ClickOrigin::sub_link(el.get_attribute(DATA_GITHUB_URL))
        }
        _ => ClickOrigin::Card,
    }
}

pub fn mount(doc: &Document, window: &Window) -> Result<ProjectCards, MountError> {
    let cards = query_all(doc, PROJECT_CARD_SELECTOR)?;
    let mut clicks = Vec::with_capacity(cards.len());

    for el in cards {
        set_style(&el, "cursor", "pointer");
        let card = ProjectCard::new(el.get_attribute(DATA_PROJECT_URL));
        let navigator = WindowNavigator::new(window.clone());
        clicks.push(Listener::attach(&el, "click", move |event| {
            let click = card.resolve(&click_origin(&event));
            if click.stop_propagation {
                event.stop_propagation();
            }
            click.action.dispatch(&navigator);
        })?);
    }

    Ok(ProjectCards { _clicks: clicks })
}
