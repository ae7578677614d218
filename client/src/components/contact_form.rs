//! Contact form bound to [`ContactFlow`].

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement, Window};

use crate::components::MountError;
use crate::config::PageConfig;
use crate::consts::{
    CONTACT_FORM_ID, EMAIL_INPUT_ID, ERROR_MESSAGE_SELECTOR, FORM_MESSAGE_CLASS, FORM_MESSAGE_ERROR_CLASS,
    FORM_MESSAGE_ID, MESSAGE_INPUT_ID, NAME_INPUT_ID,
};
use crate::state::contact::{ContactFields, ContactFlow, ContactStore, Field, FormView, SubmitOutcome};
use crate::util::dom::{Listener, element_by_id, query_all};
use crate::util::navigation::WindowNavigator;
use crate::util::storage::KeyValueStore;

struct Inputs {
    name: Element,
    email: Element,
    message: Element,
}

impl Inputs {
    fn read(&self) -> ContactFields {
        ContactFields { name: value_of(&self.name), email: value_of(&self.email), message: value_of(&self.message) }
    }
}

/// Current value of an `<input>` or `<textarea>`.
fn value_of(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    el.text_content().unwrap_or_default()
}

/// Error slots next to each field plus the banner under the form.
struct PageFormView {
    doc: Document,
    banner: Option<Element>,
}

impl FormView for PageFormView {
    fn clear_messages(&self) {
        match query_all(&self.doc, ERROR_MESSAGE_SELECTOR) {
            Ok(slots) => slots.iter().for_each(|slot| slot.set_text_content(Some(""))),
            Err(err) => log::warn!("clearing field errors failed: {err}"),
        }
        if let Some(banner) = &self.banner {
            banner.set_text_content(Some(""));
            banner.set_class_name(FORM_MESSAGE_CLASS);
        }
    }

    fn show_field_error(&self, field: Field, message: &str) {
        if let Some(slot) = self.doc.get_element_by_id(field.error_element_id()) {
            slot.set_text_content(Some(message));
        }
    }

    fn show_banner_error(&self, message: &str) {
        if let Some(banner) = &self.banner {
            banner.set_text_content(Some(message));
            banner.set_class_name(FORM_MESSAGE_ERROR_CLASS);
        }
    }
}

pub struct ContactForm {
    _submit: Listener,
}

pub fn mount(
    doc: &Document,
    window: &Window,
    store: Rc<dyn KeyValueStore>,
    config: &PageConfig,
) -> Result<ContactForm, MountError> {
    let form = element_by_id(doc, CONTACT_FORM_ID)?;
    let inputs = Inputs {
        name: element_by_id(doc, NAME_INPUT_ID)?,
        email: element_by_id(doc, EMAIL_INPUT_ID)?,
        message: element_by_id(doc, MESSAGE_INPUT_ID)?,
    };
    let view = PageFormView { doc: doc.clone(), banner: doc.get_element_by_id(FORM_MESSAGE_ID) };
    let navigator = WindowNavigator::new(window.clone());
    let flow = ContactFlow::new(ContactStore::new(store, config.contact_key.clone()), config.details_page.clone());

    let submit = Listener::attach(&form, "submit", move |event| {
        event.prevent_default();
        match flow.submit(&inputs.read(), &view, &navigator) {
            Ok(SubmitOutcome::Rejected(validation)) => {
                log::debug!("contact form rejected with {} error(s)", validation.len());
            }
            Ok(SubmitOutcome::Redirected(_)) => log::info!("contact submission stored"),
            Err(err) => log::warn!("contact submission not stored: {err}"),
        }
    })?;

    Ok(ContactForm { _submit: submit })
}
