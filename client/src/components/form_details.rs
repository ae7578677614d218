//! Details page: shows the last contact submission read from storage.

use std::rc::Rc;

use web_sys::Document;

use crate::components::MountError;
use crate::config::PageConfig;
use crate::state::contact::{ContactStore, Field};
use crate::util::dom::element_by_id;
use crate::util::storage::KeyValueStore;

/// Fill the detail slots. Returns whether a stored submission was found;
/// without one (or with an unreadable one) the slots are left blank.
pub fn mount(doc: &Document, store: Rc<dyn KeyValueStore>, config: &PageConfig) -> Result<bool, MountError> {
    let slots = Field::ALL
        .iter()
        .map(|field| element_by_id(doc, field.detail_element_id()).map(|slot| (*field, slot)))
        .collect::<Result<Vec<_>, _>>()?;

    let record = match ContactStore::new(store, config.contact_key.clone()).load() {
        Ok(record) => record,
        Err(err) => {
            log::warn!("stored contact submission unreadable: {err}");
            None
        }
    };

    for (field, slot) in &slots {
        let value = record.as_ref().map_or("", |record| record.value(*field));
        slot.set_text_content(Some(value));
    }
    Ok(record.is_some())
}
