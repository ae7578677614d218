//! Footer copyright year.

use web_sys::Document;

use crate::components::MountError;
use crate::consts::CURRENT_YEAR_ID;
use crate::util::dom::element_by_id;

pub fn mount(doc: &Document) -> Result<u32, MountError> {
    let el = element_by_id(doc, CURRENT_YEAR_ID)?;
    let year = js_sys::Date::new_0().get_full_year();
    el.set_text_content(Some(&year.to_string()));
    Ok(year)
}
