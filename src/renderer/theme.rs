//! Theme classes and icons

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::settings::Theme;

/// Toggle `dark-mode` on the body and swap the sun/moon icons
pub fn apply_theme(document: &Document, theme: Theme) {
    if let Some(body) = document.body() {
        let _ = body.class_list().toggle_with_force("dark-mode", theme.is_dark());
    }
    set_visible(document, "icon-sun", !theme.is_dark());
    set_visible(document, "icon-moon", theme.is_dark());
}

fn set_visible(document: &Document, id: &str, visible: bool) {
    if let Some(el) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = el
            .style()
            .set_property("display", if visible { "block" } else { "none" });
    }
}
