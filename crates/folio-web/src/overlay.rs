use web_sys as web;

/// Fill in the reading pane and reveal it. Body text keeps its newlines via
/// `white-space: pre-line` on the `#panel-body` element.
pub fn show_panel(document: &web::Document, title: &str, body: &str) {
    if let Some(el) = document.get_element_by_id("panel-title") {
        el.set_text_content(Some(title));
    }
    if let Some(el) = document.get_element_by_id("panel-body") {
        el.set_text_content(Some(body));
    }
    if let Some(el) = document.get_element_by_id("panel-overlay") {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("panel-overlay") {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}
