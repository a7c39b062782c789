use web_sys as web;

// Wire an 'H' key handler to toggle the debug panel
pub fn wire_panel_toggle_h(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        crate::dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
            let key = ev.key();
            if key == "h" || key == "H" {
                crate::overlay::toggle(&doc);
                ev.prevent_default();
            }
        });
    }
}
