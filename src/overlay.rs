use wasm_bindgen::JsCast;
use web_sys as web;

const PANEL_ID: &str = "debug-panel";
const PANEL_STYLE: &str = "position:fixed;top:12px;right:12px;z-index:10;color:#cfe7ff;font:13px system-ui;background:rgba(10,14,24,0.8);padding:8px 12px;border-radius:6px;border:1px solid rgba(80,110,150,0.35);";

/// Build the debug panel with a colour picker for the material colour.
/// Returns the picker so the caller can listen for changes.
pub fn create_panel(document: &web::Document, initial_hex: &str) -> anyhow::Result<web::HtmlInputElement> {
    let js_err = |e: wasm_bindgen::JsValue| anyhow::anyhow!("{:?}", e);
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;

    let panel = document.create_element("div").map_err(js_err)?;
    panel.set_id(PANEL_ID);
    panel.set_attribute("style", PANEL_STYLE).map_err(js_err)?;

    let label = document.create_element("label").map_err(js_err)?;
    label.set_text_content(Some("materialColor "));

    let picker = document
        .create_element("input")
        .map_err(js_err)?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    picker.set_type("color");
    picker.set_value(initial_hex);

    label.append_child(&picker).map_err(js_err)?;
    panel.append_child(&label).map_err(js_err)?;
    body.append_child(&panel).map_err(js_err)?;
    Ok(picker)
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("style", PANEL_STYLE);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback for pages without a .hidden rule
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(PANEL_ID)
        .map(|el| el.class_list().contains("hidden"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}
