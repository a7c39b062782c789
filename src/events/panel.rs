use crate::core::color::hex_to_linear_rgb;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Queue picked colours for the frame loop, which hands them to the renderer.
pub fn wire_color_picker(picker: &web::HtmlInputElement, queued_color: Rc<RefCell<Option<[f32; 3]>>>) {
    let picker_inner = picker.clone();
    crate::dom::add_listener(picker, "input", move |_: web::Event| {
        let value = picker_inner.value();
        match hex_to_linear_rgb(&value) {
            Some(rgb) => *queued_color.borrow_mut() = Some(rgb),
            None => log::warn!("[panel] ignoring colour {:?}", value),
        }
    });
}
