use crate::core::{AnimationState, Clock, HostEvent};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Cursor parallax input. Client coordinates are normalised against the
/// viewport held in the animation state.
pub fn wire_pointer_move(state: Rc<RefCell<AnimationState>>, clock: Clock) {
    let Some(wnd) = web::window() else {
        return;
    };
    crate::dom::add_listener(&wnd, "mousemove", move |ev: web::MouseEvent| {
        let event = HostEvent::PointerMove {
            client_x: ev.client_x() as f32,
            client_y: ev.client_y() as f32,
        };
        state.borrow_mut().handle_event(event, clock.elapsed_seconds());
    });
}
