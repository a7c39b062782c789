use crate::core::lifecycle::PageHide;
use crate::core::{AnimationState, Clock, HostEvent};
use crate::dom;
use crate::frame::LoopHandle;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct WindowWiring {
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<AnimationState>>,
    pub clock: Clock,
}

pub fn wire_window_handlers(w: WindowWiring) {
    wire_resize(&w);
    wire_scroll(&w);
}

fn wire_resize(w: &WindowWiring) {
    let w = w.clone();
    let Some(wnd) = web::window() else {
        return;
    };
    let wnd_inner = wnd.clone();
    dom::add_listener(&wnd, "resize", move |_: web::Event| {
        let Some(vp) = dom::viewport_size(&wnd_inner) else {
            return;
        };
        w.state.borrow_mut().handle_event(
            HostEvent::Resize {
                width: vp.width,
                height: vp.height,
            },
            w.clock.elapsed_seconds(),
        );
        // The renderer picks the new backing size up on its next frame.
        dom::sync_canvas_backing_size(&w.canvas);
    });
}

fn wire_scroll(w: &WindowWiring) {
    let w = w.clone();
    let Some(wnd) = web::window() else {
        return;
    };
    let wnd_inner = wnd.clone();
    dom::add_listener(&wnd, "scroll", move |_: web::Event| {
        let y = dom::scroll_y(&wnd_inner);
        let change = w
            .state
            .borrow_mut()
            .handle_event(HostEvent::Scroll { y }, w.clock.elapsed_seconds());
        if let Some(c) = change {
            log::info!("[scroll] section {} -> {} (y={:.0})", c.from, c.to, y);
        }
    });
}

/// Stop the frame loop when the page is torn down. A page kept in the
/// back/forward cache only pauses; the browser resumes its pending frame.
pub fn wire_pagehide(handle: LoopHandle) {
    let Some(wnd) = web::window() else {
        return;
    };
    dom::add_listener(&wnd, "pagehide", move |ev: web::PageTransitionEvent| {
        match PageHide::from_persisted(ev.persisted()) {
            PageHide::Suspend => log::info!("[frame] page cached, loop paused"),
            PageHide::Teardown => handle.stop(),
        }
    });
}
