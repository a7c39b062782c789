use crate::core::{AnimationState, Clock};
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<AnimationState>>,
    pub clock: Clock,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState,
    pub queued_color: Rc<RefCell<Option<[f32; 3]>>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let elapsed = self.clock.elapsed_seconds();

        let (view, proj, models) = {
            let mut state = self.state.borrow_mut();
            let step = state.advance(elapsed);
            if step.tweens_finished > 0 {
                log::debug!("[frame] {} tween(s) finished", step.tweens_finished);
            }
            (
                state.view_matrix(),
                state.projection_matrix(),
                state.model_matrices(),
            )
        };

        if let Some(rgb) = self.queued_color.borrow_mut().take() {
            self.gpu.set_material_color(rgb);
        }

        let g = &mut self.gpu;
        g.set_camera(view, proj);
        g.set_object_transforms(&models);
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        match g.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[frame] surface lost, reconfiguring");
                g.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

/// Cancels the frame loop. Clones share the same flag.
#[derive(Clone, Default)]
pub struct LoopHandle {
    stopped: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        if self.stopped.replace(true) {
            return;
        }
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        log::info!("[frame] loop stopped");
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }

    fn schedule(&self, callback: &Closure<dyn FnMut()>) {
        if self.is_stopped() {
            return;
        }
        if let Some(w) = web::window() {
            match w.request_animation_frame(callback.as_ref().unchecked_ref()) {
                Ok(id) => self.pending.set(Some(id)),
                Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
            }
        }
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until the returned handle is
/// stopped.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let handle = LoopHandle::default();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_tick.pending.set(None);
        if handle_tick.is_stopped() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            handle_tick.schedule(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        handle.schedule(cb);
    }
    handle
}
