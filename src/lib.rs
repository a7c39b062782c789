#![cfg(target_arch = "wasm32")]
use crate::core::color::hex_to_linear_rgb;
use crate::core::scene::{particle_half_extent, scatter_particles};
use crate::core::{AnimationState, Clock, SceneConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

const CANVAS_SELECTOR: &str = "canvas.webgl";

thread_local! {
    static LOOP: RefCell<Option<frame::LoopHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-scene starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the animation loop. Rendering does not resume afterwards.
#[wasm_bindgen]
pub fn shutdown() {
    LOOP.with(|l| {
        if let Some(handle) = l.borrow_mut().take() {
            handle.stop();
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document, CANVAS_SELECTOR)?;

    // Canvas internal pixel size follows CSS size * min(devicePixelRatio, 2)
    dom::sync_canvas_backing_size(&canvas);

    let config = SceneConfig::default();
    let viewport =
        dom::viewport_size(&window).ok_or_else(|| anyhow::anyhow!("no viewport size"))?;
    let material_rgb = hex_to_linear_rgb(config.material_color)
        .ok_or_else(|| anyhow::anyhow!("bad material colour {}", config.material_color))?;

    let mut rng = StdRng::from_entropy();
    let particles = scatter_particles(&mut rng, &config);
    let state = AnimationState::new(config.clone(), viewport, dom::scroll_y(&window));
    let shapes: Vec<_> = state.objects.iter().map(|o| o.shape).collect();

    // Nothing is wired until the renderer exists, so a failure here leaves no
    // half-initialised listeners behind.
    let gpu = render::GpuState::new(
        &canvas,
        render::SceneSetup {
            shapes: &shapes,
            particles: &particles,
            particle_half_extent: particle_half_extent(&config),
            material_rgb,
        },
    )
    .await?;
    log::info!(
        "[scene] objects={} particles={} viewport={}x{}",
        shapes.len(),
        particles.len(),
        viewport.width,
        viewport.height
    );

    let state = Rc::new(RefCell::new(state));
    let queued_color: Rc<RefCell<Option<[f32; 3]>>> = Rc::new(RefCell::new(None));

    match overlay::create_panel(&document, config.material_color) {
        Ok(picker) => events::wire_color_picker(&picker, queued_color.clone()),
        Err(e) => log::warn!("[panel] debug panel unavailable: {:?}", e),
    }
    events::wire_panel_toggle_h(&document);

    let clock = Clock::start();
    events::wire_window_handlers(events::WindowWiring {
        canvas: canvas.clone(),
        state: state.clone(),
        clock,
    });
    events::wire_pointer_move(state.clone(), clock);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        clock,
        canvas,
        gpu,
        queued_color,
    }));
    let handle = frame::start_loop(frame_ctx);
    events::wire_pagehide(handle.clone());
    LOOP.with(|l| *l.borrow_mut() = Some(handle));
    Ok(())
}
