#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, FALLBACK_RNG_SEED};
use folio_core::{Scene, SceneConfig};
use instant::Instant;
use rand::RngCore;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Per-page-load seed for phases, jitter and rearrange steps.
fn entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    match rand::rngs::OsRng.try_fill_bytes(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(e) => {
            log::warn!("no entropy source ({e}), using fixed seed");
            FALLBACK_RNG_SEED
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;

    // Keep the canvas backing store at CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let registry = dom::read_media_registry(&document);
    let config = SceneConfig {
        rng_seed: entropy_seed(),
        ..SceneConfig::default()
    };
    let scene = Rc::new(RefCell::new(Scene::new(
        registry,
        dom::css_viewport(&window),
        config,
    )));
    scene
        .borrow_mut()
        .add_observer(Box::new(overlay::DomObserver::new(document.clone())));

    let mut source = events::DomEventSource::new(&window, &document, &canvas);
    let subscription = Scene::attach(&scene, &mut source);

    // The scene keeps running (and stays clickable) without a GPU
    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        gpu,
        window,
        document,
        canvas,
        overlay: overlay::OverlayState::default(),
        last_instant: Instant::now(),
        _events: subscription,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
