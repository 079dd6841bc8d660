use crate::constants::MEDIA_DATA_ID;
use crate::input;
use folio_core::{default_registry, MediaRegistry, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{id} has unexpected type: {:?}", e))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = input::backing_size(rect.width(), rect.height(), w.device_pixel_ratio());
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}

/// Classify the window's CSS size.
pub fn css_viewport(window: &web::Window) -> Viewport {
    let w = window.inner_width().ok().and_then(|v| v.as_f64());
    let h = window.inner_height().ok().and_then(|v| v.as_f64());
    match (w, h) {
        (Some(w), Some(h)) => Viewport::from_css_size(w as f32, h as f32),
        _ => Viewport::default(),
    }
}

/// Registry from the page's embedded JSON, or the built-in one.
pub fn read_media_registry(document: &web::Document) -> MediaRegistry {
    let Some(text) = document
        .get_element_by_id(MEDIA_DATA_ID)
        .and_then(|el| el.text_content())
    else {
        log::info!("[dom] no #{MEDIA_DATA_ID}, using built-in media");
        return default_registry();
    };
    match MediaRegistry::from_json(&text) {
        Ok(registry) if !registry.is_empty() => {
            log::info!("[dom] loaded {} media items", registry.len());
            registry
        }
        Ok(_) => {
            log::warn!("[dom] #{MEDIA_DATA_ID} is empty, using built-in media");
            default_registry()
        }
        Err(e) => {
            log::warn!("[dom] bad #{MEDIA_DATA_ID}: {e}");
            default_registry()
        }
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}
