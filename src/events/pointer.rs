use super::{emit, Dispatch, Listener};
use crate::input;
use folio_core::InputEvent;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn wire(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    dispatch: &Dispatch,
) -> Vec<Listener> {
    [
        wire_pointermove(window, canvas, dispatch),
        wire_click(canvas, dispatch),
        wire_wheel(window, dispatch),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn canvas_ndc(canvas: &web::HtmlCanvasElement, ev: &web::MouseEvent) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_ndc(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}

// Window-level so parallax keeps tracking over the page chrome
fn wire_pointermove(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    dispatch: &Dispatch,
) -> Option<Listener> {
    let canvas = canvas.clone();
    let dispatch = dispatch.clone();
    Listener::attach(window, "pointermove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            let ndc = canvas_ndc(&canvas, ev);
            emit(&dispatch, InputEvent::PointerMove { ndc });
        }
    })
}

fn wire_click(canvas: &web::HtmlCanvasElement, dispatch: &Dispatch) -> Option<Listener> {
    let canvas_for_ndc = canvas.clone();
    let dispatch = dispatch.clone();
    Listener::attach(canvas, "click", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let ndc = canvas_ndc(&canvas_for_ndc, ev);
            log::debug!("[pointer] click at ({:.2},{:.2})", ndc.x, ndc.y);
            emit(&dispatch, InputEvent::Click { ndc });
        }
    })
}

fn wire_wheel(window: &web::Window, dispatch: &Dispatch) -> Option<Listener> {
    let page_px = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0) as f32;
    let dispatch = dispatch.clone();
    Listener::attach(window, "wheel", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::WheelEvent>() {
            let mode = ev.delta_mode();
            emit(
                &dispatch,
                InputEvent::Wheel {
                    delta_x: input::wheel_delta_px(ev.delta_x() as f32, mode, page_px),
                    delta_y: input::wheel_delta_px(ev.delta_y() as f32, mode, page_px),
                },
            );
        }
    })
}
