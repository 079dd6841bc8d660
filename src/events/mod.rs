//! DOM event source.
//!
//! Translates browser events into `InputEvent`s. Every listener registered
//! for a subscriber is owned by that subscriber's `Subscription` and removed
//! from its target when the subscription is dropped.

use folio_core::{EventHandler, EventSource, InputEvent, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

mod nav;
mod pointer;

pub(crate) type Dispatch = Rc<RefCell<EventHandler>>;

pub(crate) fn emit(dispatch: &Dispatch, event: InputEvent) {
    // Re-entrant dispatch would alias the scene borrow
    match dispatch.try_borrow_mut() {
        Ok(mut handler) => (*handler)(&event),
        Err(_) => log::warn!("[events] dropped re-entrant {event:?}"),
    }
}

/// A registered DOM listener.
pub(crate) struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub(crate) fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                kind,
                closure,
            }),
            Err(e) => {
                log::error!("[events] failed to listen for {kind}: {e:?}");
                None
            }
        }
    }

    fn detach(self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

pub struct DomEventSource {
    window: web::Window,
    document: web::Document,
    canvas: web::HtmlCanvasElement,
}

impl DomEventSource {
    pub fn new(
        window: &web::Window,
        document: &web::Document,
        canvas: &web::HtmlCanvasElement,
    ) -> Self {
        Self {
            window: window.clone(),
            document: document.clone(),
            canvas: canvas.clone(),
        }
    }
}

impl EventSource for DomEventSource {
    fn subscribe(&mut self, handler: EventHandler) -> Subscription {
        let dispatch: Dispatch = Rc::new(RefCell::new(handler));
        let mut listeners = pointer::wire(&self.window, &self.canvas, &dispatch);
        listeners.extend(nav::wire(&self.document, &dispatch));
        log::info!("[events] {} DOM listeners attached", listeners.len());
        Subscription::new(move || {
            for listener in listeners {
                listener.detach();
            }
        })
    }
}
