use super::{emit, Dispatch, Listener};
use crate::constants::{ABOUT_CLOSE_ID, CONTACT_CLOSE_ID, NAV_ABOUT_ID, NAV_CONTACT_ID};
use folio_core::{InputEvent, Modal};
use web_sys as web;

/// Navigation buttons: open a modal or close whichever is open.
pub(super) fn wire(document: &web::Document, dispatch: &Dispatch) -> Vec<Listener> {
    [
        (NAV_ABOUT_ID, InputEvent::OpenModal(Modal::About)),
        (NAV_CONTACT_ID, InputEvent::OpenModal(Modal::Contact)),
        (ABOUT_CLOSE_ID, InputEvent::CloseModals),
        (CONTACT_CLOSE_ID, InputEvent::CloseModals),
    ]
    .into_iter()
    .filter_map(|(id, event)| {
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("[nav] missing #{id}");
            return None;
        };
        let dispatch = dispatch.clone();
        Listener::attach(&el, "click", move |ev: web::Event| {
            // Keep the click from reaching the scene underneath
            ev.stop_propagation();
            emit(&dispatch, event);
        })
    })
    .collect()
}
