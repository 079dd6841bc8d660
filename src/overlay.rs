use crate::constants::{
    ABOUT_MODAL_ID, BLURRED_CLASS, CANVAS_CONTAINER_ID, CAPTION_HIDE_EPSILON, CAPTION_ID,
    CONTACT_MODAL_ID, FLASH_ACTIVE_CLASS, FLASH_OVERLAY_ID, HIDDEN_CLASS,
};
use crate::dom;
use folio_core::{FrameOutput, Modal, SceneObserver};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        dom::set_class(&el, HIDDEN_CLASS, false);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        dom::set_class(&el, HIDDEN_CLASS, true);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

pub fn set_blurred(document: &web::Document, blurred: bool) {
    if let Some(el) = document.get_element_by_id(CANVAS_CONTAINER_ID) {
        dom::set_class(&el, BLURRED_CLASS, blurred);
    }
}

pub fn set_flash(document: &web::Document, active: bool) {
    if let Some(el) = document.get_element_by_id(FLASH_OVERLAY_ID) {
        dom::set_class(&el, FLASH_ACTIVE_CLASS, active);
    }
}

fn modal_id(modal: Modal) -> &'static str {
    match modal {
        Modal::About => ABOUT_MODAL_ID,
        Modal::Contact => CONTACT_MODAL_ID,
    }
}

/// Pushes scene notifications straight into the page chrome.
pub struct DomObserver {
    document: web::Document,
}

impl DomObserver {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl SceneObserver for DomObserver {
    fn focus_changed(&mut self, focused: bool) {
        log::debug!("[overlay] focus changed, focused={focused}");
    }

    fn interaction(&mut self) {
        set_flash(&self.document, true);
    }

    fn blur_changed(&mut self, blurred: bool) {
        set_blurred(&self.document, blurred);
    }
}

/// Last values written to the page, so unchanged frames touch no DOM.
#[derive(Debug, Default)]
pub struct OverlayState {
    modal: Option<Modal>,
    flash: bool,
    caption_text: String,
    caption_opacity: f32,
}

impl OverlayState {
    pub fn sync(&mut self, document: &web::Document, out: &FrameOutput<'_>, modal: Option<Modal>) {
        if modal != self.modal {
            if let Some(old) = self.modal {
                hide(document, modal_id(old));
            }
            if let Some(new) = modal {
                show(document, modal_id(new));
            }
            self.modal = modal;
        }

        if out.flash != self.flash {
            set_flash(document, out.flash);
            self.flash = out.flash;
        }

        let (text, opacity) = match &out.caption {
            Some(c) if c.opacity > CAPTION_HIDE_EPSILON => (c.text, c.opacity),
            _ => ("", 0.0),
        };
        if text != self.caption_text || (opacity - self.caption_opacity).abs() > 1e-3 {
            self.write_caption(document, text, opacity);
        }
    }

    fn write_caption(&mut self, document: &web::Document, text: &str, opacity: f32) {
        let Some(el) = document.get_element_by_id(CAPTION_ID) else {
            return;
        };
        if text != self.caption_text {
            el.set_text_content(Some(text));
            self.caption_text.clear();
            self.caption_text.push_str(text);
        }
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            _ = html
                .style()
                .set_property("opacity", &format!("{opacity:.3}"));
        }
        dom::set_class(&el, HIDDEN_CLASS, text.is_empty());
        self.caption_opacity = opacity;
    }
}
