//! Event plumbing between the platform and the scene.
//!
//! Platforms implement `EventSource`; the scene subscribes once at startup and
//! keeps the returned `Subscription` alive. Dropping it detaches the handler.

use crate::router::Modal;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer position in normalized device coordinates (-1..1, +y up).
    PointerMove { ndc: Vec2 },
    /// Raw wheel deltas in pixels.
    Wheel { delta_x: f32, delta_y: f32 },
    /// Unresolved click; the scene picks the item under it.
    Click { ndc: Vec2 },
    ItemClick(usize),
    BackgroundClick,
    OpenModal(Modal),
    CloseModals,
}

pub type EventHandler = Box<dyn FnMut(&InputEvent)>;

pub trait EventSource {
    fn subscribe(&mut self, handler: EventHandler) -> Subscription;
}

/// Scoped registration guard. Runs its release hook exactly once, on drop.
#[must_use = "dropping a Subscription detaches the handler"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn empty() -> Self {
        Self { release: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Outbound notifications consumed by the surrounding page chrome.
pub trait SceneObserver {
    fn focus_changed(&mut self, _focused: bool) {}
    fn rearrange_requested(&mut self) {}
    /// Fired whenever the flash transition is triggered.
    fn interaction(&mut self) {}
    fn blur_changed(&mut self, _blurred: bool) {}
}
