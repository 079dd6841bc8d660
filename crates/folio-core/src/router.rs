//! Interaction router: the focus state machine.
//!
//! Every handler is synchronous and only writes plain state. Side effects
//! that reach outside the router (rearranging the layout, flashing, blurring)
//! are returned as `RouterEffect`s for the scene to apply and announce.

use crate::parallax::ParallaxInput;
use glam::Vec2;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    About,
    Contact,
}

/// What happens when a different item is clicked while one is focused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusPolicy {
    /// Move focus directly; the old item simply becomes a peer.
    #[default]
    Reassign,
    /// Defocus first (with its rearrange), then focus the new item.
    DefocusFirst,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouterEffect {
    /// Payload is whether anything is focused afterwards.
    FocusChanged(bool),
    Rearrange,
    Flash,
    BlurChanged(bool),
}

pub type Effects = SmallVec<[RouterEffect; 4]>;

#[derive(Clone, Debug, Default)]
pub struct InteractionRouter {
    focused: Option<usize>,
    modal: Option<Modal>,
    policy: FocusPolicy,
    item_count: usize,
    parallax: ParallaxInput,
}

impl InteractionRouter {
    pub fn new(item_count: usize, policy: FocusPolicy) -> Self {
        Self {
            item_count,
            policy,
            ..Default::default()
        }
    }

    #[inline]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    #[inline]
    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    #[inline]
    pub fn policy(&self) -> FocusPolicy {
        self.policy
    }

    #[inline]
    pub fn parallax(&self) -> &ParallaxInput {
        &self.parallax
    }

    pub fn parallax_mut(&mut self) -> &mut ParallaxInput {
        &mut self.parallax
    }

    pub fn item_click(&mut self, index: usize) -> Effects {
        if index >= self.item_count {
            log::warn!("[router] click on unknown item {index}");
            return Effects::new();
        }
        // A blurred scene only dismisses the modal
        if self.modal.is_some() {
            return self.close_modals();
        }
        match self.focused {
            Some(current) if current == index => self.defocus(),
            Some(_) if self.policy == FocusPolicy::DefocusFirst => {
                let mut effects = self.defocus();
                effects.extend(self.focus(index));
                effects
            }
            _ => self.focus(index),
        }
    }

    pub fn background_click(&mut self) -> Effects {
        if self.modal.is_some() {
            return self.close_modals();
        }
        if self.focused.is_some() {
            return self.defocus();
        }
        log::info!("[router] rearrange");
        smallvec![RouterEffect::Rearrange, RouterEffect::Flash]
    }

    pub fn open_modal(&mut self, modal: Modal) -> Effects {
        if self.modal == Some(modal) {
            return Effects::new();
        }
        let was_blurred = self.modal.is_some();
        self.modal = Some(modal);
        log::info!("[router] open {modal:?}");
        let mut effects: Effects = smallvec![RouterEffect::Flash];
        if !was_blurred {
            effects.push(RouterEffect::BlurChanged(true));
        }
        effects
    }

    pub fn close_modals(&mut self) -> Effects {
        match self.modal.take() {
            Some(_) => smallvec![RouterEffect::BlurChanged(false)],
            None => Effects::new(),
        }
    }

    pub fn pointer_move(&mut self, ndc: Vec2) {
        self.parallax.set_pointer(ndc);
    }

    pub fn wheel(&mut self, delta_x: f32, delta_y: f32) {
        self.parallax.add_wheel(delta_x, delta_y);
    }

    fn focus(&mut self, index: usize) -> Effects {
        log::info!("[router] focus item {index}");
        self.focused = Some(index);
        smallvec![RouterEffect::FocusChanged(true)]
    }

    /// Every defocus schedules a rearrange and a flash.
    fn defocus(&mut self) -> Effects {
        log::info!("[router] defocus");
        self.focused = None;
        smallvec![
            RouterEffect::FocusChanged(false),
            RouterEffect::Rearrange,
            RouterEffect::Flash
        ]
    }
}
