use crate::constants::FLASH_DURATION_SEC;

/// Bounded flash transition. Re-triggering replaces the pending expiry, so
/// overlapping triggers extend the flash instead of ending it early.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlashTimer {
    expires_at: Option<f64>,
}

impl FlashTimer {
    pub fn trigger(&mut self, now_sec: f64) {
        self.expires_at = Some(now_sec + FLASH_DURATION_SEC);
    }

    /// Clear the flash once its deadline has passed. Returns whether it is
    /// still showing.
    pub fn tick(&mut self, now_sec: f64) -> bool {
        if matches!(self.expires_at, Some(t) if now_sec >= t) {
            self.expires_at = None;
        }
        self.expires_at.is_some()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.expires_at.is_some()
    }
}
