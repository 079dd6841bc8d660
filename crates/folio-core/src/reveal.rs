use crate::constants::REVEAL_CHAR_INTERVAL_SEC;

/// Typewriter reveal of the focused item's caption.
///
/// The visible prefix is always sliced from the full text by character
/// count, so a long frame skips ahead instead of scrambling.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextReveal {
    text: String,
    char_count: usize,
    elapsed_sec: f32,
}

impl TextReveal {
    /// Restart from an empty prefix with new text.
    pub fn start(&mut self, text: String) {
        self.char_count = text.chars().count();
        self.text = text;
        self.elapsed_sec = 0.0;
    }

    /// Hide immediately.
    pub fn clear(&mut self) {
        self.text.clear();
        self.char_count = 0;
        self.elapsed_sec = 0.0;
    }

    pub fn advance(&mut self, dt_sec: f32) {
        if !self.is_complete() {
            self.elapsed_sec += dt_sec.max(0.0);
        }
    }

    pub fn shown_chars(&self) -> usize {
        let n = (self.elapsed_sec / REVEAL_CHAR_INTERVAL_SEC).floor() as usize;
        n.min(self.char_count)
    }

    pub fn is_complete(&self) -> bool {
        self.shown_chars() >= self.char_count
    }

    pub fn visible(&self) -> &str {
        let n = self.shown_chars();
        match self.text.char_indices().nth(n) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_char_per_interval() {
        let mut r = TextReveal::default();
        r.start("Città\nok".to_string());
        assert_eq!(r.visible(), "");
        r.advance(REVEAL_CHAR_INTERVAL_SEC * 5.5);
        assert_eq!(r.visible(), "Città");
        r.advance(1.0);
        assert_eq!(r.visible(), "Città\nok");
        assert!(r.is_complete());
    }

    #[test]
    fn restart_and_clear() {
        let mut r = TextReveal::default();
        r.start("abc".to_string());
        r.advance(1.0);
        r.start("xyz".to_string());
        assert_eq!(r.visible(), "");
        r.advance(1.0);
        r.clear();
        assert_eq!(r.visible(), "");
        assert!(r.is_complete());
    }
}
