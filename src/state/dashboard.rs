// Dashboard tab state: the typewriter reveal for the hero one-liner.

/// Reveals a string one character per tick. Counts characters, not
/// bytes, so multi-byte text never splits mid-character.

#[derive(Debug, Default)]
pub struct Typewriter {
    revealed: usize,
}

impl Typewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one character. Returns true while still revealing.
    pub fn tick(&mut self, text: &str) -> bool {
        let total = text.chars().count();
        if self.revealed < total {
            self.revealed += 1;
            true
        } else {
            false
        }
    }

    /// The currently visible prefix.
    pub fn visible<'a>(&self, text: &'a str) -> &'a str {
        match text.char_indices().nth(self.revealed) {
            Some((idx, _)) => &text[..idx],
            None => text,
        }
    }

    pub fn done(&self, text: &str) -> bool {
        self.revealed >= text.chars().count()
    }

    /// Restart the reveal (Lab tab replay).
    pub fn reset(&mut self) {
        self.revealed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_per_tick() {
        let mut tw = Typewriter::new();
        let text = "abc";

        assert_eq!(tw.visible(text), "");
        assert!(tw.tick(text));
        assert_eq!(tw.visible(text), "a");
        assert!(tw.tick(text));
        assert!(tw.tick(text));
        assert_eq!(tw.visible(text), "abc");
        assert!(tw.done(text));
        assert!(!tw.tick(text));
    }

    #[test]
    fn test_multibyte_boundaries() {
        let mut tw = Typewriter::new();
        let text = "héllo ✨";

        tw.tick(text);
        tw.tick(text);
        assert_eq!(tw.visible(text), "hé");

        while tw.tick(text) {}
        assert_eq!(tw.visible(text), text);
    }

    #[test]
    fn test_reset_replays() {
        let mut tw = Typewriter::new();
        let text = "hi";
        while tw.tick(text) {}
        tw.reset();
        assert_eq!(tw.visible(text), "");
    }
}
