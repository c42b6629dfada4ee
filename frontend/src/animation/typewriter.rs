/// Delay before the first character appears.
pub const START_DELAY_MS: u32 = 500;
/// Delay between characters.
pub const CHAR_INTERVAL_MS: u32 = 100;

/// Reveals `text` one character at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: &'static str,
    revealed: usize,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        Self { text, revealed: 0 }
    }

    /// Shows one more character. Returns false once everything is visible.
    pub fn advance(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.revealed += 1;
        true
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.text.chars().count()
    }

    pub fn visible(&self) -> &'static str {
        match self.text.char_indices().nth(self.revealed) {
            Some((end, _)) => &self.text[..end],
            None => self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reveals_one_char_per_step() {
        let mut tw = Typewriter::new("AI now");
        assert_eq!(tw.visible(), "");
        let mut seen = Vec::new();
        while tw.advance() {
            seen.push(tw.visible());
        }
        assert_eq!(seen, vec!["A", "AI", "AI ", "AI n", "AI no", "AI now"]);
        assert!(tw.is_done());
        assert!(!tw.advance());
        assert_eq!(tw.visible(), "AI now");
    }

    #[test]
    fn multibyte_text_is_split_on_char_boundaries() {
        let mut tw = Typewriter::new("né→");
        tw.advance();
        tw.advance();
        assert_eq!(tw.visible(), "né");
        tw.advance();
        assert_eq!(tw.visible(), "né→");
        assert!(tw.is_done());
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_done());
        assert!(!tw.advance());
    }
}
