/// Scroll offset past which the header switches to its "scrolled" look.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
/// Hero visual moves at this fraction of the scroll speed.
pub const PARALLAX_FACTOR: f64 = 0.3;
/// Gap between consecutive service cards fading in.
pub const CARD_STAGGER_MS: u32 = 150;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("transform: translateY({}px);", scroll_y * PARALLAX_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
    }

    #[test]
    fn parallax_moves_slower_than_the_page() {
        assert_eq!(parallax_transform(0.0), "transform: translateY(0px);");
        assert_eq!(parallax_transform(200.0), "transform: translateY(60px);");
    }
}
