//! Text measurement utilities.

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_grows_with_text() {
        assert!(estimate_text_width_px("Queensland", 14) > estimate_text_width_px("QLD", 14));
        assert_eq!(estimate_text_width_px("", 14), 0);
    }
}
