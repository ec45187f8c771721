//! Font style and weight classification from a style label such as
//! `"Semi Bold Italic"`.

use std::fmt;

/// CSS `font-style`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontStyle::Normal => f.write_str("normal"),
            FontStyle::Italic => f.write_str("italic"),
        }
    }
}

/// Weight used when no keyword matches.
pub const DEFAULT_WEIGHT: u16 = 400;

/// Keyword ladder, checked top to bottom against the normalized label.
/// Longer keywords sit above the shorter ones they contain
/// (`extrabold` above `bold`, `semilight` above `light`).
const WEIGHT_LADDER: &[(&[&str], u16)] = &[
    (&["thin", "hairline", "100"], 100),
    (&["extralight", "ultralight", "200"], 200),
    (&["semilight", "350"], 350),
    (&["light", "300"], 300),
    (&["normal", "regular", "400"], 400),
    (&["medium", "500"], 500),
    (&["semibold", "demibold", "600"], 600),
    (&["extrabold", "ultrabold", "800"], 800),
    (&["bold", "700"], 700),
    (&["extrablack", "ultrablack", "950"], 950),
    (&["black", "heavy", "900"], 900),
];

pub fn classify_font_style(label: &str) -> FontStyle {
    if label.to_lowercase().contains("italic") {
        FontStyle::Italic
    } else {
        FontStyle::Normal
    }
}

/// Map a style label to a numeric CSS `font-weight`.
pub fn classify_font_weight(label: &str) -> u16 {
    let normalized: String = label
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase();

    WEIGHT_LADDER
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(_, weight)| *weight)
        .unwrap_or(DEFAULT_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Font style
    // =========================================================================

    #[test]
    fn test_italic() {
        assert_eq!(classify_font_style("Bold Italic"), FontStyle::Italic);
        assert_eq!(classify_font_style("ITALIC"), FontStyle::Italic);
    }

    #[test]
    fn test_not_italic() {
        assert_eq!(classify_font_style("Oblique"), FontStyle::Normal);
        assert_eq!(classify_font_style("Regular"), FontStyle::Normal);
    }

    #[test]
    fn test_font_style_display() {
        assert_eq!(FontStyle::Italic.to_string(), "italic");
        assert_eq!(FontStyle::Normal.to_string(), "normal");
    }

    // =========================================================================
    // Font weight
    // =========================================================================

    #[test]
    fn test_extra_bold_before_bold() {
        assert_eq!(classify_font_weight("Extra Bold"), 800);
        assert_eq!(classify_font_weight("UltraBold"), 800);
        assert_eq!(classify_font_weight("Bold"), 700);
    }

    #[test]
    fn test_semi_light_before_light() {
        assert_eq!(classify_font_weight("Semi-Light"), 350);
        assert_eq!(classify_font_weight("Light"), 300);
        assert_eq!(classify_font_weight("Extra Light"), 200);
    }

    #[test]
    fn test_extra_black_before_black() {
        assert_eq!(classify_font_weight("Extra Black"), 950);
        assert_eq!(classify_font_weight("Black"), 900);
        assert_eq!(classify_font_weight("Heavy"), 900);
    }

    #[test]
    fn test_common_labels() {
        assert_eq!(classify_font_weight("Thin"), 100);
        assert_eq!(classify_font_weight("Hairline"), 100);
        assert_eq!(classify_font_weight("Regular"), 400);
        assert_eq!(classify_font_weight("Medium"), 500);
        assert_eq!(classify_font_weight("Semi Bold"), 600);
        assert_eq!(classify_font_weight("DemiBold Italic"), 600);
    }

    #[test]
    fn test_numeric_labels() {
        assert_eq!(classify_font_weight("700"), 700);
        assert_eq!(classify_font_weight("Variable 350"), 350);
    }

    #[test]
    fn test_unknown_label_defaults() {
        assert_eq!(classify_font_weight("Italic"), DEFAULT_WEIGHT);
        assert_eq!(classify_font_weight(""), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_precedence_follows_ladder() {
        // "thin" is checked before "bold"
        assert_eq!(classify_font_weight("Bold Thin"), 100);
    }
}
