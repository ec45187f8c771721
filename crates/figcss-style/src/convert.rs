//! Text style conversion and the typography token set.

use figcss_tokens::lookup::partition_text_styles;
use figcss_tokens::{Settings, TextStyle, TokenSource};

use crate::family::classify_font_family;
use crate::metrics::{classify_letter_spacing, classify_line_height};
use crate::number::format_number;
use crate::weight::{classify_font_style, classify_font_weight, FontStyle};

/// A text style reduced to the values a CSS `font` shorthand needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedTextStyle {
    pub name: String,
    pub font_style: FontStyle,
    pub font_weight: u16,
    pub font_size: String,
    pub line_height: String,
    pub font_family: String,
    pub letter_spacing: String,
}

/// Converted text styles per breakpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenSet {
    pub mobile: Vec<ConvertedTextStyle>,
    pub desktop: Vec<ConvertedTextStyle>,
}

/// Convert a host text style. `prefix` is removed from the front of the
/// name, then everything but ASCII letters, digits, `-` and `_` is dropped.
///
/// Font sizes are tenths of a rem: `16` becomes `1.6rem`.
pub fn convert_style(style: &TextStyle, prefix: &str) -> ConvertedTextStyle {
    let stripped = style.name.strip_prefix(prefix).unwrap_or(&style.name);
    let name = stripped
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();

    ConvertedTextStyle {
        name,
        font_style: classify_font_style(&style.font_name.style),
        font_weight: classify_font_weight(&style.font_name.style),
        font_size: format!("{}rem", format_number(style.font_size / 10.0)),
        line_height: classify_line_height(&style.line_height, style.font_size),
        font_family: classify_font_family(&style.font_name.family),
        letter_spacing: classify_letter_spacing(&style.letter_spacing, style.font_size),
    }
}

/// Collect and convert the breakpoint-prefixed text styles.
///
/// Returns `None` when neither breakpoint has a style, so "no typography"
/// can be told apart from a configured but lopsided set.
pub fn find_text_styles(source: &dyn TokenSource, settings: &Settings) -> Option<TokenSet> {
    let groups = partition_text_styles(source, settings);
    if groups.mobile.is_empty() && groups.desktop.is_empty() {
        return None;
    }

    let mobile_prefix = settings.mobile_style_prefix();
    let desktop_prefix = settings.desktop_style_prefix();
    let tokens = TokenSet {
        mobile: groups
            .mobile
            .iter()
            .map(|style| convert_style(style, &mobile_prefix))
            .collect(),
        desktop: groups
            .desktop
            .iter()
            .map(|style| convert_style(style, &desktop_prefix))
            .collect(),
    };
    tracing::debug!(
        mobile = tokens.mobile.len(),
        desktop = tokens.desktop.len(),
        "converted text styles"
    );
    Some(tokens)
}
