//! Typography custom properties and `.text-*` classes.

use std::collections::HashSet;

use figcss_style::{ConvertedTextStyle, TokenSet};

use crate::BreakpointBlocks;

/// Value of the `font` shorthand custom property.
fn font_shorthand(style: &ConvertedTextStyle) -> String {
    format!(
        "{} {} {} / {} {}",
        style.font_style, style.font_weight, style.font_size, style.line_height, style.font_family
    )
}

fn declarations(styles: &[ConvertedTextStyle], indent: &str) -> String {
    styles
        .iter()
        .map(|style| {
            format!(
                "{indent}--font-{name}: {font};\n{indent}--letter-spacing-{name}: {spacing};",
                name = style.name,
                font = font_shorthand(style),
                spacing = style.letter_spacing,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `--font-<name>` and `--letter-spacing-<name>` declarations per breakpoint.
pub fn typography_variables(tokens: &TokenSet) -> BreakpointBlocks {
    BreakpointBlocks {
        mobile: declarations(&tokens.mobile, "  "),
        desktop: declarations(&tokens.desktop, "    "),
    }
}

/// One `.text-<name>` class per distinct style name, desktop names first.
pub fn typography_classes(tokens: &TokenSet) -> String {
    let mut seen = HashSet::new();
    tokens
        .desktop
        .iter()
        .chain(&tokens.mobile)
        .filter(|style| seen.insert(style.name.as_str()))
        .map(|style| {
            let name = &style.name;
            format!(
                ".text-{name} {{\n  font: var(--font-{name});\n  letter-spacing: var(--letter-spacing-{name});\n}}"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
