//! `config.css`: every custom property, mobile values at `:root` and
//! desktop overrides behind a `min-width` media query.

use figcss_style::TokenSet;
use figcss_tokens::Space;

use crate::spacing::spacing_variables;
use crate::typography::typography_variables;
use crate::BreakpointBlocks;

/// Build `config.css`. Empty sections are left out entirely; with nothing
/// to declare the file is empty.
pub fn config_file(spaces: Option<&[Space]>, tokens: Option<&TokenSet>, breakpoint: &str) -> String {
    let blocks: Vec<BreakpointBlocks> = [
        spaces.map(spacing_variables),
        tokens.map(typography_variables),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mobile = join_non_empty(blocks.iter().map(|b| b.mobile.as_str()));
    let desktop = join_non_empty(blocks.iter().map(|b| b.desktop.as_str()));

    let mut parts = Vec::new();
    if !mobile.is_empty() {
        parts.push(format!(":root {{\n{mobile}\n}}\n"));
    }
    if !desktop.is_empty() {
        parts.push(format!(
            "@media (min-width: {breakpoint}) {{\n  :root {{\n{desktop}\n  }}\n}}\n"
        ));
    }
    parts.join("\n")
}

fn join_non_empty<'a>(blocks: impl Iterator<Item = &'a str>) -> String {
    blocks
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
