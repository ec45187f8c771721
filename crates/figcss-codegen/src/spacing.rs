//! Spacing custom properties and margin/padding utility classes.

use figcss_style::format_number;
use figcss_tokens::Space;

use crate::BreakpointBlocks;

/// Which box property a utility file targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingKind {
    Margin,
    Padding,
}

impl SpacingKind {
    /// CSS property name.
    pub fn property(self) -> &'static str {
        match self {
            SpacingKind::Margin => "margin",
            SpacingKind::Padding => "padding",
        }
    }

    /// Class name prefix: `m` or `p`.
    pub fn class_prefix(self) -> &'static str {
        match self {
            SpacingKind::Margin => "m",
            SpacingKind::Padding => "p",
        }
    }
}

/// Side variants in output order: section header, class infix, sides set.
/// An empty side means the shorthand property.
const SECTIONS: &[(&str, &str, &[&str])] = &[
    ("All", "", &[""]),
    ("X", "x", &["left", "right"]),
    ("Y", "y", &["top", "bottom"]),
    ("Top", "t", &["top"]),
    ("Right", "r", &["right"]),
    ("Bottom", "b", &["bottom"]),
    ("Left", "l", &["left"]),
];

const MARGIN_AUTO: &str = "
/* Auto */

.mx-auto {
  margin-left: auto;
  margin-right: auto;
}
";

/// `--space-<name>` declarations; values are tenths of a rem.
pub fn spacing_variables(spaces: &[Space]) -> BreakpointBlocks {
    let declaration = |indent: &str, name: &str, value: f64| {
        format!("{indent}--space-{name}: {}rem;", format_number(value / 10.0))
    };

    BreakpointBlocks {
        mobile: spaces
            .iter()
            .map(|space| declaration("  ", &space.name, space.m))
            .collect::<Vec<_>>()
            .join("\n"),
        desktop: spaces
            .iter()
            .map(|space| declaration("    ", &space.name, space.d))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Utility classes for every space and side, grouped under comment headers.
/// Margins also get `.mx-auto`.
pub fn spacing_utilities(spaces: &[Space], kind: SpacingKind) -> String {
    let sections: Vec<String> = SECTIONS
        .iter()
        .map(|(header, infix, sides)| {
            let rules: Vec<String> = spaces
                .iter()
                .map(|space| utility_rule(&space.name, kind, infix, sides))
                .collect();
            format!("/* {header} */\n\n{}", rules.join("\n"))
        })
        .collect();

    let mut css = sections.join("\n\n");
    css.push('\n');
    if kind == SpacingKind::Margin {
        css.push_str(MARGIN_AUTO);
    }
    css
}

fn utility_rule(name: &str, kind: SpacingKind, infix: &str, sides: &[&str]) -> String {
    let mut rule = format!(".{}{infix}-{name} {{\n", kind.class_prefix());
    for side in sides {
        let property = if side.is_empty() {
            kind.property().to_string()
        } else {
            format!("{}-{side}", kind.property())
        };
        rule.push_str(&format!("  {property}: var(--space-{name});\n"));
    }
    rule.push('}');
    rule
}
