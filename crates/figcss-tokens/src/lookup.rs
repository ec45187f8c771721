//! Lookups against a [`TokenSource`].
//!
//! None of these fail: a missing collection, mode or token is an empty
//! result, and the caller decides what to report.

use std::collections::HashSet;

use crate::host::TextStyle;
use crate::settings::Settings;
use crate::source::TokenSource;

/// The spacing collection and its breakpoint modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenContext {
    pub collection_id: String,
    pub desktop_mode_id: Option<String>,
    pub mobile_mode_id: Option<String>,
}

/// A spacing token. `d` and `m` are the desktop and mobile values in tenths
/// of a rem, truncated to whole numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Space {
    pub name: String,
    pub d: f64,
    pub m: f64,
}

/// A prefixed variable that did not become a [`Space`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceSkip {
    /// Its stripped name was already taken by an earlier variable.
    Duplicate { name: String, variable: String },
    /// It holds no number for one of the two modes.
    MissingValue { variable: String, mode: String },
}

/// Result of [`find_space_variables`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpaceLookup {
    pub spaces: Vec<Space>,
    pub skipped: Vec<SpaceSkip>,
}

/// Text styles split by breakpoint prefix, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleGroups<'a> {
    pub mobile: Vec<&'a TextStyle>,
    pub desktop: Vec<&'a TextStyle>,
}

/// Find the configured collection and the ids of its desktop and mobile modes.
pub fn find_screen_context(source: &dyn TokenSource, settings: &Settings) -> Option<ScreenContext> {
    let collection = source
        .variable_collections()
        .iter()
        .find(|c| c.name == settings.collection_name)?;

    let context = ScreenContext {
        collection_id: collection.id.clone(),
        desktop_mode_id: collection.mode_id(&settings.desktop_mode).map(str::to_owned),
        mobile_mode_id: collection.mode_id(&settings.mobile_mode).map(str::to_owned),
    };
    tracing::debug!(
        collection = %context.collection_id,
        desktop = ?context.desktop_mode_id,
        mobile = ?context.mobile_mode_id,
        "found \"{}\" collection",
        settings.collection_name
    );
    Some(context)
}

/// Collect the prefixed numeric variables of a collection as spacing tokens.
///
/// Values are truncated toward zero. The first variable to claim a stripped
/// name keeps it; later ones are reported in [`SpaceLookup::skipped`].
pub fn find_space_variables(
    source: &dyn TokenSource,
    settings: &Settings,
    collection_id: &str,
    desktop_mode_id: &str,
    mobile_mode_id: &str,
) -> SpaceLookup {
    let mut lookup = SpaceLookup::default();
    let mut seen = HashSet::new();

    for var in source.float_variables() {
        if var.variable_collection_id != collection_id {
            continue;
        }
        let Some(name) = var.name.strip_prefix(settings.space_prefix.as_str()) else {
            continue;
        };

        let d = var.number_for(desktop_mode_id);
        let m = var.number_for(mobile_mode_id);
        let (d, m) = match (d, m) {
            (Some(d), Some(m)) => (d, m),
            (None, _) => {
                lookup.skipped.push(SpaceSkip::MissingValue {
                    variable: var.name.clone(),
                    mode: settings.desktop_mode.clone(),
                });
                continue;
            }
            (_, None) => {
                lookup.skipped.push(SpaceSkip::MissingValue {
                    variable: var.name.clone(),
                    mode: settings.mobile_mode.clone(),
                });
                continue;
            }
        };

        if !seen.insert(name.to_owned()) {
            lookup.skipped.push(SpaceSkip::Duplicate {
                name: name.to_owned(),
                variable: var.name.clone(),
            });
            continue;
        }

        lookup.spaces.push(Space {
            name: name.to_owned(),
            d: d.trunc(),
            m: m.trunc(),
        });
    }

    tracing::debug!(
        spaces = lookup.spaces.len(),
        skipped = lookup.skipped.len(),
        "collected spacing variables"
    );
    lookup
}

/// Split text styles into mobile and desktop groups by name prefix.
/// Styles carrying neither prefix are left out.
pub fn partition_text_styles<'a>(
    source: &'a dyn TokenSource,
    settings: &Settings,
) -> StyleGroups<'a> {
    let mobile_prefix = settings.mobile_style_prefix();
    let desktop_prefix = settings.desktop_style_prefix();

    let mut groups = StyleGroups::default();
    for style in source.text_styles() {
        if style.name.starts_with(&mobile_prefix) {
            groups.mobile.push(style);
        }
        if style.name.starts_with(&desktop_prefix) {
            groups.desktop.push(style);
        }
    }
    groups
}
