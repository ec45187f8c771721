//! figcss CSS generator
//!
//! Turns the spacing variables and text styles of a design document into
//! CSS files. Missing pieces become warnings; whatever can still be
//! generated is.
//!
//! ```text
//! TokenSource → generate() → Output { files, warnings }
//!
//! config.css      custom properties (mobile at :root, desktop in @media)
//! paddings.css    .p-*, .px-*, .py-*, .pt-*, ... utilities
//! margins.css     .m-*, .mx-*, ... utilities and .mx-auto
//! typography.css  .text-* classes
//! main.css        @import of all of the above
//! ```

pub mod config;
pub mod encode;
pub mod page;
pub mod spacing;
pub mod typography;
pub mod warning;

use figcss_style::{find_text_styles, TokenSet};
use figcss_tokens::lookup::{find_screen_context, find_space_variables};
use figcss_tokens::{Settings, Space, TokenSource};

pub use page::{render_download_page, DownloadPage};
pub use spacing::SpacingKind;
pub use warning::Warning;

pub const CONFIG_FILE: &str = "config.css";
pub const PADDINGS_FILE: &str = "paddings.css";
pub const MARGINS_FILE: &str = "margins.css";
pub const TYPOGRAPHY_FILE: &str = "typography.css";
pub const MAIN_FILE: &str = "main.css";

/// Declarations split by breakpoint, already indented for their block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakpointBlocks {
    pub mobile: String,
    pub desktop: String,
}

/// A generated stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssFile {
    pub file_name: String,
    pub css: String,
}

impl CssFile {
    pub fn new(file_name: impl Into<String>, css: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            css: css.into(),
        }
    }

    /// The stylesheet percent-encoded for a download link.
    pub fn encoded(&self) -> String {
        encode::percent_encode(&self.css)
    }

    /// `data:` URI that downloads this stylesheet.
    pub fn data_uri(&self) -> String {
        encode::data_uri(&self.css)
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub files: Vec<CssFile>,
    pub warnings: Vec<Warning>,
}

impl Output {
    pub fn file(&self, file_name: &str) -> Option<&CssFile> {
        self.files.iter().find(|f| f.file_name == file_name)
    }
}

/// `main.css`: one `@import` per file, in order.
pub fn aggregator_file(files: &[CssFile]) -> String {
    files
        .iter()
        .map(|file| format!("@import '{}';", file.file_name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run every lookup and generator against a token source.
pub fn generate(source: &dyn TokenSource, settings: &Settings) -> Output {
    let mut warnings = Vec::new();

    let spaces = collect_spaces(source, settings, &mut warnings);
    let tokens = collect_text_styles(source, settings, &mut warnings);

    let mut files = vec![CssFile::new(
        CONFIG_FILE,
        config::config_file(spaces.as_deref(), tokens.as_ref(), &settings.breakpoint),
    )];
    if let Some(spaces) = &spaces {
        files.push(CssFile::new(
            PADDINGS_FILE,
            spacing::spacing_utilities(spaces, SpacingKind::Padding),
        ));
        files.push(CssFile::new(
            MARGINS_FILE,
            spacing::spacing_utilities(spaces, SpacingKind::Margin),
        ));
    }
    if let Some(tokens) = &tokens {
        files.push(CssFile::new(
            TYPOGRAPHY_FILE,
            typography::typography_classes(tokens),
        ));
    }
    let main = aggregator_file(&files);
    files.push(CssFile::new(MAIN_FILE, main));

    tracing::debug!(files = files.len(), warnings = warnings.len(), "generation finished");

    Output { files, warnings }
}

fn collect_spaces(
    source: &dyn TokenSource,
    settings: &Settings,
    warnings: &mut Vec<Warning>,
) -> Option<Vec<Space>> {
    let Some(context) = find_screen_context(source, settings) else {
        warnings.push(Warning::MissingCollection {
            collection: settings.collection_name.clone(),
        });
        return None;
    };

    if context.desktop_mode_id.is_none() {
        warnings.push(Warning::MissingDesktopMode {
            collection: settings.collection_name.clone(),
            mode: settings.desktop_mode.clone(),
        });
    }
    if context.mobile_mode_id.is_none() {
        warnings.push(Warning::MissingMobileMode {
            collection: settings.collection_name.clone(),
            mode: settings.mobile_mode.clone(),
        });
    }
    let (Some(desktop), Some(mobile)) = (&context.desktop_mode_id, &context.mobile_mode_id) else {
        return None;
    };

    let lookup = find_space_variables(source, settings, &context.collection_id, desktop, mobile);
    warnings.extend(lookup.skipped.into_iter().map(Warning::from));
    if lookup.spaces.is_empty() {
        warnings.push(Warning::NoSpaceVariables {
            prefix: settings.space_prefix.clone(),
        });
        return None;
    }
    Some(lookup.spaces)
}

fn collect_text_styles(
    source: &dyn TokenSource,
    settings: &Settings,
    warnings: &mut Vec<Warning>,
) -> Option<TokenSet> {
    let Some(tokens) = find_text_styles(source, settings) else {
        warnings.push(Warning::NoTextStyles {
            desktop: settings.desktop_mode.clone(),
            mobile: settings.mobile_mode.clone(),
        });
        return None;
    };

    if tokens.desktop.is_empty() {
        warnings.push(Warning::NoDesktopTextStyles {
            desktop: settings.desktop_mode.clone(),
        });
    }
    if tokens.mobile.is_empty() {
        warnings.push(Warning::NoMobileTextStyles {
            mobile: settings.mobile_mode.clone(),
        });
    }
    if tokens.mobile.len() != tokens.desktop.len() {
        warnings.push(Warning::TextStyleCountMismatch {
            mobile: tokens.mobile.len(),
            desktop: tokens.desktop.len(),
        });
    }
    Some(tokens)
}
