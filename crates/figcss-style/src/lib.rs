//! figcss style classifier
//!
//! Turns raw host text styles into CSS-ready typography tokens. Font
//! weight and family are guessed from free-text names with ordered match
//! tables; line height and letter spacing are converted to unitless and
//! `em` values relative to the font size.
//!
//! ```text
//! TextStyle → convert_style() → ConvertedTextStyle
//! ```

pub mod convert;
pub mod family;
pub mod metrics;
pub mod number;
pub mod weight;

pub use convert::{convert_style, find_text_styles, ConvertedTextStyle, TokenSet};
pub use family::classify_font_family;
pub use metrics::{classify_letter_spacing, classify_line_height};
pub use number::format_number;
pub use weight::{classify_font_style, classify_font_weight, FontStyle};
