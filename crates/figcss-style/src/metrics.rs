//! Line height and letter spacing, made relative to the font size.

use figcss_tokens::{Metric, MetricUnit};

use crate::number::{format_number, round_half_up};

/// Unitless CSS `line-height`.
///
/// Percentages keep four decimals, pixel values three. Anything else
/// (including a pixel value against a zero font size) is `normal`.
pub fn classify_line_height(metric: &Metric, font_size: f64) -> String {
    let ratio = match metric.unit {
        MetricUnit::Percent => round_half_up(metric.value * 100.0) / 10_000.0,
        MetricUnit::Pixels => round_half_up(metric.value / font_size * 1000.0) / 1000.0,
        MetricUnit::Auto => return "normal".into(),
    };
    if ratio.is_finite() {
        format_number(ratio)
    } else {
        "normal".into()
    }
}

/// CSS `letter-spacing` in `em`.
///
/// Percentages keep four decimals, pixel values two. Anything else is `0em`.
pub fn classify_letter_spacing(metric: &Metric, font_size: f64) -> String {
    let em = match metric.unit {
        MetricUnit::Percent => round_half_up(metric.value * 100.0) / 10_000.0,
        MetricUnit::Pixels => round_half_up(metric.value / font_size * 100.0) / 100.0,
        MetricUnit::Auto => 0.0,
    };
    if em.is_finite() {
        format!("{}em", format_number(em))
    } else {
        "0em".into()
    }
}
