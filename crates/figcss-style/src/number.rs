//! Number formatting shared by the classifiers and the CSS generator.

/// Largest magnitude below which every whole `f64` fits an `i64` exactly.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

/// Format a number, removing `.0` for integers.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < EXACT_INTEGER_LIMIT {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Round to the nearest integer, ties toward positive infinity.
///
/// `f64::round` sends ties away from zero, which turns `-2.5` into `-3`
/// where design tools report `-2`.
pub fn round_half_up(n: f64) -> f64 {
    let floor = n.floor();
    if n - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_integer() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_fraction() {
        assert_eq!(format_number(1.6), "1.6");
        assert_eq!(format_number(0.8), "0.8");
        assert_eq!(format_number(-0.02), "-0.02");
    }

    #[test]
    fn test_format_beyond_i64() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(-1e20), "-100000000000000000000");
        assert_eq!(format_number(9_007_199_254_740_991.0), "9007199254740991");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(1.4), 1.0);
    }

    #[test]
    fn test_round_just_below_half() {
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(-0.5000000000000001), -1.0);
    }

    #[test]
    fn test_round_large_integers_unchanged() {
        let odd = 4_503_599_627_370_497.0; // 2^52 + 1
        assert_eq!(round_half_up(odd), odd);
        assert_eq!(round_half_up(1e20), 1e20);
    }
}
