//! Display formatting for wallet values.
//!
//! Pure string/number helpers shared by both front ends. No DOM, no I/O,
//! so everything here is testable without a browser. Malformed numeric
//! input is not sanitized: it propagates as `NaN`-derived text.

pub mod legacy;

/// Fixed-length unit approximations used for relative timestamps.
const TIME_UNITS: [(f64, &str); 5] = [
    (31_536_000.0, "years"),
    (2_592_000.0, "months"),
    (86_400.0, "days"),
    (3_600.0, "hours"),
    (60.0, "minutes"),
];

/// Insert `,` separators every three digits of the integer part.
///
/// The fractional part is left untouched. Non-numeric text (for example
/// `"NaN"`) passes through unchanged.
pub fn group_thousands(s: &str) -> String {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return s.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format a fiat amount: exactly 2 decimal places, grouped thousands.
pub fn format_fiat(n: f64) -> String {
    group_thousands(&format!("{n:.2}"))
}

/// Format a crypto amount: 6 significant digits, grouped thousands.
pub fn format_crypto(n: f64) -> String {
    group_thousands(&to_precision(n, 6))
}

/// Format a page-wide total: grouped, at most 3 fractional digits,
/// trailing zeros trimmed.
pub fn format_overall(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "\u{221e}" } else { "-\u{221e}" }.to_string();
    }
    let mut fixed = format!("{n:.3}");
    if fixed.contains('.') {
        while fixed.ends_with('0') {
            fixed.pop();
        }
        if fixed.ends_with('.') {
            fixed.pop();
        }
    }
    group_thousands(&fixed)
}

/// Strip `,` separators from a rendered number.
pub fn clean_number(s: &str) -> String {
    s.replace(',', "")
}

/// Parse a rendered value back into a float.
///
/// Empty (or whitespace-only) text parses as `0`, anything unparseable
/// as `NaN`.
pub fn parse_rendered(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Sum rendered per-item totals, stripping separators first.
///
/// An unparseable cell poisons the sum with `NaN`, matching how the
/// rendered page behaves when a cell holds garbage.
pub fn sum_rendered<I, S>(values: I) -> f64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| parse_rendered(&clean_number(v.as_ref())))
        .sum()
}

/// Render an elapsed duration as its largest applicable unit.
///
/// Picks the first unit whose whole count strictly exceeds 1, falling
/// through to seconds otherwise (including 0 and negative durations).
/// A count of exactly 1 therefore falls to the next smaller unit:
/// 90 000 seconds renders as `"25 hours"`, not `"1 days"`.
pub fn time_since(seconds: f64) -> String {
    for (unit_secs, name) in TIME_UNITS {
        let interval = (seconds / unit_secs).floor();
        if interval > 1.0 {
            return format!("{} {name}", interval as i64);
        }
    }
    format!("{} seconds", seconds.floor() as i64)
}

/// Format a transaction amount: 4 fixed decimal places.
pub fn format_amount(n: f64) -> String {
    format!("{n:.4}")
}

/// Round and print `n` with `precision` significant digits, mirroring the
/// browser's `Number.prototype.toPrecision`: fixed notation while the
/// decimal exponent lies in `[-6, precision)`, exponential (`1.23457e+6`)
/// outside that range.
pub(crate) fn to_precision(n: f64, precision: i32) -> String {
    if n == 0.0 {
        return format!("{:.*}", (precision - 1) as usize, 0.0);
    }
    if !n.is_finite() {
        return format!("{n}");
    }

    // Round to the requested number of significant digits first so a
    // carry (999.9995 -> 1000.00) lands in the right notation branch.
    let exp = decimal_exponent(n);
    let scale = 10f64.powi(precision - 1 - exp);
    let rounded = (n * scale).round() / scale;
    let exp = decimal_exponent(rounded);

    if exp < -6 || exp >= precision {
        let mantissa = rounded / 10f64.powi(exp);
        let sign = if exp >= 0 { "+" } else { "-" };
        format!(
            "{:.*}e{}{}",
            (precision - 1) as usize,
            mantissa,
            sign,
            exp.abs()
        )
    } else {
        let decimals = (precision - 1 - exp).max(0) as usize;
        format!("{rounded:.decimals$}")
    }
}

/// Decimal exponent of `n`, taken from the exact `{:e}` rendering.
fn decimal_exponent(n: f64) -> i32 {
    let formatted = format!("{:e}", n.abs());
    formatted
        .rsplit_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_in_integer_part() {
        assert_eq!(group_thousands("1234567.89"), "1,234,567.89");
        assert_eq!(group_thousands("100"), "100");
        assert_eq!(group_thousands("-1234.5"), "-1,234.5");
        assert_eq!(group_thousands("NaN"), "NaN");
    }

    #[test]
    fn fiat_has_two_decimals_and_separators() {
        assert_eq!(format_fiat(1234.5), "1,234.50");
        assert_eq!(format_fiat(0.0), "0.00");
        assert_eq!(format_fiat(-9876543.211), "-9,876,543.21");
    }

    #[test]
    fn fiat_propagates_nan() {
        assert_eq!(format_fiat(f64::NAN), "NaN");
    }

    #[test]
    fn crypto_keeps_six_significant_digits() {
        assert_eq!(format_crypto(0.000123456), "0.000123456");
        assert_eq!(format_crypto(1234.5), "1,234.50");
        assert_eq!(format_crypto(19.123456789), "19.1235");
    }

    #[test]
    fn crypto_switches_to_exponential_for_large_magnitudes() {
        assert_eq!(format_crypto(1234567.0), "1.23457e+6");
        assert_eq!(format_crypto(0.0000001), "1.00000e-7");
    }

    #[test]
    fn overall_total_trims_trailing_zeros() {
        assert_eq!(format_overall(1234.5), "1,234.5");
        assert_eq!(format_overall(1234.5678), "1,234.568");
        assert_eq!(format_overall(1_000_000.0), "1,000,000");
        assert_eq!(format_overall(f64::NAN), "NaN");
    }

    #[test]
    fn clean_and_parse_round_trip() {
        assert_eq!(clean_number("1,234,567.89"), "1234567.89");
        assert_eq!(parse_rendered("1234.50"), 1234.5);
        assert_eq!(parse_rendered(""), 0.0);
        assert_eq!(parse_rendered("   "), 0.0);
        assert!(parse_rendered("garbage").is_nan());
    }

    #[test]
    fn sum_is_independent_of_completion_order() {
        let forward = ["1,234.50", "765.50", "0.25"];
        let reverse = ["0.25", "765.50", "1,234.50"];
        assert_eq!(sum_rendered(forward), 2000.25);
        assert_eq!(sum_rendered(forward), sum_rendered(reverse));
    }

    #[test]
    fn sum_poisons_on_garbage_cell() {
        assert!(sum_rendered(["12.00", "oops"]).is_nan());
    }

    #[test]
    fn unit_count_of_one_falls_through() {
        // 90 000 s is 1 day and change: the day count of exactly 1 is not
        // "> 1", so the hours unit wins.
        assert_eq!(time_since(90_000.0), "25 hours");
        assert_eq!(time_since(200_000.0), "2 days");
    }

    #[test]
    fn seconds_fallback_covers_zero_and_negative() {
        assert_eq!(time_since(0.0), "0 seconds");
        assert_eq!(time_since(-5.0), "-5 seconds");
        assert_eq!(time_since(119.0), "119 seconds");
        assert_eq!(time_since(120.0), "2 minutes");
    }

    #[test]
    fn larger_units() {
        assert_eq!(time_since(63_072_000.0), "2 years");
        assert_eq!(time_since(5_184_000.0), "2 months");
    }

    #[test]
    fn amounts_have_four_decimals() {
        assert_eq!(format_amount(0.5), "0.5000");
        assert_eq!(format_amount(12.123456), "12.1235");
    }
}
