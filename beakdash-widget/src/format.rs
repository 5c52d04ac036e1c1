//! Number formatting for counters.
//!
//! Output follows the `en-US` conventions dashboards are configured for: `,` groups thousands
//! and `.` separates the fraction.

/// Maximum number of fractional digits we print.
pub const MAX_DECIMALS: u8 = 20;

/// Round half away from zero to `decimals` fractional digits.
///
/// `{:.N}` alone rounds exact ties to even, so `2.5` would become `2`.
fn round_half_away(value: f64, decimals: u8) -> f64 {
    let factor = 10f64.powi(i32::from(decimals));
    let scaled = value * factor;

    // beyond 2^52 every f64 is integral already
    if !scaled.is_finite() || scaled.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }

    scaled.round() / factor
}

/// Format `value` with exactly `decimals` fractional digits and no grouping.
///
/// Ties round away from zero. Values that round to zero are printed without a sign.
///
/// ```
/// # use beakdash_widget::format::format_fixed;
/// assert_eq!(format_fixed(2.5, 0), "3");
/// assert_eq!(format_fixed(-0.125, 2), "-0.13");
/// ```
pub fn format_fixed(value: f64, decimals: u8) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let rounded = round_half_away(value, decimals);
    let decimals = usize::from(decimals);
    let text = format!("{rounded:.decimals$}");

    if let Some(unsigned) = text.strip_prefix('-') {
        if unsigned.bytes().all(|b| b == b'0' || b == b'.') {
            return unsigned.to_string();
        }
    }

    text
}

/// Insert `,` every three digits into a string of ascii digits.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Split a fixed-point rendering into sign, grouped integer part and fraction.
fn grouped_parts(value: f64, decimals: u8) -> (bool, String) {
    let fixed = format_fixed(value, decimals);
    let (negative, unsigned) = match fixed.strip_prefix('-') {
        Some(unsigned) => (true, unsigned),
        None => (false, fixed.as_str()),
    };

    let grouped = match unsigned.split_once('.') {
        Some((int, frac)) => format!("{}.{frac}", group_digits(int)),
        None => group_digits(unsigned),
    };

    (negative, grouped)
}

/// Format `value` with thousands grouping and exactly `decimals` fractional digits.
///
/// ```
/// # use beakdash_widget::format::format_grouped;
/// assert_eq!(format_grouped(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_grouped(-999.0, 0), "-999");
/// ```
pub fn format_grouped(value: f64, decimals: u8) -> String {
    match grouped_parts(value, decimals) {
        (true, grouped) => format!("-{grouped}"),
        (false, grouped) => grouped,
    }
}

/// Format `value` as US dollars, the sign goes in front of the currency symbol.
///
/// ```
/// # use beakdash_widget::format::format_currency;
/// assert_eq!(format_currency(1234.5, 2), "$1,234.50");
/// assert_eq!(format_currency(-12.0, 0), "-$12");
/// ```
pub fn format_currency(value: f64, decimals: u8) -> String {
    match grouped_parts(value, decimals) {
        (true, grouped) => format!("-${grouped}"),
        (false, grouped) => format!("${grouped}"),
    }
}

/// Format `value` as percentage, `value` already is in percent.
pub fn format_percentage(value: f64, decimals: u8) -> String {
    format!("{}%", format_fixed(value, decimals))
}
