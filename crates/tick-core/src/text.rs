// File: crates/tick-core/src/text.rs
// Summary: Tick label text: number formatting as the host renders it, and label length measurement.

/// Format `value` the way tick labels are rendered: shortest round-trip
/// decimal, exponent form outside `[1e-6, 1e21)`, and no negative zero.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let s = format!("{value:e}");
        // Rust writes `1e21`, labels use `1e+21`
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    format!("{value}")
}

/// Character count of the rendered label for `value`.
pub fn label_len(value: f64) -> usize {
    format_value(value).chars().count()
}
