//! Display formatting for animated metrics.
//!
//! Formatting is applied only when rendering; counters interpolate raw
//! `f64` values and call [`format_metric`] on each frame.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use content::metrics::MetricDatum;

/// Format `value` with `decimals` fixed places and `,` thousands grouping.
#[must_use]
pub fn format_number(value: f64, decimals: u8) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let fixed = format!("{:.*}", usize::from(decimals), value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

/// Format a counter value with the metric's precision, prefix and suffix.
#[must_use]
pub fn format_metric(value: f64, datum: &MetricDatum) -> String {
    format!("{}{}{}", datum.prefix, format_number(value, datum.decimals), datum.suffix)
}

/// Whole-euro amount with grouping, e.g. `€1,250,000`.
#[must_use]
pub fn format_eur(amount: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let value = amount as f64;
    format!("€{}", format_number(value, 0))
}
