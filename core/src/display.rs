//! Compact number formatting for counters.

use crate::types::Amount;

/// `1234` -> `1.2k`, `2_500_000` -> `2.50M`, `3_000_000_000` -> `3.00B`.
/// Ties round up: `1250` -> `1.3k`.
pub fn format_number(n: Amount) -> String {
    let v = n as f64;
    if v >= 1e9 {
        format!("{:.2}B", round_half_up(v / 1e9, 100.0))
    } else if v >= 1e6 {
        format!("{:.2}M", round_half_up(v / 1e6, 100.0))
    } else if v >= 1_000.0 {
        format!("{:.1}k", round_half_up(v / 1_000.0, 10.0))
    } else {
        n.to_string()
    }
}

/// `f64::round` breaks ties away from zero; formatting alone breaks them to even.
fn round_half_up(v: f64, scale: f64) -> f64 {
    (v * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn thresholds() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1.0k");
        assert_eq!(format_number(1_260), "1.3k");
        assert_eq!(format_number(1_250), "1.3k");
        assert_eq!(format_number(2_250), "2.3k");
        assert_eq!(format_number(1_125_000), "1.13M");
        assert_eq!(format_number(2_500_000), "2.50M");
        assert_eq!(format_number(3_000_000_000), "3.00B");
    }
}
