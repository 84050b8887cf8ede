//! Unit conversion shared by every report.

const BYTES_PER_GB: f64 = (1u64 << 30) as f64;

/// Round to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Bytes to gigabytes (2^30), rounded to 2 decimal places.
pub fn bytes_to_gb(bytes: u64) -> f64 {
    round_to(bytes as f64 / BYTES_PER_GB, 2)
}

/// `part / total * 100`, clamped to `[0, 100]`. A zero total gives 0.
pub fn usage_percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_bytes_to_gb() {
        assert_eq!(bytes_to_gb(16 * (1 << 30)), 16.0);
        assert_eq!(bytes_to_gb(0), 0.0);
        // 1.5 GiB + a few bytes still rounds to 1.5
        assert_eq!(bytes_to_gb(3 * (1 << 29) + 17), 1.5);
        // 1 GB decimal is 0.93 GiB
        assert_eq!(bytes_to_gb(1_000_000_000), 0.93);
    }

    #[test]
    fn percent_handles_zero_total() {
        assert_eq!(usage_percent(0, 0), 0.0);
        assert_eq!(usage_percent(42, 0), 0.0);
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(usage_percent(5, 10), 50.0);
        assert_eq!(usage_percent(20, 10), 100.0);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(2.345_678, 2), 2.35);
        assert_eq!(round_to(12.34, 1), 12.3);
    }
}
