//! Shared modular-arithmetic helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// Works for negative and multi-turn inputs: `-10 -> 350`, `730 -> 10`.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-17 % 360 + 360 rounds to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Non-negative index of `value` in a cycle of length `n`.
pub const fn cycle_index(value: i32, n: i32) -> usize {
    value.rem_euclid(n) as usize
}

/// Wrap any integer into the 1..=9 star range.
///
/// Equivalent to repeatedly adding or subtracting 9 until the value lies
/// in [1, 9].
pub const fn wrap_star(value: i32) -> u8 {
    ((value - 1).rem_euclid(9) + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_large_negative() {
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let r = normalize_360(-1e-17);
        assert!((0.0..360.0).contains(&r));
    }

    #[test]
    fn cycle_index_negative() {
        assert_eq!(cycle_index(-1, 12), 11);
        assert_eq!(cycle_index(-12, 12), 0);
        assert_eq!(cycle_index(25, 12), 1);
    }

    #[test]
    fn wrap_star_range() {
        assert_eq!(wrap_star(0), 9);
        assert_eq!(wrap_star(9), 9);
        assert_eq!(wrap_star(10), 1);
        assert_eq!(wrap_star(17), 8);
        assert_eq!(wrap_star(-8), 1);
        for v in -40..40 {
            assert!((1..=9).contains(&wrap_star(v)));
        }
    }
}
