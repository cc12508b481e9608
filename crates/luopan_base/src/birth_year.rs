//! Back-projection of birth years for a zodiac sign.

use crate::error::LuopanError;
use crate::zodiac::{ZodiacSign, zodiac_index};

/// Default number of years to look back from the reference year.
pub const DEFAULT_LOOKBACK_YEARS: u32 = 90;

/// Smallest window that always contains at least one year of every sign.
pub const MIN_LOOKBACK_YEARS: u32 = 11;

/// Largest accepted window.
pub const MAX_LOOKBACK_YEARS: u32 = 1200;

/// Window for birth-year enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearConfig {
    /// Oldest year listed is `reference_year - lookback_years`. Default: 90.
    pub lookback_years: u32,
}

impl Default for BirthYearConfig {
    fn default() -> Self {
        Self {
            lookback_years: DEFAULT_LOOKBACK_YEARS,
        }
    }
}

impl BirthYearConfig {
    /// Create a config with the given window.
    pub fn new(lookback_years: u32) -> Self {
        Self { lookback_years }
    }

    /// Reject windows too short to be guaranteed non-empty, or absurdly long.
    pub fn validate(&self) -> Result<(), LuopanError> {
        if self.lookback_years < MIN_LOOKBACK_YEARS {
            return Err(LuopanError::InvalidConfig(
                "lookback_years must be at least 11",
            ));
        }
        if self.lookback_years > MAX_LOOKBACK_YEARS {
            return Err(LuopanError::InvalidConfig(
                "lookback_years must not exceed 1200",
            ));
        }
        Ok(())
    }
}

/// Most recent year `<= reference_year` belonging to `sign`.
///
/// Widened to `i64` so years near `i32::MIN` do not overflow.
pub fn latest_year_of(sign: ZodiacSign, reference_year: i32) -> i64 {
    let back = (zodiac_index(reference_year) as i32 - sign.index() as i32).rem_euclid(12);
    i64::from(reference_year) - i64::from(back)
}

/// Birth years of `sign` within the default 90-year window, ascending.
pub fn affected_birth_years(sign: ZodiacSign, reference_year: i32) -> Vec<i32> {
    affected_birth_years_with(sign, reference_year, &BirthYearConfig::default())
}

/// Birth years of `sign` from the latest one `<= reference_year` back to
/// `reference_year - lookback_years` inclusive, ascending and 12 apart.
///
/// Empty only when the window is shorter than the gap to the latest year,
/// which [`BirthYearConfig::validate`] rules out.
pub fn affected_birth_years_with(
    sign: ZodiacSign,
    reference_year: i32,
    config: &BirthYearConfig,
) -> Vec<i32> {
    let floor = i64::from(reference_year) - i64::from(config.lookback_years);
    let latest = latest_year_of(sign, reference_year);
    let mut years: Vec<i32> = std::iter::successors(Some(latest), |y| Some(y - 12))
        .take_while(|y| *y >= floor)
        .filter_map(|y| i32::try_from(y).ok())
        .collect();
    years.reverse();
    years
}
