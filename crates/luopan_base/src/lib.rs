//! Feng-shui compass and annual-chart calculations.
//!
//! This crate provides:
//! - The 24 mountains of the luopan and heading resolution
//! - Annual flying-star (Lo Shu) center star, grid and chart assembly
//! - The nine-star catalog
//! - Zodiac signs, Tai Sui conflicts and affected birth years
//!
//! Every operation is a pure function of its inputs over static tables.

pub mod birth_year;
pub mod direction;
pub mod error;
pub mod flying_star;
pub mod mountain;
pub mod star;
pub mod tai_sui;
pub mod util;
pub mod zodiac;

pub use birth_year::{
    BirthYearConfig, DEFAULT_LOOKBACK_YEARS, affected_birth_years, affected_birth_years_with,
    latest_year_of,
};
pub use direction::{ALL_DIRECTIONS, Direction, Element};
pub use error::LuopanError;
pub use flying_star::{
    AnnualChart, FlyingStarGrid, GRID_LAYOUT, GridCell, GridOrientation, LO_SHU_PATH,
    annual_chart, center_star, flying_star_grid, grid_orientation,
};
pub use mountain::{
    MOUNTAINS, Mountain, MountainInfo, mountain_by_name, mountains_in, resolve_mountain,
};
pub use star::{ALL_STARS, Recommendation, RemedyKind, StarInfo, star_info};
pub use tai_sui::{
    CONFLICT_ORDER, Conflict, ConflictKind, TaiSuiEntry, TaiSuiReport, TaiSuiResult,
    break_partner, clash_partner, harm_partner, punish_target, tai_sui, tai_sui_report,
};
pub use util::normalize_360;
pub use zodiac::{ALL_ZODIAC_SIGNS, ZodiacSign, zodiac_from_year, zodiac_index};
