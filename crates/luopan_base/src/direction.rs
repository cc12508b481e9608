//! The nine palace positions and the five elements.
//!
//! Eight compass octants plus the center palace. Octant angles follow the
//! compass convention: North = 0 deg, increasing clockwise.

use std::str::FromStr;

use crate::error::LuopanError;

/// A palace of the 3x3 grid: one of the eight octants, or the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    Center,
}

/// All nine positions: the octants clockwise from North, then Center.
pub const ALL_DIRECTIONS: [Direction; 9] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
    Direction::Center,
];

impl Direction {
    /// Short code (`N`, `NE`, ..., `C`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
            Self::Center => "C",
        }
    }

    /// Chinese palace name (正北, 東北, ..., 中宮).
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "正北",
            Self::NorthEast => "東北",
            Self::East => "正東",
            Self::SouthEast => "東南",
            Self::South => "正南",
            Self::SouthWest => "西南",
            Self::West => "正西",
            Self::NorthWest => "西北",
            Self::Center => "中宮",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::NorthEast => "Northeast",
            Self::East => "East",
            Self::SouthEast => "Southeast",
            Self::South => "South",
            Self::SouthWest => "Southwest",
            Self::West => "West",
            Self::NorthWest => "Northwest",
            Self::Center => "Center",
        }
    }

    /// Standard compass angle in degrees. Center has no bearing and reports 0.
    pub const fn base_angle_deg(self) -> f64 {
        match self {
            Self::North | Self::Center => 0.0,
            Self::NorthEast => 45.0,
            Self::East => 90.0,
            Self::SouthEast => 135.0,
            Self::South => 180.0,
            Self::SouthWest => 225.0,
            Self::West => 270.0,
            Self::NorthWest => 315.0,
        }
    }

    /// Later-heaven trigram of the palace. Center reports 中.
    pub const fn trigram(self) -> &'static str {
        match self {
            Self::North => "坎",
            Self::NorthEast => "艮",
            Self::East => "震",
            Self::SouthEast => "巽",
            Self::South => "離",
            Self::SouthWest => "坤",
            Self::West => "兌",
            Self::NorthWest => "乾",
            Self::Center => "中",
        }
    }

    /// True for the eight compass octants.
    pub const fn is_octant(self) -> bool {
        !matches!(self, Self::Center)
    }

    /// 0-based index into [`ALL_DIRECTIONS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::North => 0,
            Self::NorthEast => 1,
            Self::East => 2,
            Self::SouthEast => 3,
            Self::South => 4,
            Self::SouthWest => 5,
            Self::West => 6,
            Self::NorthWest => 7,
            Self::Center => 8,
        }
    }
}

impl FromStr for Direction {
    type Err = LuopanError;

    /// Accepts the short code or English name, case-insensitively, or the
    /// Chinese palace name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ALL_DIRECTIONS
            .iter()
            .copied()
            .find(|d| {
                d.code().eq_ignore_ascii_case(trimmed)
                    || d.english_name().eq_ignore_ascii_case(trimmed)
                    || d.name() == trimmed
            })
            .ok_or_else(|| LuopanError::UnknownDirection(s.to_string()))
    }
}

/// The five elements (wu xing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }
}
