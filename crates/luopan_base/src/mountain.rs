//! The 24 mountains of the luopan and heading resolution.
//!
//! The compass circle is split into 24 arcs of 15 deg each, three per
//! octant. Mountains are centered on multiples of 15 deg, so every arc
//! spans `center - 7.5 .. center + 7.5`. The table starts at 壬 (345 deg)
//! and runs clockwise; 子 (index 1) is the only arc crossing 0 deg.

use crate::direction::Direction;
use crate::util::normalize_360;

/// Angular width of one mountain in degrees.
pub const MOUNTAIN_SPAN_DEG: f64 = 15.0;

/// Table index of 子, the fallback mountain when no arc matches.
pub const NORTH_MOUNTAIN_INDEX: usize = 1;

/// One of the 24 compass sectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mountain {
    /// Stem, branch, or trigram glyph naming the sector.
    pub name: &'static str,
    /// Center bearing in degrees (multiple of 15).
    pub center_deg: f64,
    /// Arc start in degrees, normalized into [0, 360).
    pub start_deg: f64,
    /// Arc end in degrees. Less than `start_deg` only for the wrapping arc.
    pub end_deg: f64,
    /// Octant the mountain belongs to.
    pub direction: Direction,
    /// Name of the diametrically opposite mountain (index + 12).
    pub sitting: &'static str,
}

impl Mountain {
    /// Trigram shared by the three mountains of this octant.
    pub const fn trigram(&self) -> &'static str {
        self.direction.trigram()
    }

    /// True when the arc crosses the 0/360 boundary.
    pub fn wraps(&self) -> bool {
        self.start_deg > self.end_deg
    }

    /// Whether a normalized heading in [0, 360) falls inside this arc.
    pub fn contains(&self, normalized_deg: f64) -> bool {
        if self.wraps() {
            normalized_deg >= self.start_deg || normalized_deg < self.end_deg
        } else {
            normalized_deg >= self.start_deg && normalized_deg < self.end_deg
        }
    }
}

const fn mountain(
    name: &'static str,
    center_deg: f64,
    direction: Direction,
    sitting: &'static str,
) -> Mountain {
    let start = center_deg - MOUNTAIN_SPAN_DEG / 2.0;
    Mountain {
        name,
        center_deg,
        start_deg: if start < 0.0 { start + 360.0 } else { start },
        end_deg: center_deg + MOUNTAIN_SPAN_DEG / 2.0,
        direction,
        sitting,
    }
}

/// All 24 mountains, clockwise from 壬.
pub const MOUNTAINS: [Mountain; 24] = [
    mountain("壬", 345.0, Direction::North, "丙"),
    mountain("子", 0.0, Direction::North, "午"),
    mountain("癸", 15.0, Direction::North, "丁"),
    mountain("丑", 30.0, Direction::NorthEast, "未"),
    mountain("艮", 45.0, Direction::NorthEast, "坤"),
    mountain("寅", 60.0, Direction::NorthEast, "申"),
    mountain("甲", 75.0, Direction::East, "庚"),
    mountain("卯", 90.0, Direction::East, "酉"),
    mountain("乙", 105.0, Direction::East, "辛"),
    mountain("辰", 120.0, Direction::SouthEast, "戌"),
    mountain("巽", 135.0, Direction::SouthEast, "乾"),
    mountain("巳", 150.0, Direction::SouthEast, "亥"),
    mountain("丙", 165.0, Direction::South, "壬"),
    mountain("午", 180.0, Direction::South, "子"),
    mountain("丁", 195.0, Direction::South, "癸"),
    mountain("未", 210.0, Direction::SouthWest, "丑"),
    mountain("坤", 225.0, Direction::SouthWest, "艮"),
    mountain("申", 240.0, Direction::SouthWest, "寅"),
    mountain("庚", 255.0, Direction::West, "甲"),
    mountain("酉", 270.0, Direction::West, "卯"),
    mountain("辛", 285.0, Direction::West, "乙"),
    mountain("戌", 300.0, Direction::NorthWest, "辰"),
    mountain("乾", 315.0, Direction::NorthWest, "巽"),
    mountain("亥", 330.0, Direction::NorthWest, "巳"),
];

/// Result of resolving a compass heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountainInfo {
    /// The enclosing (facing) mountain.
    pub mountain: &'static Mountain,
    /// Index into [`MOUNTAINS`].
    pub index: u8,
    /// Heading normalized into [0, 360).
    pub heading_deg: f64,
}

impl MountainInfo {
    /// Facing mountain name.
    pub fn facing(&self) -> &'static str {
        self.mountain.name
    }

    /// Sitting (opposite) mountain name.
    pub fn sitting(&self) -> &'static str {
        self.mountain.sitting
    }

    /// Octant of the facing mountain.
    pub fn direction(&self) -> Direction {
        self.mountain.direction
    }

    /// Trigram of the facing octant.
    pub fn trigram(&self) -> &'static str {
        self.mountain.trigram()
    }
}

/// Find the mountain whose arc encloses `heading_deg`.
///
/// Any real heading is accepted and normalized into [0, 360) first. The 24
/// arcs tile the circle, so a match always exists for finite input; for
/// non-finite input the 子 mountain is returned.
pub fn resolve_mountain(heading_deg: f64) -> MountainInfo {
    let normalized = normalize_360(heading_deg);
    let index = match MOUNTAINS.iter().position(|m| m.contains(normalized)) {
        Some(i) => i,
        None => {
            log::warn!("heading {heading_deg} matched no mountain arc; falling back to 子");
            NORTH_MOUNTAIN_INDEX
        }
    };
    MountainInfo {
        mountain: &MOUNTAINS[index],
        index: index as u8,
        heading_deg: normalized,
    }
}

/// Look up a mountain by its glyph.
pub fn mountain_by_name(name: &str) -> Option<&'static Mountain> {
    MOUNTAINS.iter().find(|m| m.name == name)
}

/// The three mountains of an octant, in clockwise order. Empty for Center.
pub fn mountains_in(direction: Direction) -> Vec<&'static Mountain> {
    MOUNTAINS
        .iter()
        .filter(|m| m.direction == direction)
        .collect()
}
