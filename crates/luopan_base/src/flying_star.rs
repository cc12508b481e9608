//! Annual flying-star (Lo Shu) chart.
//!
//! The year's center star runs on a 9-year cycle, decreasing by one each
//! year. From the center, the remaining stars fly through the palaces along
//! the fixed Lo Shu path, each palace receiving the next number in 1..=9.
//!
//! Placement is independent of any compass heading. [`grid_orientation`]
//! only describes how a renderer should rotate the drawn grid.

use crate::direction::Direction;
use crate::star::{StarInfo, star_info};
use crate::util::wrap_star;

/// Order in which stars fly through the palaces, starting at the center.
pub const LO_SHU_PATH: [Direction; 9] = [
    Direction::Center,
    Direction::NorthWest,
    Direction::West,
    Direction::NorthEast,
    Direction::South,
    Direction::North,
    Direction::SouthWest,
    Direction::East,
    Direction::SouthEast,
];

/// Display reading order, South at the top:
///
/// ```text
/// SE  S  SW
///  E  C  W
/// NE  N  NW
/// ```
pub const GRID_LAYOUT: [[Direction; 3]; 3] = [
    [Direction::SouthEast, Direction::South, Direction::SouthWest],
    [Direction::East, Direction::Center, Direction::West],
    [Direction::NorthEast, Direction::North, Direction::NorthWest],
];

/// Bearing drawn at the top of an unrotated grid.
pub const LAYOUT_TOP_DEG: f64 = 180.0;

/// Center star of the annual chart for `year`.
///
/// `(11 - year mod 9) mod 9`, with 0 mapped to 9. The modulo is Euclidean,
/// so negative years continue the same cycle.
pub const fn center_star(year: i32) -> u8 {
    let raw = (11 - year.rem_euclid(9)) % 9;
    if raw == 0 { 9 } else { raw as u8 }
}

/// Star placement over the nine palaces.
///
/// Always a permutation of 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlyingStarGrid {
    /// Star per palace, indexed by [`Direction::index`].
    stars: [u8; 9],
}

impl FlyingStarGrid {
    /// Star number occupying `direction`.
    pub const fn star_at(&self, direction: Direction) -> u8 {
        self.stars[direction.index() as usize]
    }

    /// Star number in the center palace.
    pub const fn center(&self) -> u8 {
        self.star_at(Direction::Center)
    }

    /// Palace holding `star`. None if `star` is outside 1..=9.
    pub fn position_of(&self, star: u8) -> Option<Direction> {
        LO_SHU_PATH
            .iter()
            .copied()
            .find(|d| self.star_at(*d) == star)
    }

    /// `(direction, star)` pairs in Lo Shu path order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, u8)> + '_ {
        LO_SHU_PATH.iter().map(move |&d| (d, self.star_at(d)))
    }

    /// Star numbers arranged in [`GRID_LAYOUT`] reading order.
    pub fn rows(&self) -> [[u8; 3]; 3] {
        GRID_LAYOUT.map(|row| row.map(|d| self.star_at(d)))
    }
}

/// Distribute the nine stars starting from `center`.
///
/// `center` is wrapped into 1..=9 first, so any value yields a valid grid.
pub fn flying_star_grid(center: u8) -> FlyingStarGrid {
    let mut stars = [0u8; 9];
    for (offset, direction) in LO_SHU_PATH.iter().enumerate() {
        stars[direction.index() as usize] = wrap_star(center as i32 + offset as i32);
    }
    FlyingStarGrid { stars }
}

/// Presentation rotation for drawing the grid against a compass heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridOrientation {
    /// Rotation applied to the whole grid, degrees clockwise.
    pub rotation_deg: f64,
    /// Rotation applied to cell labels so they stay upright.
    pub label_rotation_deg: f64,
}

/// Rotation that puts the faced bearing at the top of the grid.
///
/// The unrotated layout has South on top, so the rotation is
/// `heading - 180` when aligning and zero otherwise.
pub fn grid_orientation(heading_deg: f64, align_to_heading: bool) -> GridOrientation {
    let rotation_deg = if align_to_heading {
        heading_deg - LAYOUT_TOP_DEG
    } else {
        0.0
    };
    GridOrientation {
        rotation_deg,
        label_rotation_deg: -rotation_deg,
    }
}

/// One palace of an assembled chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub direction: Direction,
    pub star: u8,
}

impl GridCell {
    /// Chinese palace name.
    pub fn direction_name(&self) -> &'static str {
        self.direction.name()
    }

    /// Standard bearing of the palace.
    pub fn base_angle_deg(&self) -> f64 {
        self.direction.base_angle_deg()
    }

    /// Catalog entry for the resident star.
    pub fn star_info(&self) -> &'static StarInfo {
        // Grid values are always 1..=9.
        &crate::star::ALL_STARS[(self.star - 1) as usize]
    }
}

/// Annual chart for one year: center star, grid, and cells in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnualChart {
    pub year: i32,
    pub center_star: u8,
    pub grid: FlyingStarGrid,
    /// Cells in [`GRID_LAYOUT`] reading order (row-major).
    pub cells: [GridCell; 9],
}

impl AnnualChart {
    /// Cell for a given palace.
    pub fn cell(&self, direction: Direction) -> GridCell {
        GridCell {
            direction,
            star: self.grid.star_at(direction),
        }
    }

    /// Palaces currently holding inauspicious stars, in layout order.
    pub fn afflicted(&self) -> impl Iterator<Item = &GridCell> {
        self.cells
            .iter()
            .filter(|c| star_info(c.star).is_some_and(|s| !s.auspicious))
    }
}

/// Assemble the annual chart for `year`.
pub fn annual_chart(year: i32) -> AnnualChart {
    let center = center_star(year);
    let grid = flying_star_grid(center);
    let mut cells = [GridCell {
        direction: Direction::Center,
        star: center,
    }; 9];
    for (i, direction) in GRID_LAYOUT.iter().flatten().enumerate() {
        cells[i] = GridCell {
            direction: *direction,
            star: grid.star_at(*direction),
        };
    }
    AnnualChart {
        year,
        center_star: center,
        grid,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_star_known_years() {
        assert_eq!(center_star(2024), 3);
        assert_eq!(center_star(2023), 4);
        assert_eq!(center_star(2025), 2);
    }

    #[test]
    fn center_star_nine_stands_for_zero() {
        // 2021 mod 9 = 5, 11 - 5 = 6; 2020 mod 9 = 4 -> 7; 2018 mod 9 = 2 -> 9
        assert_eq!(center_star(2018), 9);
    }

    #[test]
    fn center_star_negative_year() {
        // -1 rem_euclid 9 = 8 -> 11 - 8 = 3
        assert_eq!(center_star(-1), 3);
        assert_eq!(center_star(-1), center_star(8));
    }

    #[test]
    fn grid_center_matches_input() {
        for c in 1..=9 {
            assert_eq!(flying_star_grid(c).center(), c);
        }
    }

    #[test]
    fn grid_follows_path() {
        let g = flying_star_grid(4);
        assert_eq!(g.star_at(Direction::Center), 4);
        assert_eq!(g.star_at(Direction::NorthWest), 5);
        assert_eq!(g.star_at(Direction::West), 6);
        assert_eq!(g.star_at(Direction::NorthEast), 7);
        assert_eq!(g.star_at(Direction::South), 8);
        assert_eq!(g.star_at(Direction::North), 9);
        assert_eq!(g.star_at(Direction::SouthWest), 1);
        assert_eq!(g.star_at(Direction::East), 2);
        assert_eq!(g.star_at(Direction::SouthEast), 3);
    }

    #[test]
    fn out_of_range_center_wraps() {
        assert_eq!(flying_star_grid(0), flying_star_grid(9));
        assert_eq!(flying_star_grid(10), flying_star_grid(1));
    }

    #[test]
    fn position_of_inverts_star_at() {
        let g = flying_star_grid(7);
        for (d, s) in g.iter() {
            assert_eq!(g.position_of(s), Some(d));
        }
        assert_eq!(g.position_of(0), None);
    }

    #[test]
    fn rows_follow_layout() {
        let g = flying_star_grid(5);
        // Standard Lo Shu square when 5 is in the center.
        assert_eq!(g.rows(), [[4, 9, 2], [3, 5, 7], [8, 1, 6]]);
    }

    #[test]
    fn orientation_aligned() {
        let o = grid_orientation(0.0, true);
        assert!((o.rotation_deg + 180.0).abs() < 1e-12);
        assert!((o.label_rotation_deg - 180.0).abs() < 1e-12);
        let south = grid_orientation(180.0, true);
        assert!(south.rotation_deg.abs() < 1e-12);
    }

    #[test]
    fn orientation_unaligned_is_identity() {
        let o = grid_orientation(73.0, false);
        assert_eq!(o.rotation_deg, 0.0);
        assert_eq!(o.label_rotation_deg, 0.0);
    }

    #[test]
    fn annual_chart_cells_in_layout_order() {
        let chart = annual_chart(2023);
        assert_eq!(chart.center_star, 4);
        let dirs: Vec<Direction> = chart.cells.iter().map(|c| c.direction).collect();
        let layout: Vec<Direction> = GRID_LAYOUT.iter().flatten().copied().collect();
        assert_eq!(dirs, layout);
        assert_eq!(chart.cells[4].star, 4);
        assert_eq!(chart.cell(Direction::North).star, 9);
    }

    #[test]
    fn afflicted_palaces_hold_bad_stars() {
        let chart = annual_chart(2024);
        let bad: Vec<u8> = chart.afflicted().map(|c| c.star).collect();
        assert_eq!(bad.len(), 4);
        for s in bad {
            assert!([2, 3, 5, 7].contains(&s));
        }
    }
}
