//! Integration tests for the annual flying-star chart.

use std::collections::HashSet;

use luopan_base::{
    ALL_DIRECTIONS, Direction, GRID_LAYOUT, annual_chart, center_star, flying_star_grid,
    grid_orientation, star_info,
};

#[test]
fn grid_is_bijection_for_every_year() {
    for year in 1900..=2100 {
        let grid = flying_star_grid(center_star(year));
        let stars: HashSet<u8> = ALL_DIRECTIONS.iter().map(|d| grid.star_at(*d)).collect();
        assert_eq!(stars, (1..=9).collect::<HashSet<u8>>(), "year {year}");
    }
}

#[test]
fn center_star_period_nine() {
    for year in -50..3000 {
        assert_eq!(center_star(year), center_star(year + 9), "year {year}");
    }
}

#[test]
fn center_star_decreases_each_year() {
    for year in 1900..2100 {
        let now = center_star(year) as i32;
        let next = center_star(year + 1) as i32;
        assert_eq!((now - next).rem_euclid(9), 1, "year {year}");
    }
}

#[test]
fn center_star_golden_years() {
    // 2017 one-white ... 2018 nine-purple, 2024 three-jade.
    let expected = [
        (2017, 1),
        (2018, 9),
        (2019, 8),
        (2020, 7),
        (2021, 6),
        (2022, 5),
        (2023, 4),
        (2024, 3),
        (2025, 2),
        (2026, 1),
    ];
    for (year, star) in expected {
        assert_eq!(center_star(year), star, "year {year}");
    }
}

#[test]
fn five_yellow_position_2024() {
    let grid = flying_star_grid(center_star(2024));
    assert_eq!(grid.position_of(5), Some(Direction::West));
}

#[test]
fn layout_is_permutation_of_directions() {
    let cells: HashSet<Direction> = GRID_LAYOUT.iter().flatten().copied().collect();
    assert_eq!(cells.len(), 9);
    assert_eq!(GRID_LAYOUT[1][1], Direction::Center);
    assert_eq!(GRID_LAYOUT[0][1], Direction::South);
}

#[test]
fn chart_is_idempotent() {
    assert_eq!(annual_chart(2031), annual_chart(2031));
}

#[test]
fn chart_cells_reference_catalog() {
    let chart = annual_chart(2024);
    for cell in &chart.cells {
        assert_eq!(cell.star_info().number, cell.star);
        assert_eq!(star_info(cell.star), Some(cell.star_info()));
    }
}

#[test]
fn orientation_never_changes_grid() {
    let grid = flying_star_grid(6);
    for h in [0.0, 45.0, 180.0, 300.0] {
        let o = grid_orientation(h, true);
        assert!((o.rotation_deg + o.label_rotation_deg).abs() < 1e-12);
        assert!((o.rotation_deg - (h - 180.0)).abs() < 1e-12);
    }
    assert_eq!(grid, flying_star_grid(6));
}
