//! Integration tests for the C FFI layer.

use std::ffi::CStr;
use std::mem::MaybeUninit;

use luopan_ffi_c::*;

#[test]
fn api_version_is_current() {
    assert_eq!(luopan_api_version(), LUOPAN_API_VERSION);
}

#[test]
fn resolve_mountain_north() {
    let mut out = MaybeUninit::<LuopanMountainInfo>::uninit();
    // SAFETY: `out` is a valid write target.
    let status = unsafe { luopan_resolve_mountain(-0.5, out.as_mut_ptr()) };
    assert_eq!(status, LuopanStatus::Ok);
    // SAFETY: Status Ok guarantees the struct was written.
    let info = unsafe { out.assume_init() };
    assert_eq!(info.mountain_index, 1);
    assert_eq!(info.sitting_index, 13);
    assert_eq!(info.direction, 0);
    assert!((info.heading_deg - 359.5).abs() < 1e-12);
    // SAFETY: Name pointers reference static NUL-terminated strings.
    let facing = unsafe { CStr::from_ptr(info.facing_utf8) }.to_str().unwrap();
    let sitting = unsafe { CStr::from_ptr(info.sitting_utf8) }.to_str().unwrap();
    let trigram = unsafe { CStr::from_ptr(info.trigram_utf8) }.to_str().unwrap();
    assert_eq!((facing, sitting, trigram), ("子", "午", "坎"));
}

#[test]
fn center_star_and_grid() {
    let mut star = 0_u8;
    // SAFETY: `star` is a valid write target.
    assert_eq!(unsafe { luopan_center_star(2024, &mut star) }, LuopanStatus::Ok);
    assert_eq!(star, 3);

    let mut grid = LuopanGrid { stars: [0; 9] };
    // SAFETY: `grid` is a valid write target.
    assert_eq!(
        unsafe { luopan_flying_star_grid(star, &mut grid) },
        LuopanStatus::Ok
    );
    assert_eq!(grid.stars[8], 3);
    let mut sorted = grid.stars;
    sorted.sort_unstable();
    assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn tai_sui_dragon_year() {
    let mut out = MaybeUninit::<LuopanTaiSui>::uninit();
    // SAFETY: `out` is a valid write target.
    assert_eq!(
        unsafe { luopan_tai_sui(2024, out.as_mut_ptr()) },
        LuopanStatus::Ok
    );
    // SAFETY: Status Ok guarantees the struct was written.
    let r = unsafe { out.assume_init() };
    assert_eq!(r.year_sign, 4);
    assert_eq!(r.conflict_count, 4);
    let signs: Vec<u8> = r.conflicts[..4].iter().map(|c| c.sign).collect();
    assert_eq!(signs, vec![4, 10, 3, 1]);
}

#[test]
fn birth_years_roundtrip() {
    let mut out = LuopanBirthYears {
        count: 0,
        years: [0; LUOPAN_MAX_BIRTH_YEARS],
    };
    // SAFETY: `out` is a valid write target.
    let status = unsafe { luopan_affected_birth_years(4, 2024, &mut out) };
    assert_eq!(status, LuopanStatus::Ok);
    assert_eq!(out.count, 8);
    assert_eq!(out.years[0], 1940);
    assert_eq!(out.years[7], 2024);
}

#[test]
fn birth_years_rejects_bad_sign() {
    let mut out = LuopanBirthYears {
        count: 0,
        years: [0; LUOPAN_MAX_BIRTH_YEARS],
    };
    // SAFETY: `out` is a valid write target.
    let status = unsafe { luopan_affected_birth_years(99, 2024, &mut out) };
    assert_eq!(status, LuopanStatus::UnknownSign);
    assert_eq!(out.count, 0);
}
