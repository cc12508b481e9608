//! C-facing adapter for `luopan_base`.
//!
//! All entry points return a [`LuopanStatus`] and write results through
//! caller-owned out-pointers. Strings are static, NUL-terminated UTF-8.

use std::ffi::c_char;

use luopan_base::{
    ALL_DIRECTIONS, ALL_ZODIAC_SIGNS, ConflictKind, LuopanError, MountainInfo, ZodiacSign,
    affected_birth_years, center_star, flying_star_grid, resolve_mountain, tai_sui,
};

/// ABI version for downstream bindings.
pub const LUOPAN_API_VERSION: u32 = 1;

/// Maximum number of conflicts in a Tai Sui result.
pub const LUOPAN_MAX_CONFLICTS: usize = 5;

/// Capacity of the birth-year buffer (90-year window yields at most 8).
pub const LUOPAN_MAX_BIRTH_YEARS: usize = 16;

/// C-facing status codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuopanStatus {
    Ok = 0,
    InvalidStar = 1,
    UnknownSign = 2,
    UnknownDirection = 3,
    InvalidConfig = 4,
    NullPointer = 7,
    Internal = 255,
}

impl From<&LuopanError> for LuopanStatus {
    fn from(value: &LuopanError) -> Self {
        match value {
            LuopanError::InvalidStar(_) => Self::InvalidStar,
            LuopanError::UnknownSign(_) => Self::UnknownSign,
            LuopanError::UnknownDirection(_) => Self::UnknownDirection,
            LuopanError::InvalidConfig(_) => Self::InvalidConfig,
            _ => Self::Internal,
        }
    }
}

/// C-compatible mountain reading.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuopanMountainInfo {
    /// Index into the 24-mountain table (0 = 壬, 1 = 子).
    pub mountain_index: u8,
    /// Index of the sitting mountain.
    pub sitting_index: u8,
    /// Octant code: 0 = N, 1 = NE, ... 7 = NW.
    pub direction: u8,
    pub center_deg: f64,
    pub start_deg: f64,
    pub end_deg: f64,
    /// Heading normalized into [0, 360).
    pub heading_deg: f64,
    pub facing_utf8: *const c_char,
    pub sitting_utf8: *const c_char,
    pub trigram_utf8: *const c_char,
}

/// C-compatible flying-star grid, indexed by direction code
/// (0 = N .. 7 = NW, 8 = center).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuopanGrid {
    pub stars: [u8; 9],
}

/// C-compatible conflict record.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuopanConflict {
    /// Zodiac index, 0 = Rat.
    pub sign: u8,
    /// 0 = Value, 1 = Clash, 2 = Harm, 3 = Punish, 4 = Break.
    pub kind: u8,
}

/// C-compatible Tai Sui result.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuopanTaiSui {
    pub year_sign: u8,
    pub conflict_count: u8,
    pub conflicts: [LuopanConflict; LUOPAN_MAX_CONFLICTS],
}

/// C-compatible birth-year list.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuopanBirthYears {
    pub count: u32,
    pub years: [i32; LUOPAN_MAX_BIRTH_YEARS],
}

const MOUNTAIN_NAMES_C: [&str; 24] = [
    "壬\0", "子\0", "癸\0", "丑\0", "艮\0", "寅\0", "甲\0", "卯\0", "乙\0", "辰\0", "巽\0", "巳\0",
    "丙\0", "午\0", "丁\0", "未\0", "坤\0", "申\0", "庚\0", "酉\0", "辛\0", "戌\0", "乾\0", "亥\0",
];

const TRIGRAMS_C: [&str; 8] = [
    "坎\0", "艮\0", "震\0", "巽\0", "離\0", "坤\0", "兌\0", "乾\0",
];

fn c_str(s: &'static str) -> *const c_char {
    s.as_ptr().cast()
}

const fn conflict_kind_code(kind: ConflictKind) -> u8 {
    match kind {
        ConflictKind::Value => 0,
        ConflictKind::Clash => 1,
        ConflictKind::Harm => 2,
        ConflictKind::Punish => 3,
        ConflictKind::Break => 4,
    }
}

fn sign_from_code(code: u8) -> Result<ZodiacSign, LuopanStatus> {
    ALL_ZODIAC_SIGNS
        .get(code as usize)
        .copied()
        .ok_or(LuopanStatus::UnknownSign)
}

impl From<MountainInfo> for LuopanMountainInfo {
    fn from(info: MountainInfo) -> Self {
        let index = info.index as usize;
        let sitting = (index + 12) % 24;
        let direction = info.direction().index();
        Self {
            mountain_index: info.index,
            sitting_index: sitting as u8,
            direction,
            center_deg: info.mountain.center_deg,
            start_deg: info.mountain.start_deg,
            end_deg: info.mountain.end_deg,
            heading_deg: info.heading_deg,
            facing_utf8: c_str(MOUNTAIN_NAMES_C[index]),
            sitting_utf8: c_str(MOUNTAIN_NAMES_C[sitting]),
            trigram_utf8: c_str(TRIGRAMS_C[direction as usize]),
        }
    }
}

/// Grid for `center` as a C struct.
pub fn luopan_grid_internal(center: u8) -> LuopanGrid {
    let grid = flying_star_grid(center);
    LuopanGrid {
        stars: ALL_DIRECTIONS.map(|d| grid.star_at(d)),
    }
}

/// Tai Sui result for `year` as a C struct.
pub fn luopan_tai_sui_internal(year: i32) -> LuopanTaiSui {
    let result = tai_sui(year);
    let mut conflicts = [LuopanConflict { sign: 0, kind: 0 }; LUOPAN_MAX_CONFLICTS];
    for (slot, c) in conflicts.iter_mut().zip(&result.conflicts) {
        *slot = LuopanConflict {
            sign: c.sign.index(),
            kind: conflict_kind_code(c.kind),
        };
    }
    LuopanTaiSui {
        year_sign: result.year_sign.index(),
        conflict_count: result.conflicts.len() as u8,
        conflicts,
    }
}

/// Birth years for the sign with zodiac index `sign`, as a C struct.
pub fn luopan_birth_years_internal(
    sign: u8,
    reference_year: i32,
) -> Result<LuopanBirthYears, LuopanStatus> {
    let sign = sign_from_code(sign)?;
    let list = affected_birth_years(sign, reference_year);
    if list.len() > LUOPAN_MAX_BIRTH_YEARS {
        return Err(LuopanStatus::Internal);
    }
    let mut years = [0_i32; LUOPAN_MAX_BIRTH_YEARS];
    years[..list.len()].copy_from_slice(&list);
    Ok(LuopanBirthYears {
        count: list.len() as u32,
        years,
    })
}

/// Return ABI version of the exported C API.
#[unsafe(no_mangle)]
pub extern "C" fn luopan_api_version() -> u32 {
    LUOPAN_API_VERSION
}

/// Resolve a compass heading into its mountain.
///
/// # Safety
/// `out_info` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn luopan_resolve_mountain(
    heading_deg: f64,
    out_info: *mut LuopanMountainInfo,
) -> LuopanStatus {
    ffi_boundary(|| {
        if out_info.is_null() {
            return LuopanStatus::NullPointer;
        }
        let info = LuopanMountainInfo::from(resolve_mountain(heading_deg));
        // SAFETY: Pointer is checked for null and written once.
        unsafe { *out_info = info };
        LuopanStatus::Ok
    })
}

/// Center star (1-9) of the annual chart.
///
/// # Safety
/// `out_star` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn luopan_center_star(year: i32, out_star: *mut u8) -> LuopanStatus {
    ffi_boundary(|| {
        if out_star.is_null() {
            return LuopanStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null and written once.
        unsafe { *out_star = center_star(year) };
        LuopanStatus::Ok
    })
}

/// Flying-star grid for a center star. Out-of-range centers wrap into 1-9.
///
/// # Safety
/// `out_grid` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn luopan_flying_star_grid(
    center: u8,
    out_grid: *mut LuopanGrid,
) -> LuopanStatus {
    ffi_boundary(|| {
        if out_grid.is_null() {
            return LuopanStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null and written once.
        unsafe { *out_grid = luopan_grid_internal(center) };
        LuopanStatus::Ok
    })
}

/// Tai Sui conflicts of a year.
///
/// # Safety
/// `out_result` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn luopan_tai_sui(year: i32, out_result: *mut LuopanTaiSui) -> LuopanStatus {
    ffi_boundary(|| {
        if out_result.is_null() {
            return LuopanStatus::NullPointer;
        }
        // SAFETY: Pointer is checked for null and written once.
        unsafe { *out_result = luopan_tai_sui_internal(year) };
        LuopanStatus::Ok
    })
}

/// Birth years of a zodiac sign (index 0 = Rat) within 90 years of
/// `reference_year`, ascending.
///
/// # Safety
/// `out_years` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn luopan_affected_birth_years(
    sign: u8,
    reference_year: i32,
    out_years: *mut LuopanBirthYears,
) -> LuopanStatus {
    ffi_boundary(|| {
        if out_years.is_null() {
            return LuopanStatus::NullPointer;
        }
        match luopan_birth_years_internal(sign, reference_year) {
            Ok(years) => {
                // SAFETY: Pointer is checked for null and written once.
                unsafe { *out_years = years };
                LuopanStatus::Ok
            }
            Err(status) => status,
        }
    })
}

fn ffi_boundary(f: impl FnOnce() -> LuopanStatus) -> LuopanStatus {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(status) => status,
        Err(_) => LuopanStatus::Internal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn status_maps_from_core_error() {
        let status = LuopanStatus::from(&LuopanError::InvalidStar(0));
        assert_eq!(status, LuopanStatus::InvalidStar);
    }

    #[test]
    fn c_names_match_table() {
        for (i, m) in luopan_base::MOUNTAINS.iter().enumerate() {
            assert_eq!(MOUNTAIN_NAMES_C[i].trim_end_matches('\0'), m.name);
        }
        for d in ALL_DIRECTIONS.iter().filter(|d| d.is_octant()) {
            assert_eq!(
                TRIGRAMS_C[d.index() as usize].trim_end_matches('\0'),
                d.trigram()
            );
        }
    }

    #[test]
    fn ffi_rejects_null_output() {
        // SAFETY: Null output pointers are intentional for validation.
        unsafe {
            assert_eq!(
                luopan_resolve_mountain(0.0, ptr::null_mut()),
                LuopanStatus::NullPointer
            );
            assert_eq!(luopan_center_star(2024, ptr::null_mut()), LuopanStatus::NullPointer);
            assert_eq!(
                luopan_tai_sui(2024, ptr::null_mut()),
                LuopanStatus::NullPointer
            );
        }
    }

    #[test]
    fn unknown_sign_code() {
        assert_eq!(
            luopan_birth_years_internal(12, 2024),
            Err(LuopanStatus::UnknownSign)
        );
    }
}
