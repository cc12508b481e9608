//! Error types for boundary conversions.
//!
//! The calculation functions themselves are total; these errors only arise
//! when parsing user-facing tokens or validating configuration.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing and validation at the edges of the core.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LuopanError {
    /// Star number outside 1..=9.
    InvalidStar(u8),
    /// Zodiac token that matches neither a glyph nor an English name.
    UnknownSign(String),
    /// Direction token that matches no octant code or name.
    UnknownDirection(String),
    /// Configuration value out of range.
    InvalidConfig(&'static str),
}

impl Display for LuopanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStar(n) => write!(f, "invalid star number: {n} (expected 1-9)"),
            Self::UnknownSign(s) => write!(f, "unknown zodiac sign: {s}"),
            Self::UnknownDirection(s) => write!(f, "unknown direction: {s}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for LuopanError {}
