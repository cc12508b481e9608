//! The twelve zodiac signs (earthly-branch animals).
//!
//! The cycle starts at Rat. CE 4 is a Rat year, so the sign index of any
//! year is `(year - 4) mod 12` with a Euclidean modulo.

use std::str::FromStr;

use crate::error::LuopanError;
use crate::util::cycle_index;

/// Reference year whose sign index is 0 (Rat).
pub const ZODIAC_EPOCH_YEAR: i32 = 4;

/// The 12 zodiac signs in traditional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 signs in order (0 = Rat, 11 = Pig).
pub const ALL_ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Rat,
    ZodiacSign::Ox,
    ZodiacSign::Tiger,
    ZodiacSign::Rabbit,
    ZodiacSign::Dragon,
    ZodiacSign::Snake,
    ZodiacSign::Horse,
    ZodiacSign::Goat,
    ZodiacSign::Monkey,
    ZodiacSign::Rooster,
    ZodiacSign::Dog,
    ZodiacSign::Pig,
];

impl ZodiacSign {
    /// Traditional-Chinese glyph (鼠, 牛, ...).
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Rat => "鼠",
            Self::Ox => "牛",
            Self::Tiger => "虎",
            Self::Rabbit => "兔",
            Self::Dragon => "龍",
            Self::Snake => "蛇",
            Self::Horse => "馬",
            Self::Goat => "羊",
            Self::Monkey => "猴",
            Self::Rooster => "雞",
            Self::Dog => "狗",
            Self::Pig => "豬",
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    /// 0-based index (Rat=0 .. Pig=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Rat => 0,
            Self::Ox => 1,
            Self::Tiger => 2,
            Self::Rabbit => 3,
            Self::Dragon => 4,
            Self::Snake => 5,
            Self::Horse => 6,
            Self::Goat => 7,
            Self::Monkey => 8,
            Self::Rooster => 9,
            Self::Dog => 10,
            Self::Pig => 11,
        }
    }

    /// Sign at `index`, wrapping modulo 12.
    pub const fn from_index(index: i32) -> Self {
        ALL_ZODIAC_SIGNS[cycle_index(index, 12)]
    }

    /// Sign `steps` positions further along the cycle.
    pub const fn offset(self, steps: i32) -> Self {
        Self::from_index(self.index() as i32 + steps)
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [ZodiacSign; 12] {
        &ALL_ZODIAC_SIGNS
    }
}

impl FromStr for ZodiacSign {
    type Err = LuopanError;

    /// Accepts the glyph, the simplified glyphs 龙/马/鸡/猪, or the English
    /// name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let simplified = match trimmed {
            "龙" => Some(Self::Dragon),
            "马" => Some(Self::Horse),
            "鸡" => Some(Self::Rooster),
            "猪" => Some(Self::Pig),
            _ => None,
        };
        simplified
            .or_else(|| {
                ALL_ZODIAC_SIGNS
                    .iter()
                    .copied()
                    .find(|z| z.glyph() == trimmed || z.name().eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| LuopanError::UnknownSign(s.to_string()))
    }
}

/// Sign index of a CE year: `(year - 4) mod 12`, always in 0..12.
pub const fn zodiac_index(year: i32) -> u8 {
    // Reduce first so `year - 4` cannot overflow near i32::MIN.
    cycle_index(year.rem_euclid(12) - ZODIAC_EPOCH_YEAR, 12) as u8
}

/// Sign of a CE year.
pub const fn zodiac_from_year(year: i32) -> ZodiacSign {
    ALL_ZODIAC_SIGNS[zodiac_index(year) as usize]
}
