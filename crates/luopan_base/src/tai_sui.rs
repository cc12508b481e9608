//! Tai Sui (Grand Duke) conflicts of a year.
//!
//! Five relations are checked against the year's sign, in fixed order:
//! value (the sign itself), clash (opposite sign), harm, punish and break.
//! Harm and break are total pairings; punish is partial because Dragon,
//! Horse, Rooster and Pig only punish themselves. A sign is listed once,
//! under the first relation that names it.

use crate::birth_year::{BirthYearConfig, affected_birth_years_with};
use crate::zodiac::{ZodiacSign, zodiac_from_year};

/// Kind of conflict with the year's Tai Sui.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictKind {
    /// 值太歲: born in the same sign as the year.
    Value,
    /// 沖太歲: the opposite sign.
    Clash,
    /// 害太歲
    Harm,
    /// 刑太歲
    Punish,
    /// 破太歲
    Break,
}

/// Evaluation order of the relations.
pub const CONFLICT_ORDER: [ConflictKind; 5] = [
    ConflictKind::Value,
    ConflictKind::Clash,
    ConflictKind::Harm,
    ConflictKind::Punish,
    ConflictKind::Break,
];

impl ConflictKind {
    /// Chinese label (值太歲, 沖太歲, ...).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Value => "值太歲",
            Self::Clash => "沖太歲",
            Self::Harm => "害太歲",
            Self::Punish => "刑太歲",
            Self::Break => "破太歲",
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Value => "Value",
            Self::Clash => "Clash",
            Self::Harm => "Harm",
            Self::Punish => "Punish",
            Self::Break => "Break",
        }
    }

    /// Typical effect of the conflict.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Value => "運程反覆，易生變化，情緒起伏大，宜靜不宜動。",
            Self::Clash => "衝擊最大，多勞少得，易有轉職、搬遷或受傷之象。",
            Self::Harm => "易犯小人，人際關係受損，遭人陷害或誤解。",
            Self::Punish => "是非較多，易有官非口舌，或肢體刑傷。",
            Self::Break => "運氣易有突然破壞，破財或人際關係破裂。",
        }
    }

    /// Suggested remedy.
    pub const fn remedy(self) -> &'static str {
        match self {
            Self::Value => "佩戴紅繩、化太歲錦囊，或本命佛飾品。",
            Self::Clash => "佩戴生肖三合/六合飾物 (如鼠沖馬，鼠戴牛/猴/龍)。",
            Self::Harm => "佩戴紫水晶或黑曜石，遠離口舌。",
            Self::Punish => "佩戴貴人生肖飾品，多行善積德。",
            Self::Break => "佩戴白水晶或金屬飾品增強氣場。",
        }
    }
}

/// One sign in conflict with the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    pub sign: ZodiacSign,
    pub kind: ConflictKind,
    pub description: &'static str,
    pub remedy: &'static str,
}

impl Conflict {
    /// Conflict record with the catalog text for `kind`.
    pub const fn new(sign: ZodiacSign, kind: ConflictKind) -> Self {
        Self {
            sign,
            kind,
            description: kind.description(),
            remedy: kind.remedy(),
        }
    }
}

/// Tai Sui result for one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaiSuiResult {
    pub year: i32,
    /// Sign ruling the year.
    pub year_sign: ZodiacSign,
    /// Conflicts in [`CONFLICT_ORDER`], each sign at most once.
    pub conflicts: Vec<Conflict>,
}

impl TaiSuiResult {
    /// Conflict recorded for `sign`, if any.
    pub fn conflict_for(&self, sign: ZodiacSign) -> Option<&Conflict> {
        self.conflicts.iter().find(|c| c.sign == sign)
    }

    /// Conflict recorded under `kind`, if any.
    pub fn conflict_of_kind(&self, kind: ConflictKind) -> Option<&Conflict> {
        self.conflicts.iter().find(|c| c.kind == kind)
    }
}

/// Opposite sign, six places away.
pub const fn clash_partner(sign: ZodiacSign) -> ZodiacSign {
    sign.offset(6)
}

/// Harm (六害) pairing. Total and symmetric.
pub const fn harm_partner(sign: ZodiacSign) -> ZodiacSign {
    use ZodiacSign::*;
    match sign {
        Rat => Goat,
        Goat => Rat,
        Ox => Horse,
        Horse => Ox,
        Tiger => Snake,
        Snake => Tiger,
        Rabbit => Dragon,
        Dragon => Rabbit,
        Monkey => Pig,
        Pig => Monkey,
        Rooster => Dog,
        Dog => Rooster,
    }
}

/// Punish (刑) target. Partial and mostly directed.
///
/// Rat and Rabbit punish each other; Ox -> Dog -> Goat -> Ox and
/// Tiger -> Snake -> Monkey -> Tiger are directed cycles. Dragon, Horse,
/// Rooster and Pig are self-punishing and have no target here.
pub const fn punish_target(sign: ZodiacSign) -> Option<ZodiacSign> {
    use ZodiacSign::*;
    match sign {
        Rat => Some(Rabbit),
        Rabbit => Some(Rat),
        Ox => Some(Dog),
        Dog => Some(Goat),
        Goat => Some(Ox),
        Tiger => Some(Snake),
        Snake => Some(Monkey),
        Monkey => Some(Tiger),
        Dragon | Horse | Rooster | Pig => None,
    }
}

/// Break (破) pairing. Total and symmetric.
pub const fn break_partner(sign: ZodiacSign) -> ZodiacSign {
    use ZodiacSign::*;
    match sign {
        Rat => Rooster,
        Rooster => Rat,
        Ox => Dragon,
        Dragon => Ox,
        Tiger => Pig,
        Pig => Tiger,
        Rabbit => Horse,
        Horse => Rabbit,
        Monkey => Snake,
        Snake => Monkey,
        Dog => Goat,
        Goat => Dog,
    }
}

/// Sign named by `kind` relative to the year sign, before de-duplication.
pub const fn related_sign(year_sign: ZodiacSign, kind: ConflictKind) -> Option<ZodiacSign> {
    match kind {
        ConflictKind::Value => Some(year_sign),
        ConflictKind::Clash => Some(clash_partner(year_sign)),
        ConflictKind::Harm => Some(harm_partner(year_sign)),
        ConflictKind::Punish => punish_target(year_sign),
        ConflictKind::Break => Some(break_partner(year_sign)),
    }
}

/// Compute the Tai Sui conflicts of `year`.
pub fn tai_sui(year: i32) -> TaiSuiResult {
    let year_sign = zodiac_from_year(year);
    let mut seen = [false; 12];
    let mut conflicts = Vec::with_capacity(CONFLICT_ORDER.len());

    for kind in CONFLICT_ORDER {
        let Some(sign) = related_sign(year_sign, kind) else {
            continue;
        };
        let slot = &mut seen[sign.index() as usize];
        if *slot {
            continue;
        }
        *slot = true;
        conflicts.push(Conflict::new(sign, kind));
    }

    TaiSuiResult {
        year,
        year_sign,
        conflicts,
    }
}

/// A conflict together with the birth years it affects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaiSuiEntry {
    pub conflict: Conflict,
    /// Ascending birth years of the conflicting sign.
    pub birth_years: Vec<i32>,
}

/// Tai Sui conflicts of a year with affected birth years attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaiSuiReport {
    pub year: i32,
    pub year_sign: ZodiacSign,
    pub entries: Vec<TaiSuiEntry>,
}

/// Build the full Tai Sui report for `year`.
pub fn tai_sui_report(year: i32, config: &BirthYearConfig) -> TaiSuiReport {
    let result = tai_sui(year);
    let entries = result
        .conflicts
        .into_iter()
        .map(|conflict| TaiSuiEntry {
            birth_years: affected_birth_years_with(conflict.sign, year, config),
            conflict,
        })
        .collect();
    TaiSuiReport {
        year,
        year_sign: result.year_sign,
        entries,
    }
}
