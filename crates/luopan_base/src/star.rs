//! Catalog of the nine flying stars.
//!
//! Reference data keyed by star number 1..=9: element, auspiciousness,
//! a short reading, suggested remedies and things to avoid.

use crate::direction::Element;
use crate::error::LuopanError;

/// Kind of object a recommendation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemedyKind {
    Plant,
    Decor,
}

/// A suggested placement for a star's palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub item: &'static str,
    pub kind: RemedyKind,
    pub reason: &'static str,
}

/// Static attributes of one star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarInfo {
    /// Star number, 1..=9.
    pub number: u8,
    /// Traditional name, e.g. 一白貪狼星.
    pub name: &'static str,
    pub element: Element,
    /// 吉 (true) or 凶 (false).
    pub auspicious: bool,
    pub description: &'static str,
    pub recommendations: &'static [Recommendation],
    pub taboos: &'static [&'static str],
}

impl StarInfo {
    /// Look up a star, failing for numbers outside 1..=9.
    pub fn require(number: u8) -> Result<&'static StarInfo, LuopanError> {
        star_info(number).ok_or(LuopanError::InvalidStar(number))
    }
}

const fn rec(item: &'static str, kind: RemedyKind, reason: &'static str) -> Recommendation {
    Recommendation { item, kind, reason }
}

/// All nine stars, index 0 = star 1.
pub const ALL_STARS: [StarInfo; 9] = [
    StarInfo {
        number: 1,
        name: "一白貪狼星",
        element: Element::Water,
        auspicious: true,
        description: "主官運、文昌、人緣與桃花，利於學業與事業發展。",
        recommendations: &[
            rec("金屬工藝品", RemedyKind::Decor, "金生水，增強吉星力量"),
            rec("流水擺飾", RemedyKind::Decor, "流動之水催旺財運"),
        ],
        taboos: &["避免堆放雜物", "不宜紅色過多（火水相沖）"],
    },
    StarInfo {
        number: 2,
        name: "二黑巨門星",
        element: Element::Earth,
        auspicious: false,
        description: "病符星，主疾病傷痛，需注意健康問題，尤其是腹部與消化系統。",
        recommendations: &[
            rec("銅葫蘆", RemedyKind::Decor, "化解病氣，金洩土氣"),
            rec("六帝錢", RemedyKind::Decor, "鎮宅化煞"),
        ],
        taboos: &["紅色地毯", "點長明燈", "放置盆栽（木剋土激怒病符）"],
    },
    StarInfo {
        number: 3,
        name: "三碧祿存星",
        element: Element::Wood,
        auspicious: false,
        description: "是非星，主口舌爭端、官非訴訟，易引起情緒波動。",
        recommendations: &[
            rec("紅色中國結", RemedyKind::Decor, "火洩木氣，化解是非"),
            rec("紫水晶", RemedyKind::Decor, "平和心境，屬火象徵"),
        ],
        taboos: &["綠色植物", "藍色物品", "魚缸"],
    },
    StarInfo {
        number: 4,
        name: "四綠文曲星",
        element: Element::Wood,
        auspicious: true,
        description: "文昌星，主學業、考試、進修及文職工作，亦利桃花。",
        recommendations: &[
            rec("富貴竹 (4支)", RemedyKind::Plant, "步步高升，催旺文昌"),
            rec("文昌塔", RemedyKind::Decor, "集中精神，提升考運"),
        ],
        taboos: &["金屬銳器", "雜亂無章"],
    },
    StarInfo {
        number: 5,
        name: "五黃廉貞星",
        element: Element::Earth,
        auspicious: false,
        description: "大煞星，主災禍、意外、重病，是九星中最凶的一顆。",
        recommendations: &[
            rec("銅鐘/銅鈴", RemedyKind::Decor, "金屬聲音化解土煞"),
            rec("安忍水", RemedyKind::Decor, "強力化煞"),
        ],
        taboos: &["動土", "紅色物品", "興工裝修"],
    },
    StarInfo {
        number: 6,
        name: "六白武曲星",
        element: Element::Metal,
        auspicious: true,
        description: "偏財星，主橫財、貴人、權力，利於武職及管理階層。",
        recommendations: &[
            rec("黃水晶", RemedyKind::Decor, "土生金，聚財"),
            rec("聚寶盆", RemedyKind::Decor, "招財納福"),
        ],
        taboos: &["紅色物品", "爐灶"],
    },
    StarInfo {
        number: 7,
        name: "七赤破軍星",
        element: Element::Metal,
        auspicious: false,
        description: "破財星，主盜賊、火災、損丁，亦代表口舌是非。",
        recommendations: &[
            rec("黑曜石", RemedyKind::Decor, "水洩金氣，化煞"),
            rec("藍色地毯", RemedyKind::Decor, "五行屬水，安撫肅殺之氣"),
        ],
        taboos: &["金屬尖銳物", "樂器"],
    },
    StarInfo {
        number: 8,
        name: "八白左輔星",
        element: Element::Earth,
        auspicious: true,
        description: "當運財星（九運中為退氣，但仍吉），主正財、置業、升職。",
        recommendations: &[
            rec("紅燈籠/紅地毯", RemedyKind::Decor, "火生土，催旺財氣"),
            rec("紫晶洞", RemedyKind::Decor, "聚氣生財"),
        ],
        taboos: &["綠色植物（木剋土）", "垃圾桶"],
    },
    StarInfo {
        number: 9,
        name: "九紫右弼星",
        element: Element::Fire,
        auspicious: true,
        description: "喜慶星（九運當令），主喜事、姻緣、人緣，大吉之星。",
        recommendations: &[
            rec("紅色鮮花", RemedyKind::Plant, "木火通明，喜上加喜"),
            rec("常綠植物", RemedyKind::Plant, "生旺火氣"),
        ],
        taboos: &["黑色物品", "水景（水剋火）"],
    },
];

/// Look up a star by number. Returns None outside 1..=9.
pub fn star_info(number: u8) -> Option<&'static StarInfo> {
    match number {
        1..=9 => Some(&ALL_STARS[(number - 1) as usize]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_sequential() {
        for (i, s) in ALL_STARS.iter().enumerate() {
            assert_eq!(s.number as usize, i + 1);
        }
    }

    #[test]
    fn every_star_has_remedies_and_taboos() {
        for s in &ALL_STARS {
            assert!(!s.name.is_empty());
            assert!(!s.description.is_empty());
            assert!(!s.recommendations.is_empty(), "star {}", s.number);
            assert!(!s.taboos.is_empty(), "star {}", s.number);
        }
    }

    #[test]
    fn five_yellow_is_inauspicious_earth() {
        let s = star_info(5).unwrap();
        assert_eq!(s.element, Element::Earth);
        assert!(!s.auspicious);
    }

    #[test]
    fn out_of_range() {
        assert!(star_info(0).is_none());
        assert!(star_info(10).is_none());
        assert_eq!(StarInfo::require(10), Err(LuopanError::InvalidStar(10)));
    }

    #[test]
    fn auspicious_set() {
        let good: Vec<u8> = ALL_STARS
            .iter()
            .filter(|s| s.auspicious)
            .map(|s| s.number)
            .collect();
        assert_eq!(good, vec![1, 4, 6, 8, 9]);
    }
}
