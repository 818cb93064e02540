// 사주 차트 데이터 구조
use crate::tables::{SeasonGroup, TrineGroup};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 오행 (五行)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Metal, // 金
    Wood,  // 木
    Water, // 水
    Fire,  // 火
    Earth, // 土
}

impl Element {
    pub const ALL: [Element; 5] =
        [Element::Metal, Element::Wood, Element::Water, Element::Fire, Element::Earth];

    pub fn hanzi(&self) -> &'static str {
        match self {
            Element::Metal => "金",
            Element::Wood => "木",
            Element::Water => "水",
            Element::Fire => "火",
            Element::Earth => "土",
        }
    }
}

/// 천간 (天干) - 10개
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Stem {
    Jia,  // 甲
    Yi,   // 乙
    Bing, // 丙
    Ding, // 丁
    Wu,   // 戊
    Ji,   // 己
    Geng, // 庚
    Xin,  // 辛
    Ren,  // 壬
    Gui,  // 癸
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    /// 0-based 순서 (甲 = 0)
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Stem> {
        Self::ALL.get(index).copied()
    }

    pub fn element(&self) -> Element {
        match self {
            Stem::Jia | Stem::Yi => Element::Wood,
            Stem::Bing | Stem::Ding => Element::Fire,
            Stem::Wu | Stem::Ji => Element::Earth,
            Stem::Geng | Stem::Xin => Element::Metal,
            Stem::Ren | Stem::Gui => Element::Water,
        }
    }

    pub fn is_yang(&self) -> bool {
        self.index() % 2 == 0
    }

    pub fn hanzi(&self) -> &'static str {
        match self {
            Stem::Jia => "甲",
            Stem::Yi => "乙",
            Stem::Bing => "丙",
            Stem::Ding => "丁",
            Stem::Wu => "戊",
            Stem::Ji => "己",
            Stem::Geng => "庚",
            Stem::Xin => "辛",
            Stem::Ren => "壬",
            Stem::Gui => "癸",
        }
    }

    pub fn pinyin(&self) -> &'static str {
        match self {
            Stem::Jia => "jia",
            Stem::Yi => "yi",
            Stem::Bing => "bing",
            Stem::Ding => "ding",
            Stem::Wu => "wu",
            Stem::Ji => "ji",
            Stem::Geng => "geng",
            Stem::Xin => "xin",
            Stem::Ren => "ren",
            Stem::Gui => "gui",
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.hanzi())
    }
}

/// 지지 (地支) - 12개
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Zi,   // 子
    Chou, // 丑
    Yin,  // 寅
    Mao,  // 卯
    Chen, // 辰
    Si,   // 巳
    Wu,   // 午
    Wei,  // 未
    Shen, // 申
    You,  // 酉
    Xu,   // 戌
    Hai,  // 亥
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    /// 0-based 순서 (子 = 0)
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Branch> {
        Self::ALL.get(index).copied()
    }

    /// 인덱스를 12로 나눈 나머지 위치의 지지 (항상 성공)
    pub fn wrapping(index: i32) -> Branch {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    pub fn element(&self) -> Element {
        match self {
            Branch::Yin | Branch::Mao => Element::Wood,
            Branch::Si | Branch::Wu => Element::Fire,
            Branch::Shen | Branch::You => Element::Metal,
            Branch::Hai | Branch::Zi => Element::Water,
            Branch::Chen | Branch::Xu | Branch::Chou | Branch::Wei => Element::Earth,
        }
    }

    pub fn is_yang(&self) -> bool {
        self.index() % 2 == 0
    }

    /// 육충 (六冲) 상대 지지
    pub fn opposite(&self) -> Branch {
        Self::wrapping(self.index() as i32 + 6)
    }

    /// 속한 삼합 그룹
    pub fn trine(&self) -> TrineGroup {
        TrineGroup::from_branch(*self)
    }

    /// 속한 방합 계절
    pub fn season(&self) -> SeasonGroup {
        SeasonGroup::from_branch(*self)
    }

    /// 바로 앞 지지 (子 → 亥)
    pub fn previous(&self) -> Branch {
        Self::wrapping(self.index() as i32 - 1)
    }

    pub fn hanzi(&self) -> &'static str {
        match self {
            Branch::Zi => "子",
            Branch::Chou => "丑",
            Branch::Yin => "寅",
            Branch::Mao => "卯",
            Branch::Chen => "辰",
            Branch::Si => "巳",
            Branch::Wu => "午",
            Branch::Wei => "未",
            Branch::Shen => "申",
            Branch::You => "酉",
            Branch::Xu => "戌",
            Branch::Hai => "亥",
        }
    }

    pub fn pinyin(&self) -> &'static str {
        match self {
            Branch::Zi => "zi",
            Branch::Chou => "chou",
            Branch::Yin => "yin",
            Branch::Mao => "mao",
            Branch::Chen => "chen",
            Branch::Si => "si",
            Branch::Wu => "wu",
            Branch::Wei => "wei",
            Branch::Shen => "shen",
            Branch::You => "you",
            Branch::Xu => "xu",
            Branch::Hai => "hai",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.hanzi())
    }
}

/// 주 (柱) - 천간 + 지지
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct StemBranchPair {
    pub stem: Stem,
    pub branch: Branch,
}

impl StemBranchPair {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// 육십갑자에 속하는 조합인지 (천간/지지 음양 일치)
    pub fn is_sexagenary(&self) -> bool {
        self.stem.is_yang() == self.branch.is_yang()
    }

    /// 육십갑자 순번 (甲子 = 0). 음양이 맞지 않으면 None
    pub fn sexagenary_index(&self) -> Option<usize> {
        if !self.is_sexagenary() {
            return None;
        }
        (0..60).find(|i| i % 10 == self.stem.index() && i % 12 == self.branch.index())
    }

    pub fn from_sexagenary_index(index: usize) -> StemBranchPair {
        let i = index % 60;
        StemBranchPair::new(Stem::ALL[i % 10], Branch::ALL[i % 12])
    }
}

impl fmt::Display for StemBranchPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// 기둥 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    pub const ALL: [PillarPosition; 4] =
        [PillarPosition::Year, PillarPosition::Month, PillarPosition::Day, PillarPosition::Hour];
}

/// 사주 (四柱) 차트 - 년/월/일/시 고정 순서
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Chart {
    pub year: StemBranchPair,
    pub month: StemBranchPair,
    pub day: StemBranchPair,
    pub hour: StemBranchPair,
}

impl Chart {
    pub const fn new(
        year: StemBranchPair,
        month: StemBranchPair,
        day: StemBranchPair,
        hour: StemBranchPair,
    ) -> Self {
        Self { year, month, day, hour }
    }

    pub fn pillars(&self) -> [StemBranchPair; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub fn pillar(&self, position: PillarPosition) -> StemBranchPair {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    pub fn stems(&self) -> [Stem; 4] {
        [self.year.stem, self.month.stem, self.day.stem, self.hour.stem]
    }

    pub fn branches(&self) -> [Branch; 4] {
        [self.year.branch, self.month.branch, self.day.branch, self.hour.branch]
    }

    pub fn has_stem(&self, stem: Stem) -> bool {
        self.stems().contains(&stem)
    }

    pub fn has_branch(&self, branch: Branch) -> bool {
        self.branches().contains(&branch)
    }

    /// 여덟 글자의 오행 분포
    pub fn element_balance(&self) -> ElementBalance {
        let mut balance = ElementBalance::default();
        for pillar in self.pillars() {
            balance.add(pillar.stem.element());
            balance.add(pillar.branch.element());
        }
        balance
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// 오행 분포 (천간 4 + 지지 4 = 8글자)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ElementBalance {
    pub metal: u8,
    pub wood: u8,
    pub water: u8,
    pub fire: u8,
    pub earth: u8,
}

impl ElementBalance {
    fn add(&mut self, element: Element) {
        match element {
            Element::Metal => self.metal += 1,
            Element::Wood => self.wood += 1,
            Element::Water => self.water += 1,
            Element::Fire => self.fire += 1,
            Element::Earth => self.earth += 1,
        }
    }

    pub fn count(&self, element: Element) -> u8 {
        match element {
            Element::Metal => self.metal,
            Element::Wood => self.wood,
            Element::Water => self.water,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
        }
    }

    pub fn total(&self) -> u8 {
        Element::ALL.iter().map(|e| self.count(*e)).sum()
    }

    /// 가장 많은 오행. 동률이면 Element::ALL 순서상 앞선 것
    pub fn dominant(&self) -> Element {
        let mut best = Element::Metal;
        for element in Element::ALL {
            if self.count(element) > self.count(best) {
                best = element;
            }
        }
        best
    }

    /// 차트에 없는 오행
    pub fn missing(&self) -> Vec<Element> {
        Element::ALL.into_iter().filter(|e| self.count(*e) == 0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_tables() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Gui.element(), Element::Water);
        assert_eq!(Branch::Chou.element(), Element::Earth);
        assert_eq!(Branch::You.element(), Element::Metal);

        // 천간은 오행별 2개씩, 지지는 토가 4개
        for element in Element::ALL {
            let stems = Stem::ALL.iter().filter(|s| s.element() == element).count();
            assert_eq!(stems, 2);
            let branches = Branch::ALL.iter().filter(|b| b.element() == element).count();
            assert_eq!(branches, if element == Element::Earth { 4 } else { 2 });
        }
    }

    #[test]
    fn test_trine_and_season() {
        assert_eq!(Branch::Zi.trine(), TrineGroup::ShenZiChen);
        assert_eq!(Branch::Wei.trine(), TrineGroup::HaiMaoWei);
        assert_eq!(Branch::Xu.trine(), TrineGroup::YinWuXu);
        assert_eq!(Branch::Chou.trine(), TrineGroup::SiYouChou);

        assert_eq!(Branch::Chen.season(), SeasonGroup::Spring);
        assert_eq!(Branch::Wu.season(), SeasonGroup::Summer);
        assert_eq!(Branch::Shen.season(), SeasonGroup::Autumn);
        assert_eq!(Branch::Chou.season(), SeasonGroup::Winter);

        for branch in Branch::ALL {
            assert!(branch.trine().members().contains(&branch));
        }
    }

    #[test]
    fn test_opposition_pairs() {
        assert_eq!(Branch::Zi.opposite(), Branch::Wu);
        assert_eq!(Branch::Si.opposite(), Branch::Hai);
        for branch in Branch::ALL {
            assert_ne!(branch.opposite(), branch);
            assert_eq!(branch.opposite().opposite(), branch);
        }
        assert_eq!(Branch::Zi.previous(), Branch::Hai);
        assert_eq!(Branch::Yin.previous(), Branch::Chou);
    }

    #[test]
    fn test_sexagenary_cycle() {
        let first = StemBranchPair::from_sexagenary_index(0);
        assert_eq!(first, StemBranchPair::new(Stem::Jia, Branch::Zi));
        let last = StemBranchPair::from_sexagenary_index(59);
        assert_eq!(last, StemBranchPair::new(Stem::Gui, Branch::Hai));

        assert!(!StemBranchPair::new(Stem::Jia, Branch::Chou).is_sexagenary());
        assert_eq!(StemBranchPair::new(Stem::Jia, Branch::Chou).sexagenary_index(), None);
        assert_eq!(StemBranchPair::new(Stem::Geng, Branch::Xu).sexagenary_index(), Some(46));

        let sexagenary = Stem::ALL
            .iter()
            .flat_map(|s| Branch::ALL.iter().map(move |b| StemBranchPair::new(*s, *b)))
            .filter(|p| p.is_sexagenary())
            .count();
        assert_eq!(sexagenary, 60);
    }

    #[test]
    fn test_element_balance() {
        let chart = Chart::new(
            StemBranchPair::new(Stem::Jia, Branch::Zi),
            StemBranchPair::new(Stem::Yi, Branch::Chou),
            StemBranchPair::new(Stem::Bing, Branch::Yin),
            StemBranchPair::new(Stem::Ding, Branch::Mao),
        );
        let balance = chart.element_balance();
        assert_eq!(balance.total(), 8);
        assert_eq!(balance.wood, 4);
        assert_eq!(balance.fire, 2);
        assert_eq!(balance.dominant(), Element::Wood);
        assert_eq!(balance.missing(), vec![Element::Metal]);
    }

    #[test]
    fn test_chart_display_and_lookup() {
        let chart = Chart::new(
            StemBranchPair::new(Stem::Jia, Branch::Zi),
            StemBranchPair::new(Stem::Yi, Branch::Chou),
            StemBranchPair::new(Stem::Bing, Branch::Yin),
            StemBranchPair::new(Stem::Ding, Branch::Mao),
        );
        assert_eq!(chart.to_string(), "甲子 乙丑 丙寅 丁卯");
        assert_eq!(chart.pillar(PillarPosition::Day).branch, Branch::Yin);
        assert!(chart.has_stem(Stem::Ding));
        assert!(!chart.has_branch(Branch::Hai));
    }

    #[test]
    fn test_serde_names() {
        let pair = StemBranchPair::new(Stem::Wu, Branch::Wu);
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#"{"stem":"wu","branch":"wu"}"#);
        assert_eq!(serde_json::to_string(&Element::Fire).unwrap(), r#""fire""#);
    }
}
