//! Reference Tables
//!
//! 신살 판정에 쓰이는 고정 참조 테이블.
//!
//! - 삼합 (三合) 4그룹, 방합 (方合) 계절 4그룹
//! - 삼합 그룹 → 역할 지지 (桃花/驿马/将星/华盖/劫煞/亡神/灾煞) 단일 조회표
//! - 일간 기준 지지 테이블 (贵人, 文昌, 禄, 羊刃 ...)
//! - 월지/년지 기준 표식
//!
//! 모든 조회는 전역(total): 키마다 항목이 있고, 빈 항목은 "불일치"로 평가된다.

use crate::chart::{Branch as B, Chart, Stem as S, StemBranchPair};
use serde::{Deserialize, Serialize};

// =============================================================================
// Trine / Season Groups
// =============================================================================

/// 삼합 그룹
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrineGroup {
    ShenZiChen, // 申子辰 水局
    HaiMaoWei,  // 亥卯未 木局
    YinWuXu,    // 寅午戌 火局
    SiYouChou,  // 巳酉丑 金局
}

impl TrineGroup {
    pub const ALL: [TrineGroup; 4] =
        [TrineGroup::ShenZiChen, TrineGroup::HaiMaoWei, TrineGroup::YinWuXu, TrineGroup::SiYouChou];

    pub fn members(&self) -> [B; 3] {
        match self {
            TrineGroup::ShenZiChen => [B::Shen, B::Zi, B::Chen],
            TrineGroup::HaiMaoWei => [B::Hai, B::Mao, B::Wei],
            TrineGroup::YinWuXu => [B::Yin, B::Wu, B::Xu],
            TrineGroup::SiYouChou => [B::Si, B::You, B::Chou],
        }
    }

    /// 삼합은 12지지를 분할하므로 항상 정확히 하나의 그룹에 속한다
    pub fn from_branch(branch: B) -> TrineGroup {
        match branch.index() % 4 {
            0 => TrineGroup::ShenZiChen,
            1 => TrineGroup::SiYouChou,
            2 => TrineGroup::YinWuXu,
            _ => TrineGroup::HaiMaoWei,
        }
    }

    pub fn is_present_in(&self, chart: &Chart) -> bool {
        self.members().iter().any(|b| chart.has_branch(*b))
    }
}

/// 방합 (계절) 그룹
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonGroup {
    Spring, // 寅卯辰
    Summer, // 巳午未
    Autumn, // 申酉戌
    Winter, // 亥子丑
}

impl SeasonGroup {
    pub fn from_branch(branch: B) -> SeasonGroup {
        match branch {
            B::Yin | B::Mao | B::Chen => SeasonGroup::Spring,
            B::Si | B::Wu | B::Wei => SeasonGroup::Summer,
            B::Shen | B::You | B::Xu => SeasonGroup::Autumn,
            B::Hai | B::Zi | B::Chou => SeasonGroup::Winter,
        }
    }
}

// =============================================================================
// Trine Roles
// =============================================================================

/// 삼합 그룹에서 파생되는 역할 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrineRole {
    PeachBlossom, // 桃花 (咸池)
    Travel,       // 驿马
    Dominance,    // 将星
    Storage,      // 华盖
    Robbery,      // 劫煞
    Death,        // 亡神
    Calamity,     // 灾煞
}

impl TrineRole {
    pub const ALL: [TrineRole; 7] = [
        TrineRole::PeachBlossom,
        TrineRole::Travel,
        TrineRole::Dominance,
        TrineRole::Storage,
        TrineRole::Robbery,
        TrineRole::Death,
        TrineRole::Calamity,
    ];

    /// 삼합 그룹 → 역할 → 지지 단일 조회표
    ///
    /// 각 역할은 그룹의 장생지(첫 글자) 기준 고정 오프셋이다:
    /// 劫煞 -3, 灾煞 -2, 桃花 +1, 亡神 +3, 将星 +4, 驿马 +6, 华盖 +8.
    pub fn branch_for(&self, group: TrineGroup) -> B {
        let offset = match self {
            TrineRole::Robbery => -3,
            TrineRole::Calamity => -2,
            TrineRole::PeachBlossom => 1,
            TrineRole::Death => 3,
            TrineRole::Dominance => 4,
            TrineRole::Travel => 6,
            TrineRole::Storage => 8,
        };
        let origin = group.members()[0];
        B::wrapping(origin.index() as i32 + offset)
    }
}

// =============================================================================
// Day-Stem Keyed Tables
// =============================================================================

/// 일간 → 지지 집합 (Stem::index() 순서)
pub type StemTable = [&'static [B]; 10];

pub fn stem_lookup(table: &StemTable, stem: S) -> &'static [B] {
    table[stem.index()]
}

/// 天乙贵人
pub const NOBLE_HELPER: StemTable = [
    &[B::Chou, B::Wei], // 甲
    &[B::Zi, B::Shen],  // 乙
    &[B::Hai, B::You],  // 丙
    &[B::Hai, B::You],  // 丁
    &[B::Chou, B::Wei], // 戊
    &[B::Zi, B::Shen],  // 己
    &[B::Chou, B::Wei], // 庚
    &[B::Yin, B::Wu],   // 辛
    &[B::Mao, B::Si],   // 壬
    &[B::Mao, B::Si],   // 癸
];

/// 太极贵人
pub const TAIJI_NOBLE: StemTable = [
    &[B::Zi, B::Wu],
    &[B::Zi, B::Wu],
    &[B::Mao, B::You],
    &[B::Mao, B::You],
    &[B::Chen, B::Xu, B::Chou, B::Wei],
    &[B::Chen, B::Xu, B::Chou, B::Wei],
    &[B::Yin, B::Hai],
    &[B::Yin, B::Hai],
    &[B::Si, B::Shen],
    &[B::Si, B::Shen],
];

/// 文昌贵人
pub const LITERARY_STAR: StemTable = [
    &[B::Si],
    &[B::Wu],
    &[B::Shen],
    &[B::You],
    &[B::Shen],
    &[B::You],
    &[B::Hai],
    &[B::Zi],
    &[B::Yin],
    &[B::Mao],
];

/// 禄神
pub const PROSPERITY: StemTable = [
    &[B::Yin],
    &[B::Mao],
    &[B::Si],
    &[B::Wu],
    &[B::Si],
    &[B::Wu],
    &[B::Shen],
    &[B::You],
    &[B::Hai],
    &[B::Zi],
];

/// 羊刃
pub const GOAT_BLADE: StemTable = [
    &[B::Mao],
    &[B::Chen],
    &[B::Wu],
    &[B::Wei],
    &[B::Wu],
    &[B::Wei],
    &[B::You],
    &[B::Xu],
    &[B::Zi],
    &[B::Chou],
];

/// 飞刃 (羊刃의 충)
pub const FLYING_BLADE: StemTable = [
    &[B::You],
    &[B::Xu],
    &[B::Zi],
    &[B::Chou],
    &[B::Zi],
    &[B::Chou],
    &[B::Mao],
    &[B::Chen],
    &[B::Wu],
    &[B::Wei],
];

/// 国印贵人
pub const NATIONAL_SEAL: StemTable = [
    &[B::Xu],
    &[B::Hai],
    &[B::Chou],
    &[B::Yin],
    &[B::Chou],
    &[B::Yin],
    &[B::Chen],
    &[B::Si],
    &[B::Wei],
    &[B::Shen],
];

/// 福星贵人
pub const FORTUNE_STAR: StemTable = [
    &[B::Yin, B::Zi],
    &[B::Mao, B::Chou],
    &[B::Yin, B::Zi],
    &[B::Hai],
    &[B::Shen],
    &[B::Wei],
    &[B::Wu],
    &[B::Si],
    &[B::Chen],
    &[B::Mao, B::Chou],
];

/// 金舆 (禄 +2)
pub const GOLDEN_CARRIAGE: StemTable = [
    &[B::Chen],
    &[B::Si],
    &[B::Wei],
    &[B::Shen],
    &[B::Wei],
    &[B::Shen],
    &[B::Xu],
    &[B::Hai],
    &[B::Chou],
    &[B::Yin],
];

/// 天厨贵人
pub const HEAVENLY_KITCHEN: StemTable = [
    &[B::Si],
    &[B::Wu],
    &[B::Si],
    &[B::Wu],
    &[B::Shen],
    &[B::You],
    &[B::Hai],
    &[B::Zi],
    &[B::Yin],
    &[B::Mao],
];

/// 红艳煞
pub const RED_FLIRT: StemTable = [
    &[B::Wu],
    &[B::Wu],
    &[B::Yin],
    &[B::Wei],
    &[B::Chen],
    &[B::Chen],
    &[B::Xu],
    &[B::You],
    &[B::Zi],
    &[B::Shen],
];

/// 学堂 (일간 오행의 장생지)
pub const ACADEMY: StemTable = [
    &[B::Hai],
    &[B::Wu],
    &[B::Yin],
    &[B::You],
    &[B::Yin],
    &[B::You],
    &[B::Si],
    &[B::Zi],
    &[B::Shen],
    &[B::Mao],
];

/// 流霞
pub const FLOWING_HAZE: StemTable = [
    &[B::You],
    &[B::Xu],
    &[B::Wei],
    &[B::Shen],
    &[B::Si],
    &[B::Wu],
    &[B::Chen],
    &[B::Mao],
    &[B::Hai],
    &[B::Yin],
];

// =============================================================================
// Exact Day Pillars
// =============================================================================

const fn p(stem: S, branch: B) -> StemBranchPair {
    StemBranchPair::new(stem, branch)
}

/// 魁罡
pub const KUIGANG_DAYS: &[StemBranchPair] =
    &[p(S::Geng, B::Xu), p(S::Geng, B::Chen), p(S::Wu, B::Xu), p(S::Ren, B::Chen)];

/// 阴差阳错
pub const YIN_YANG_ERROR_DAYS: &[StemBranchPair] = &[
    p(S::Bing, B::Zi),
    p(S::Ding, B::Chou),
    p(S::Wu, B::Yin),
    p(S::Xin, B::Mao),
    p(S::Ren, B::Chen),
    p(S::Gui, B::Si),
    p(S::Bing, B::Wu),
    p(S::Ding, B::Wei),
    p(S::Wu, B::Shen),
    p(S::Xin, B::You),
    p(S::Ren, B::Xu),
    p(S::Gui, B::Hai),
];

/// 十恶大败
pub const TEN_EVILS_DAYS: &[StemBranchPair] = &[
    p(S::Jia, B::Chen),
    p(S::Yi, B::Si),
    p(S::Ren, B::Shen),
    p(S::Bing, B::Shen),
    p(S::Ding, B::Hai),
    p(S::Geng, B::Chen),
    p(S::Wu, B::Xu),
    p(S::Gui, B::Hai),
    p(S::Xin, B::Si),
    p(S::Ji, B::Chou),
];

/// 孤鸾煞
pub const LONELY_PHOENIX_DAYS: &[StemBranchPair] = &[
    p(S::Yi, B::Si),
    p(S::Ding, B::Si),
    p(S::Xin, B::Hai),
    p(S::Wu, B::Shen),
    p(S::Jia, B::Yin),
    p(S::Ren, B::Zi),
    p(S::Bing, B::Wu),
    p(S::Wu, B::Wu),
];

/// 日德
pub const DAY_VIRTUE_DAYS: &[StemBranchPair] = &[
    p(S::Jia, B::Yin),
    p(S::Bing, B::Chen),
    p(S::Wu, B::Chen),
    p(S::Geng, B::Chen),
    p(S::Ren, B::Xu),
];

/// 金神
pub const GOLDEN_SPIRIT_DAYS: &[StemBranchPair] =
    &[p(S::Yi, B::Chou), p(S::Ji, B::Si), p(S::Gui, B::You)];

/// 八专
pub const EIGHT_EXCLUSIVES_DAYS: &[StemBranchPair] = &[
    p(S::Jia, B::Yin),
    p(S::Yi, B::Mao),
    p(S::Ding, B::Wei),
    p(S::Wu, B::Xu),
    p(S::Ji, B::Wei),
    p(S::Geng, B::Shen),
    p(S::Xin, B::You),
    p(S::Gui, B::Chou),
];

/// 九丑
pub const NINE_UGLY_DAYS: &[StemBranchPair] = &[
    p(S::Ding, B::You),
    p(S::Wu, B::Zi),
    p(S::Wu, B::Wu),
    p(S::Ji, B::Mao),
    p(S::Ji, B::You),
    p(S::Xin, B::Mao),
    p(S::Xin, B::You),
    p(S::Ren, B::Zi),
    p(S::Ren, B::Wu),
];

/// 日贵
pub const DAY_NOBLE_DAYS: &[StemBranchPair] =
    &[p(S::Ding, B::You), p(S::Ding, B::Hai), p(S::Gui, B::Si), p(S::Gui, B::Mao)];

// =============================================================================
// Month / Year Keyed Markers
// =============================================================================

/// 천간 또는 지지 표식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    Stem(S),
    Branch(B),
}

impl Marker {
    pub fn is_present_in(&self, chart: &Chart) -> bool {
        match self {
            Marker::Stem(stem) => chart.has_stem(*stem),
            Marker::Branch(branch) => chart.has_branch(*branch),
        }
    }
}

/// 天德贵人: 월지 → 표식
pub fn heavenly_virtue_marker(month_branch: B) -> Marker {
    match month_branch {
        B::Zi => Marker::Branch(B::Si),
        B::Chou => Marker::Stem(S::Geng),
        B::Yin => Marker::Stem(S::Ding),
        B::Mao => Marker::Branch(B::Shen),
        B::Chen => Marker::Stem(S::Ren),
        B::Si => Marker::Stem(S::Xin),
        B::Wu => Marker::Branch(B::Hai),
        B::Wei => Marker::Stem(S::Jia),
        B::Shen => Marker::Stem(S::Gui),
        B::You => Marker::Branch(B::Yin),
        B::Xu => Marker::Stem(S::Bing),
        B::Hai => Marker::Stem(S::Yi),
    }
}

/// 月德贵人: 월지 삼합 → 천간
pub fn monthly_virtue_stem(group: TrineGroup) -> S {
    match group {
        TrineGroup::ShenZiChen => S::Ren,
        TrineGroup::HaiMaoWei => S::Jia,
        TrineGroup::YinWuXu => S::Bing,
        TrineGroup::SiYouChou => S::Geng,
    }
}

/// 月德合: 月德 천간의 합
pub fn monthly_virtue_combo_stem(group: TrineGroup) -> S {
    match group {
        TrineGroup::ShenZiChen => S::Ding,
        TrineGroup::HaiMaoWei => S::Ji,
        TrineGroup::YinWuXu => S::Xin,
        TrineGroup::SiYouChou => S::Yi,
    }
}

/// 孤辰: 년지 계절 → 지지
pub fn lonely_star_branch(season: SeasonGroup) -> B {
    match season {
        SeasonGroup::Winter => B::Yin,
        SeasonGroup::Spring => B::Si,
        SeasonGroup::Summer => B::Shen,
        SeasonGroup::Autumn => B::Hai,
    }
}

/// 寡宿: 년지 계절 → 지지
pub fn widow_star_branch(season: SeasonGroup) -> B {
    match season {
        SeasonGroup::Winter => B::Xu,
        SeasonGroup::Spring => B::Chou,
        SeasonGroup::Summer => B::Chen,
        SeasonGroup::Autumn => B::Wei,
    }
}

/// 红鸾: 子→卯, 丑→寅 ... 역행
pub fn red_phoenix_branch(year_branch: B) -> B {
    B::wrapping(3 - year_branch.index() as i32)
}

/// 天喜: 红鸾의 충
pub fn heavenly_joy_branch(year_branch: B) -> B {
    B::wrapping(9 - year_branch.index() as i32)
}

/// 天赦: 월지 계절 → 일주
pub fn heavenly_pardon_day(season: SeasonGroup) -> StemBranchPair {
    match season {
        SeasonGroup::Spring => p(S::Wu, B::Yin),
        SeasonGroup::Summer => p(S::Jia, B::Wu),
        SeasonGroup::Autumn => p(S::Wu, B::Shen),
        SeasonGroup::Winter => p(S::Jia, B::Zi),
    }
}

/// 三奇
pub const HEAVEN_WONDERS: [S; 3] = [S::Jia, S::Wu, S::Geng];
pub const EARTH_WONDERS: [S; 3] = [S::Yi, S::Bing, S::Ding];
pub const HUMAN_WONDERS: [S; 3] = [S::Ren, S::Gui, S::Xin];

/// 天罗 / 地网
pub const HEAVEN_NET: [B; 2] = [B::Xu, B::Hai];
pub const EARTH_NET: [B; 2] = [B::Chen, B::Si];
