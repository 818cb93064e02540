// 표준 신살 규칙 선언
// 각 규칙은 패턴 헬퍼 + 테이블 한 줄. 선언 순서 = 결과 순서.

use super::patterns::{
    all_branches_of, all_stems_of, day_pillar_in, predicate, stem_keyed, trine_role,
};
use super::{Category, ConditionRule, ShenshaElement};
use crate::chart::Element;
use crate::tables::*;

use Category::{Auspicious, Extraordinary, Inauspicious};
use ShenshaElement::Special;

fn el(element: Element) -> ShenshaElement {
    element.into()
}

pub(super) fn standard_rules() -> Vec<ConditionRule> {
    let mut rules = Vec::with_capacity(44);
    rules.extend(stem_keyed_rules());
    rules.extend(trine_rules());
    rules.extend(day_pillar_rules());
    rules.extend(cross_pillar_rules());
    rules
}

/// 패턴 1: 일간 기준
fn stem_keyed_rules() -> Vec<ConditionRule> {
    vec![
        ConditionRule::new(
            "tianyi_noble",
            "天乙贵人",
            "Heavenly Noble Helper",
            Auspicious,
            el(Element::Earth),
            4,
            stem_keyed(&NOBLE_HELPER),
        )
        .with_description("A noble patron branch for the day stem appears in the chart"),
        ConditionRule::new(
            "taiji_noble",
            "太极贵人",
            "Taiji Noble",
            Auspicious,
            Special,
            3,
            stem_keyed(&TAIJI_NOBLE),
        )
        .with_description("The day stem's taiji branch appears in the chart"),
        ConditionRule::new(
            "literary_star",
            "文昌贵人",
            "Literary Star",
            Auspicious,
            el(Element::Water),
            2,
            stem_keyed(&LITERARY_STAR),
        )
        .with_description("The day stem's literary branch appears in the chart"),
        ConditionRule::new(
            "prosperity",
            "禄神",
            "Prosperity Star",
            Auspicious,
            el(Element::Metal),
            3,
            stem_keyed(&PROSPERITY),
        )
        .with_description("The day stem's prosperity (lu) branch appears in the chart"),
        ConditionRule::new(
            "goat_blade",
            "羊刃",
            "Goat Blade",
            Inauspicious,
            el(Element::Metal),
            3,
            stem_keyed(&GOAT_BLADE),
        )
        .with_description("The day stem's blade branch appears in the chart"),
        ConditionRule::new(
            "flying_blade",
            "飞刃",
            "Flying Blade",
            Inauspicious,
            el(Element::Metal),
            2,
            stem_keyed(&FLYING_BLADE),
        )
        .with_description("The branch clashing the day stem's blade appears in the chart"),
        ConditionRule::new(
            "national_seal",
            "国印贵人",
            "National Seal",
            Auspicious,
            el(Element::Earth),
            2,
            stem_keyed(&NATIONAL_SEAL),
        )
        .with_description("The day stem's seal branch appears in the chart"),
        ConditionRule::new(
            "fortune_star",
            "福星贵人",
            "Fortune Star",
            Auspicious,
            el(Element::Water),
            2,
            stem_keyed(&FORTUNE_STAR),
        )
        .with_description("A fortune branch for the day stem appears in the chart"),
        ConditionRule::new(
            "golden_carriage",
            "金舆",
            "Golden Carriage",
            Auspicious,
            el(Element::Metal),
            2,
            stem_keyed(&GOLDEN_CARRIAGE),
        )
        .with_description("The branch two steps after the day stem's prosperity appears"),
        ConditionRule::new(
            "heavenly_kitchen",
            "天厨贵人",
            "Heavenly Kitchen",
            Auspicious,
            el(Element::Earth),
            1,
            stem_keyed(&HEAVENLY_KITCHEN),
        )
        .with_description("The day stem's kitchen branch appears in the chart"),
        ConditionRule::new(
            "red_flirt",
            "红艳煞",
            "Red Flirt",
            Extraordinary,
            el(Element::Fire),
            2,
            stem_keyed(&RED_FLIRT),
        )
        .with_description("The day stem's red-flirt branch appears in the chart"),
        ConditionRule::new(
            "academy",
            "学堂",
            "Academy",
            Auspicious,
            el(Element::Wood),
            1,
            stem_keyed(&ACADEMY),
        )
        .with_description("The growth branch of the day stem's element appears in the chart"),
        ConditionRule::new(
            "flowing_haze",
            "流霞",
            "Flowing Haze",
            Inauspicious,
            el(Element::Water),
            1,
            stem_keyed(&FLOWING_HAZE),
        )
        .with_description("The day stem's haze branch appears in the chart"),
    ]
}

/// 패턴 2: 삼합 역할
fn trine_rules() -> Vec<ConditionRule> {
    vec![
        ConditionRule::new(
            "peach_blossom",
            "桃花",
            "Peach Blossom",
            Extraordinary,
            el(Element::Wood),
            2,
            trine_role(TrineRole::PeachBlossom),
        )
        .with_description("A trine group is present together with its peach-blossom branch"),
        ConditionRule::new(
            "travel_horse",
            "驿马",
            "Travel Horse",
            Extraordinary,
            el(Element::Fire),
            2,
            trine_role(TrineRole::Travel),
        )
        .with_description("A trine group is present together with its travel branch"),
        ConditionRule::new(
            "dominance_star",
            "将星",
            "General Star",
            Auspicious,
            el(Element::Metal),
            3,
            trine_role(TrineRole::Dominance),
        )
        .with_description("A trine group is present together with its general-star branch"),
        ConditionRule::new(
            "storage_canopy",
            "华盖",
            "Canopy",
            Extraordinary,
            el(Element::Earth),
            2,
            trine_role(TrineRole::Storage),
        )
        .with_description("A trine group is present together with its storage branch"),
        ConditionRule::new(
            "robbery_spirit",
            "劫煞",
            "Robbery Spirit",
            Inauspicious,
            el(Element::Fire),
            3,
            trine_role(TrineRole::Robbery),
        )
        .with_description("A trine group is present together with its robbery branch"),
        ConditionRule::new(
            "death_spirit",
            "亡神",
            "Death Spirit",
            Inauspicious,
            el(Element::Water),
            2,
            trine_role(TrineRole::Death),
        )
        .with_description("A trine group is present together with its death-spirit branch"),
        ConditionRule::new(
            "calamity_spirit",
            "灾煞",
            "Calamity Spirit",
            Inauspicious,
            el(Element::Fire),
            2,
            trine_role(TrineRole::Calamity),
        )
        .with_description("A trine group is present together with its calamity branch"),
    ]
}

/// 패턴 3: 일주 일치
fn day_pillar_rules() -> Vec<ConditionRule> {
    vec![
        ConditionRule::new(
            "kuigang",
            "魁罡",
            "Kuigang",
            Extraordinary,
            el(Element::Metal),
            4,
            day_pillar_in(KUIGANG_DAYS),
        )
        .with_description("Day pillar is one of 庚戌, 庚辰, 戊戌, 壬辰"),
        ConditionRule::new(
            "yin_yang_error",
            "阴差阳错",
            "Yin-Yang Error",
            Inauspicious,
            Special,
            2,
            day_pillar_in(YIN_YANG_ERROR_DAYS),
        )
        .with_description("Day pillar is one of the twelve yin-yang error days"),
        ConditionRule::new(
            "ten_evils",
            "十恶大败",
            "Ten Evils",
            Inauspicious,
            el(Element::Earth),
            3,
            day_pillar_in(TEN_EVILS_DAYS),
        )
        .with_description("Day pillar is one of the ten great-defeat days"),
        ConditionRule::new(
            "lonely_phoenix",
            "孤鸾煞",
            "Lonely Phoenix",
            Inauspicious,
            el(Element::Wood),
            2,
            day_pillar_in(LONELY_PHOENIX_DAYS),
        )
        .with_description("Day pillar is one of the eight lonely-phoenix days"),
        ConditionRule::new(
            "day_virtue",
            "日德",
            "Day Virtue",
            Auspicious,
            el(Element::Fire),
            3,
            day_pillar_in(DAY_VIRTUE_DAYS),
        )
        .with_description("Day pillar is one of 甲寅, 丙辰, 戊辰, 庚辰, 壬戌"),
        ConditionRule::new(
            "golden_spirit",
            "金神",
            "Golden Spirit",
            Extraordinary,
            el(Element::Metal),
            3,
            day_pillar_in(GOLDEN_SPIRIT_DAYS),
        )
        .with_description("Day pillar is one of 乙丑, 己巳, 癸酉"),
        ConditionRule::new(
            "eight_exclusives",
            "八专",
            "Eight Exclusives",
            Extraordinary,
            el(Element::Wood),
            1,
            day_pillar_in(EIGHT_EXCLUSIVES_DAYS),
        )
        .with_description("Day pillar is one of the eight exclusive days"),
        ConditionRule::new(
            "nine_ugly",
            "九丑",
            "Nine Ugly",
            Inauspicious,
            el(Element::Water),
            1,
            day_pillar_in(NINE_UGLY_DAYS),
        )
        .with_description("Day pillar is one of the nine ugly days"),
        ConditionRule::new(
            "day_noble",
            "日贵",
            "Day Noble",
            Auspicious,
            el(Element::Fire),
            3,
            day_pillar_in(DAY_NOBLE_DAYS),
        )
        .with_description("Day pillar is one of 丁酉, 丁亥, 癸巳, 癸卯"),
    ]
}

/// 패턴 4: 월지/년지 기준 교차 판정, 조합
fn cross_pillar_rules() -> Vec<ConditionRule> {
    vec![
        ConditionRule::new(
            "heavenly_virtue",
            "天德贵人",
            "Heavenly Virtue",
            Auspicious,
            Special,
            4,
            predicate(|chart| heavenly_virtue_marker(chart.month.branch).is_present_in(chart)),
        )
        .with_description("The month branch's heavenly-virtue stem or branch appears"),
        ConditionRule::new(
            "monthly_virtue",
            "月德贵人",
            "Monthly Virtue",
            Auspicious,
            Special,
            3,
            predicate(|chart| {
                chart.has_stem(monthly_virtue_stem(chart.month.branch.trine()))
            }),
        )
        .with_description("The month trine's virtue stem appears among the stems"),
        ConditionRule::new(
            "monthly_virtue_combo",
            "月德合",
            "Monthly Virtue Combination",
            Auspicious,
            el(Element::Earth),
            2,
            predicate(|chart| {
                chart.has_stem(monthly_virtue_combo_stem(chart.month.branch.trine()))
            }),
        )
        .with_description("The stem combining with the monthly-virtue stem appears"),
        ConditionRule::new(
            "heavenly_doctor",
            "天医",
            "Heavenly Doctor",
            Auspicious,
            el(Element::Wood),
            2,
            predicate(|chart| chart.has_branch(chart.month.branch.previous())),
        )
        .with_description("The branch preceding the month branch appears"),
        ConditionRule::new(
            "lonely_star",
            "孤辰",
            "Lonely Star",
            Inauspicious,
            el(Element::Earth),
            1,
            predicate(|chart| {
                chart.has_branch(lonely_star_branch(chart.year.branch.season()))
            }),
        )
        .with_description("The year season's lonely branch appears"),
        ConditionRule::new(
            "widow_star",
            "寡宿",
            "Widow Star",
            Inauspicious,
            el(Element::Earth),
            1,
            predicate(|chart| {
                chart.has_branch(widow_star_branch(chart.year.branch.season()))
            }),
        )
        .with_description("The year season's widow branch appears"),
        ConditionRule::new(
            "red_phoenix",
            "红鸾",
            "Red Phoenix",
            Extraordinary,
            el(Element::Fire),
            2,
            predicate(|chart| chart.has_branch(red_phoenix_branch(chart.year.branch))),
        )
        .with_description("The year branch's red-phoenix branch appears"),
        ConditionRule::new(
            "heavenly_joy",
            "天喜",
            "Heavenly Joy",
            Auspicious,
            el(Element::Fire),
            2,
            predicate(|chart| chart.has_branch(heavenly_joy_branch(chart.year.branch))),
        )
        .with_description("The year branch's heavenly-joy branch appears"),
        ConditionRule::new(
            "heavenly_pardon",
            "天赦",
            "Heavenly Pardon",
            Auspicious,
            Special,
            4,
            predicate(|chart| {
                chart.day == heavenly_pardon_day(chart.month.branch.season())
            }),
        )
        .with_description("Day pillar is the pardon day of the month's season"),
        ConditionRule::new(
            "heaven_wonders",
            "天上三奇",
            "Heavenly Three Wonders",
            Extraordinary,
            Special,
            4,
            predicate(|chart| all_stems_of(chart, &HEAVEN_WONDERS)),
        )
        .with_description("Stems 甲, 戊 and 庚 all appear"),
        ConditionRule::new(
            "earth_wonders",
            "地下三奇",
            "Earthly Three Wonders",
            Extraordinary,
            Special,
            4,
            predicate(|chart| all_stems_of(chart, &EARTH_WONDERS)),
        )
        .with_description("Stems 乙, 丙 and 丁 all appear"),
        ConditionRule::new(
            "human_wonders",
            "人中三奇",
            "Human Three Wonders",
            Extraordinary,
            Special,
            4,
            predicate(|chart| all_stems_of(chart, &HUMAN_WONDERS)),
        )
        .with_description("Stems 壬, 癸 and 辛 all appear"),
        ConditionRule::new(
            "heaven_net",
            "天罗",
            "Heaven Net",
            Inauspicious,
            el(Element::Fire),
            2,
            predicate(|chart| all_branches_of(chart, &HEAVEN_NET)),
        )
        .with_description("Branches 戌 and 亥 both appear"),
        ConditionRule::new(
            "earth_net",
            "地网",
            "Earth Net",
            Inauspicious,
            el(Element::Water),
            2,
            predicate(|chart| all_branches_of(chart, &EARTH_NET)),
        )
        .with_description("Branches 辰 and 巳 both appear"),
        ConditionRule::new(
            "year_breaker",
            "岁破",
            "Year Breaker",
            Inauspicious,
            Special,
            3,
            predicate(|chart| chart.has_branch(chart.year.branch.opposite())),
        )
        .with_description("The branch clashing the year branch appears"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Chart, Stem as S, StemBranchPair};
    use crate::chart::Branch as B;

    fn rule(id: &str) -> ConditionRule {
        standard_rules().into_iter().find(|r| r.id == id).unwrap()
    }

    fn chart(text: &str) -> Chart {
        text.parse().unwrap()
    }

    #[test]
    fn test_pattern_group_sizes() {
        assert_eq!(stem_keyed_rules().len(), 13);
        assert_eq!(trine_rules().len(), 7);
        assert_eq!(day_pillar_rules().len(), 9);
        assert_eq!(cross_pillar_rules().len(), 15);
    }

    #[test]
    fn test_kuigang() {
        let kuigang = rule("kuigang");
        assert!(kuigang.matches(&chart("甲子 乙丑 庚戌 丁卯")));
        assert!(kuigang.matches(&chart("甲子 乙丑 壬辰 丁卯")));
        assert!(!kuigang.matches(&chart("甲子 乙丑 庚酉 丁卯")));
    }

    #[test]
    fn test_heavenly_virtue_stem_and_branch_markers() {
        let virtue = rule("heavenly_virtue");
        // 寅월 → 丁
        assert!(virtue.matches(&chart("甲子 丙寅 戊辰 丁巳")));
        assert!(!virtue.matches(&chart("甲子 丙寅 戊辰 己巳")));
        // 卯월 → 申 (지지)
        assert!(virtue.matches(&chart("甲子 丁卯 戊申 己未")));
    }

    #[test]
    fn test_monthly_virtue() {
        let virtue = rule("monthly_virtue");
        // 午월 (寅午戌) → 丙
        assert!(virtue.matches(&chart("丙子 甲午 戊辰 己未")));
        assert!(!virtue.matches(&chart("甲子 甲午 戊辰 己未")));
        let combo = rule("monthly_virtue_combo");
        // 子월 (申子辰) → 丁
        assert!(combo.matches(&chart("甲子 甲子 丁卯 己未")));
    }

    #[test]
    fn test_year_keyed_rules() {
        // 子년: 孤辰 寅, 寡宿 戌, 红鸾 卯, 天喜 酉, 岁破 午
        let c = chart("甲子 丙寅 戊戌 己卯");
        assert!(rule("lonely_star").matches(&c));
        assert!(rule("widow_star").matches(&c));
        assert!(rule("red_phoenix").matches(&c));
        assert!(!rule("heavenly_joy").matches(&c));
        assert!(!rule("year_breaker").matches(&c));

        let c = chart("甲子 丙午 戊申 癸酉");
        assert!(rule("heavenly_joy").matches(&c));
        assert!(rule("year_breaker").matches(&c));
    }

    #[test]
    fn test_heavenly_pardon() {
        let pardon = rule("heavenly_pardon");
        // 봄(寅월) 戊寅일
        assert!(pardon.matches(&chart("甲子 丙寅 戊寅 己未")));
        // 여름 달의 戊寅일은 불성립
        assert!(!pardon.matches(&chart("甲子 庚午 戊寅 己未")));
        assert!(pardon.matches(&chart("甲子 丙子 甲子 己未")));
    }

    #[test]
    fn test_three_wonders_any_order() {
        let wonders = rule("heaven_wonders");
        assert!(wonders.matches(&chart("庚子 甲寅 戊辰 癸亥")));
        assert!(!wonders.matches(&chart("庚子 甲寅 己巳 癸亥")));
        assert!(rule("human_wonders").matches(&chart("辛卯 壬辰 癸巳 甲午")));
        assert!(rule("earth_wonders").matches(&chart("乙丑 丙寅 丁卯 丁卯")));
    }

    #[test]
    fn test_nets_and_doctor() {
        assert!(rule("heaven_net").matches(&chart("甲戌 乙亥 丙子 丁丑")));
        assert!(!rule("earth_net").matches(&chart("甲戌 乙亥 丙子 丁丑")));
        assert!(rule("earth_net").matches(&chart("甲辰 乙巳 丙子 丁丑")));
        // 寅월 → 天医 丑
        assert!(rule("heavenly_doctor").matches(&chart("甲子 丙寅 丙子 丁丑")));
        assert!(!rule("heavenly_doctor").matches(&chart("甲子 丙寅 丙子 丁卯")));
    }

    #[test]
    fn test_stem_keyed_uses_day_stem_only() {
        let noble = rule("tianyi_noble");
        // 甲 일간 + 丑
        let with_jia = Chart::new(
            StemBranchPair::new(S::Gui, B::Chou),
            StemBranchPair::new(S::Gui, B::Yin),
            StemBranchPair::new(S::Jia, B::Yin),
            StemBranchPair::new(S::Gui, B::Yin),
        );
        assert!(noble.matches(&with_jia));

        // 년간이 甲이어도 일간이 아니면 무관
        let year_jia = Chart::new(
            StemBranchPair::new(S::Jia, B::Chou),
            StemBranchPair::new(S::Gui, B::Yin),
            StemBranchPair::new(S::Ding, B::Yin),
            StemBranchPair::new(S::Gui, B::Yin),
        );
        assert!(!noble.matches(&year_jia));
    }
}
