//! Predicate Patterns
//!
//! 규칙 판정의 네 가지 구조 패턴을 한 번씩만 구현한 고차 함수들.
//!
//! 1. 일간 기준 지지 포함 (`stem_keyed`)
//! 2. 삼합 존재 + 역할 지지 존재 (`trine_role`)
//! 3. 일주 정확 일치 (`day_pillar_in`)
//! 4. 교차 기둥 조합 (`any_branch_of`, `all_branches_of`, `all_stems_of` 조합기)

use crate::chart::{Branch, Chart, Stem, StemBranchPair};
use crate::tables::{stem_lookup, StemTable, TrineGroup, TrineRole};
use std::sync::Arc;

/// 순수 판정 함수 - 같은 차트에 항상 같은 결과
pub type Predicate = Arc<dyn Fn(&Chart) -> bool + Send + Sync>;

pub fn predicate<F>(f: F) -> Predicate
where
    F: Fn(&Chart) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// 차트의 네 지지 중 하나라도 집합에 있는지
pub fn any_branch_of(chart: &Chart, branches: &[Branch]) -> bool {
    chart.branches().iter().any(|b| branches.contains(b))
}

/// 집합의 지지가 모두 차트에 있는지
pub fn all_branches_of(chart: &Chart, branches: &[Branch]) -> bool {
    branches.iter().all(|b| chart.has_branch(*b))
}

/// 집합의 천간이 모두 차트에 있는지 (순서 무관)
pub fn all_stems_of(chart: &Chart, stems: &[Stem]) -> bool {
    stems.iter().all(|s| chart.has_stem(*s))
}

/// 패턴 1: 일간 테이블의 지지가 네 지지 중 하나에 있는지
pub fn stem_keyed(table: &'static StemTable) -> Predicate {
    predicate(move |chart| any_branch_of(chart, stem_lookup(table, chart.day.stem)))
}

/// 패턴 2: 차트에 있는 삼합 그룹 중 하나의 역할 지지도 차트에 있는지
pub fn trine_role(role: TrineRole) -> Predicate {
    predicate(move |chart| trine_role_matches(role, chart))
}

pub fn trine_role_matches(role: TrineRole, chart: &Chart) -> bool {
    TrineGroup::ALL
        .iter()
        .any(|group| group.is_present_in(chart) && chart.has_branch(role.branch_for(*group)))
}

/// 패턴 3: 일주가 목록 중 하나와 정확히 일치하는지
pub fn day_pillar_in(pairs: &'static [StemBranchPair]) -> Predicate {
    predicate(move |chart| pairs.contains(&chart.day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Branch as B;
    use crate::chart::Stem as S;
    use crate::tables::{KUIGANG_DAYS, NOBLE_HELPER};

    fn chart_with(day_stem: S, branches: [B; 4]) -> Chart {
        Chart::new(
            StemBranchPair::new(S::Yi, branches[0]),
            StemBranchPair::new(S::Yi, branches[1]),
            StemBranchPair::new(day_stem, branches[2]),
            StemBranchPair::new(S::Yi, branches[3]),
        )
    }

    #[test]
    fn test_stem_keyed_noble_helper() {
        let noble = stem_keyed(&NOBLE_HELPER);

        assert!(noble(&chart_with(S::Jia, [B::Chou, B::Yin, B::Yin, B::Yin])));
        assert!(noble(&chart_with(S::Jia, [B::Yin, B::Yin, B::Yin, B::Wei])));
        assert!(!noble(&chart_with(S::Jia, [B::Yin, B::Yin, B::Yin, B::Yin])));
        // 乙 일간은 子/申
        assert!(!noble(&chart_with(S::Yi, [B::Chou, B::Wei, B::Yin, B::Yin])));
        assert!(noble(&chart_with(S::Yi, [B::Shen, B::Yin, B::Yin, B::Yin])));
    }

    #[test]
    fn test_trine_role_dominance() {
        let chart = chart_with(S::Jia, [B::Shen, B::Zi, B::Chen, B::Zi]);
        assert!(trine_role_matches(TrineRole::Dominance, &chart));

        // 寅午戌 그룹만 있고 将星 午 없음
        let chart = chart_with(S::Jia, [B::Yin, B::Xu, B::Yin, B::Xu]);
        assert!(!trine_role_matches(TrineRole::Dominance, &chart));
        // 같은 차트에서 华盖 戌은 성립
        assert!(trine_role_matches(TrineRole::Storage, &chart));
    }

    #[test]
    fn test_trine_role_requires_role_branch() {
        // 申子辰 → 驿马 寅
        let with_horse = chart_with(S::Jia, [B::Shen, B::Yin, B::Mao, B::Mao]);
        assert!(trine_role_matches(TrineRole::Travel, &with_horse));

        // 亥卯未 → 驿马 巳 없음, 丑(巳酉丑) → 亥 없음
        let without = chart_with(S::Jia, [B::Mao, B::Wei, B::Chou, B::Mao]);
        assert!(!trine_role_matches(TrineRole::Travel, &without));
    }

    #[test]
    fn test_day_pillar_in() {
        let kuigang = day_pillar_in(KUIGANG_DAYS);
        let mut chart = chart_with(S::Geng, [B::Zi, B::Zi, B::Xu, B::Zi]);
        assert!(kuigang(&chart));
        chart.day = StemBranchPair::new(S::Geng, B::You);
        assert!(!kuigang(&chart));
        // 다른 기둥에 있는 것은 무관
        chart.year = StemBranchPair::new(S::Geng, B::Xu);
        assert!(!kuigang(&chart));
    }

    #[test]
    fn test_combinators() {
        let chart = chart_with(S::Jia, [B::Xu, B::Hai, B::Zi, B::Zi]);
        assert!(all_branches_of(&chart, &[B::Xu, B::Hai]));
        assert!(!all_branches_of(&chart, &[B::Chen, B::Si]));
        assert!(any_branch_of(&chart, &[B::Chen, B::Zi]));
        assert!(all_stems_of(&chart, &[S::Yi, S::Jia]));
        assert!(!all_stems_of(&chart, &[S::Jia, S::Wu, S::Geng]));
    }
}
