//! Statistics Aggregation
//!
//! 카탈로그 전체 또는 평가 결과에 대한 분류/오행/레어도별 집계.
//! 호출마다 새로 계산하며 캐시하지 않는다.

use crate::catalog::{Catalog, Category, RarityTier, ShenshaElement};
use crate::evaluator::MatchResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 집계 결과 (BTreeMap으로 출력 순서 고정)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Statistics {
    pub total: usize,
    pub total_power: u32,
    pub by_category: BTreeMap<Category, usize>,
    pub by_element: BTreeMap<ShenshaElement, usize>,
    pub by_tier: BTreeMap<RarityTier, usize>,
}

impl Statistics {
    fn record(&mut self, category: Category, element: ShenshaElement, power: u8) {
        self.total += 1;
        self.total_power += u32::from(power);
        *self.by_category.entry(category).or_insert(0) += 1;
        *self.by_element.entry(element).or_insert(0) += 1;
        let tier = RarityTier::from_power(power).unwrap_or(RarityTier::Common);
        *self.by_tier.entry(tier).or_insert(0) += 1;
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut stats = Statistics::default();
        for rule in catalog.iter() {
            stats.record(rule.category, rule.element, rule.power);
        }
        stats
    }

    pub fn from_results(results: &[MatchResult]) -> Self {
        let mut stats = Statistics::default();
        for result in results {
            stats.record(result.category, result.element, result.power);
        }
        stats
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    pub fn element_count(&self, element: ShenshaElement) -> usize {
        self.by_element.get(&element).copied().unwrap_or(0)
    }

    pub fn tier_count(&self, tier: RarityTier) -> usize {
        self.by_tier.get(&tier).copied().unwrap_or(0)
    }

    /// 길신 - 흉살 위력 차이 (게임 내 가중치용)
    pub fn net_fortune(results: &[MatchResult]) -> i32 {
        results
            .iter()
            .map(|r| match r.category {
                Category::Auspicious => i32::from(r.power),
                Category::Inauspicious => -i32::from(r.power),
                Category::Extraordinary => 0,
            })
            .sum()
    }
}

/// 배치 결과에 대한 규칙별 성립 횟수 (밸런스 조정용)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActivationHistogram {
    pub charts: usize,
    /// 카탈로그 선언 순서
    pub counts: Vec<(String, usize)>,
}

impl ActivationHistogram {
    pub fn from_batch(catalog: &Catalog, batch: &[Vec<MatchResult>]) -> Self {
        let mut counts: Vec<(String, usize)> =
            catalog.ids().map(|id| (id.to_string(), 0)).collect();

        for results in batch {
            for result in results {
                if let Some(position) = catalog.position(&result.rule_id) {
                    counts[position].1 += 1;
                }
            }
        }

        Self { charts: batch.len(), counts }
    }

    pub fn count(&self, rule_id: &str) -> usize {
        self.counts.iter().find(|(id, _)| id == rule_id).map(|(_, c)| *c).unwrap_or(0)
    }

    /// 성립 비율 (0.0 ~ 1.0)
    pub fn rate(&self, rule_id: &str) -> f64 {
        if self.charts == 0 {
            return 0.0;
        }
        self.count(rule_id) as f64 / self.charts as f64
    }
}
