//! Shensha Evaluator
//!
//! 카탈로그 전체를 차트에 적용해 성립한 규칙 목록을 만든다.
//!
//! - 상태 없음: 불변 카탈로그 참조 + 배치 설정만 보유
//! - 결과 순서 = 카탈로그 선언 순서 (같은 차트 → 같은 바이트열)
//! - 배치 평가는 차트별 독립 호출이므로 rayon으로 병렬화해도 순서가 보존된다

use crate::catalog::{Catalog, Category, ConditionRule, RarityTier, ShenshaElement};
use crate::chart::Chart;
use crate::config::BatchConfig;
use crate::error::{Result, ShenshaError};
use rayon::prelude::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::thread::JoinHandle;
use tracing::{debug, info};

/// 성립한 규칙 하나 (호출자 소유, 평범한 데이터)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MatchResult {
    pub rule_id: String,
    pub display_name: String,
    pub category: Category,
    pub element: ShenshaElement,
    pub power: u8,
    pub is_active: bool,
}

impl MatchResult {
    fn from_rule(rule: &ConditionRule) -> Self {
        Self {
            rule_id: rule.id.to_string(),
            display_name: rule.display_name.to_string(),
            category: rule.category,
            element: rule.element,
            power: rule.power,
            is_active: true,
        }
    }

    pub fn rarity(&self) -> RarityTier {
        RarityTier::from_power(self.power).unwrap_or(RarityTier::Common)
    }
}

/// 신살 평가기
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'c> {
    catalog: &'c Catalog,
    batch: BatchConfig,
}

impl<'c> Evaluator<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog, batch: BatchConfig::default() }
    }

    pub fn with_batch_config(catalog: &'c Catalog, batch: BatchConfig) -> Self {
        Self { catalog, batch }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// 모든 규칙 평가 - 성립한 것만 선언 순서로 반환
    pub fn evaluate_all(&self, chart: &Chart) -> Vec<MatchResult> {
        let results: Vec<MatchResult> = self
            .catalog
            .iter()
            .filter(|rule| rule.matches(chart))
            .map(MatchResult::from_rule)
            .collect();
        debug!(chart = %chart, matched = results.len(), "evaluated chart");
        results
    }

    /// 단일 규칙 평가
    pub fn evaluate_one(&self, rule_id: &str, chart: &Chart) -> Result<bool> {
        self.catalog
            .get(rule_id)
            .map(|rule| rule.matches(chart))
            .ok_or_else(|| ShenshaError::UnknownRuleId(rule_id.to_string()))
    }

    /// 지정한 규칙만 평가 (결과는 카탈로그 순서, 중복 id는 한 번만)
    ///
    /// 알 수 없는 id가 하나라도 있으면 아무것도 평가하지 않고 실패한다.
    pub fn evaluate_selected<S: AsRef<str>>(
        &self,
        rule_ids: &[S],
        chart: &Chart,
    ) -> Result<Vec<MatchResult>> {
        let mut positions = Vec::with_capacity(rule_ids.len());
        for id in rule_ids {
            let id = id.as_ref();
            let position = self
                .catalog
                .position(id)
                .ok_or_else(|| ShenshaError::UnknownRuleId(id.to_string()))?;
            positions.push(position);
        }
        positions.sort_unstable();
        positions.dedup();

        let selected: Vec<&ConditionRule> = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(i, _)| positions.binary_search(i).is_ok())
            .map(|(_, rule)| rule)
            .collect();

        Ok(selected
            .into_iter()
            .filter(|rule| rule.matches(chart))
            .map(MatchResult::from_rule)
            .collect())
    }

    /// 여러 차트 일괄 평가 - 출력 순서 = 입력 순서
    pub fn evaluate_batch(&self, charts: &[Chart]) -> Vec<Vec<MatchResult>> {
        let parallel = self.batch.parallel && charts.len() >= self.batch.min_parallel_batch;

        let results: Vec<Vec<MatchResult>> = if parallel {
            charts.par_iter().map(|chart| self.evaluate_all(chart)).collect()
        } else {
            charts.iter().map(|chart| self.evaluate_all(chart)).collect()
        };

        info!(charts = charts.len(), parallel, "batch evaluation finished");
        results
    }
}

/// 백그라운드 스레드에서 배치 평가 (UI 스레드 응답성 유지용)
///
/// 차트와 결과만 스레드 경계를 넘고, 판정 함수는 카탈로그 쪽에 남는다.
pub fn spawn_batch(
    catalog: &'static Catalog,
    batch: BatchConfig,
    charts: Vec<Chart>,
) -> JoinHandle<Vec<Vec<MatchResult>>> {
    std::thread::spawn(move || Evaluator::with_batch_config(catalog, batch).evaluate_batch(&charts))
}
