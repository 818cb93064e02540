//! Condition Catalog
//!
//! 신살 규칙 카탈로그. 규칙은 고유 id, 표시 이름, 분류, 오행, 위력(1~4),
//! 그리고 차트에 대한 순수 판정 함수로 구성된다.
//!
//! 카탈로그는 한 번 구성된 뒤 변경되지 않으며, 선언 순서가 평가 결과 순서가 된다.

pub mod patterns;
mod rules;

pub use patterns::Predicate;

use crate::chart::{Chart, Element};
use crate::error::{Result, ShenshaError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;
use tracing::info;

/// 신살 분류
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Auspicious,    // 吉神
    Inauspicious,  // 凶煞
    Extraordinary, // 特殊
}

impl Category {
    pub const ALL: [Category; 3] =
        [Category::Auspicious, Category::Inauspicious, Category::Extraordinary];
}

/// 규칙 자체의 오행 속성 (Special = 특정 오행에 속하지 않음)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ShenshaElement {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
    Special,
}

impl From<Element> for ShenshaElement {
    fn from(element: Element) -> Self {
        match element {
            Element::Metal => ShenshaElement::Metal,
            Element::Wood => ShenshaElement::Wood,
            Element::Water => ShenshaElement::Water,
            Element::Fire => ShenshaElement::Fire,
            Element::Earth => ShenshaElement::Earth,
        }
    }
}

/// 레어도 (위력 1~4에서 파생)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RarityTier {
    Common = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl RarityTier {
    pub fn from_power(power: u8) -> Option<RarityTier> {
        match power {
            1 => Some(RarityTier::Common),
            2 => Some(RarityTier::Rare),
            3 => Some(RarityTier::Epic),
            4 => Some(RarityTier::Legendary),
            _ => None,
        }
    }

    pub fn power(&self) -> u8 {
        *self as u8
    }
}

pub const MIN_POWER: u8 = 1;
pub const MAX_POWER: u8 = 4;

/// 카탈로그 항목
#[derive(Clone)]
pub struct ConditionRule {
    /// 고유 id (UI/기록/저장 계층의 키)
    pub id: &'static str,
    /// 표시 이름 (예: "天乙贵人")
    pub display_name: &'static str,
    pub english_name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub element: ShenshaElement,
    /// 위력 1~4
    pub power: u8,
    pub predicate: Predicate,
}

impl ConditionRule {
    pub fn new(
        id: &'static str,
        display_name: &'static str,
        english_name: &'static str,
        category: Category,
        element: ShenshaElement,
        power: u8,
        predicate: Predicate,
    ) -> Self {
        Self {
            id,
            display_name,
            english_name,
            description: "",
            category,
            element,
            power,
            predicate,
        }
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn matches(&self, chart: &Chart) -> bool {
        (self.predicate)(chart)
    }

    pub fn rarity(&self) -> RarityTier {
        RarityTier::from_power(self.power).unwrap_or(RarityTier::Common)
    }

    fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ShenshaError::InvalidRule {
                id: self.id.to_string(),
                reason: "id must not be empty".to_string(),
            });
        }
        if !(MIN_POWER..=MAX_POWER).contains(&self.power) {
            return Err(ShenshaError::InvalidRule {
                id: self.id.to_string(),
                reason: format!("power {} outside {}..={}", self.power, MIN_POWER, MAX_POWER),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for ConditionRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ConditionRule")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("category", &self.category)
            .field("element", &self.element)
            .field("power", &self.power)
            .finish_non_exhaustive()
    }
}

/// 불변 규칙 카탈로그
#[derive(Debug, Clone)]
pub struct Catalog {
    rules: Vec<ConditionRule>,
    index: HashMap<&'static str, usize>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// 표준 44개 규칙 카탈로그 구성
    pub fn standard() -> Result<Catalog> {
        let mut builder = Catalog::builder();
        for rule in rules::standard_rules() {
            builder.register(rule)?;
        }
        let catalog = builder.build();
        info!(rules = catalog.len(), "standard shensha catalog built");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ConditionRule> {
        self.index.get(id).map(|&i| &self.rules[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// 선언 순서대로 순회
    pub fn iter(&self) -> impl Iterator<Item = &ConditionRule> {
        self.rules.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.id)
    }

    /// 선언 순서상 위치 (결과 정렬용)
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &ConditionRule> {
        self.rules.iter().filter(move |r| r.category == category)
    }
}

/// 카탈로그 구성기 - 중복 id / 위력 범위를 등록 시점에 검사
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    rules: Vec<ConditionRule>,
    index: HashMap<&'static str, usize>,
}

impl CatalogBuilder {
    pub fn register(&mut self, rule: ConditionRule) -> Result<&mut Self> {
        rule.validate()?;
        if self.index.contains_key(rule.id) {
            return Err(ShenshaError::DuplicateRuleId(rule.id.to_string()));
        }
        self.index.insert(rule.id, self.rules.len());
        self.rules.push(rule);
        Ok(self)
    }

    pub fn build(self) -> Catalog {
        Catalog { rules: self.rules, index: self.index }
    }
}

static STANDARD_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// 프로세스 전역 표준 카탈로그 (최초 호출 시 1회 구성)
///
/// # Panics
///
/// 선언 테이블에 중복 id가 있으면 패닉합니다 (컴파일 타임에 고정된 데이터이므로
/// 정상적인 빌드에서는 발생하지 않음).
pub fn standard_catalog() -> &'static Catalog {
    STANDARD_CATALOG
        .get_or_init(|| Catalog::standard().expect("standard shensha catalog is malformed"))
}
