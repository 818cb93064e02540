//! # shensha_core - Shensha Matching Engine
//!
//! 사주(四柱) 차트에 대해 신살(神煞) 규칙을 판정하는 결정적 엔진.
//!
//! ## Features
//! - 44개 표준 규칙, 네 가지 판정 패턴의 테이블 기반 선언
//! - 같은 차트 = 같은 결과 순서 (카탈로그 선언 순서)
//! - 불변 카탈로그 + 순수 판정 함수 → 잠금 없이 스레드 간 공유
//! - JSON API for the UI layer and worker offloading
//!
//! ## 사용법
//! ```rust
//! use shensha_core::{standard_catalog, Chart, Evaluator};
//!
//! let chart: Chart = "甲申 丙子 戊辰 庚子".parse().unwrap();
//! let evaluator = Evaluator::new(standard_catalog());
//! let matches = evaluator.evaluate_all(&chart);
//! assert!(matches.iter().any(|m| m.rule_id == "dominance_star"));
//! ```

// Catalog constructors take the full rule metadata row
#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod stats;
pub mod tables;


pub use catalog::{
    standard_catalog, Catalog, CatalogBuilder, Category, ConditionRule, Predicate, RarityTier,
    ShenshaElement,
};
pub use chart::{Branch, Chart, Element, ElementBalance, PillarPosition, Stem, StemBranchPair};
pub use config::{BatchConfig, EngineConfig, GeneratorConfig};
pub use error::{Result, ShenshaError};
pub use evaluator::{spawn_batch, Evaluator, MatchResult};
pub use generator::ChartGenerator;
pub use stats::{ActivationHistogram, Statistics};
pub use tables::{TrineGroup, TrineRole};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
