//! # Engine Configuration
//!
//! 배치 평가 / 차트 생성 설정.
//!
//! ## 사용법
//! ```rust
//! use shensha_core::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! assert!(config.validate().is_ok());
//! ```
//!
//! `SHENSHA_CONFIG_PATH` 환경 변수로 JSON/YAML 설정 파일을 지정할 수 있다.

use crate::error::{Result, ShenshaError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

pub const CONFIG_PATH_ENV: &str = "SHENSHA_CONFIG_PATH";

/// 배치 평가 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// rayon 병렬 평가 사용 여부
    pub parallel: bool,
    /// 이 개수 이상일 때만 병렬화
    pub min_parallel_batch: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { parallel: true, min_parallel_batch: 64 }
    }
}

/// 랜덤 차트 생성 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,
    /// 육십갑자 조합만 생성
    pub sexagenary_only: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { seed: 42, sexagenary_only: true }
    }
}

/// 전체 설정
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl EngineConfig {
    /// 테스트용 (병렬화 끔, 결과 비교 용이)
    pub fn sequential() -> Self {
        let mut cfg = Self::default();
        cfg.batch.parallel = false;
        cfg
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ShenshaError::Config(e.to_string()))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| ShenshaError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch.min_parallel_batch == 0 {
            return Err(ShenshaError::Config("batch.min_parallel_batch must be >= 1".to_string()));
        }
        Ok(())
    }

    /// 파일에서 로드 (.yaml/.yml → YAML, 그 외 JSON)
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ShenshaError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let config = if is_yaml { Self::from_yaml(&content)? } else { Self::from_json(&content)? };
        config.validate()?;
        Ok(config)
    }

    /// `SHENSHA_CONFIG_PATH`가 없거나 비어 있으면 기본값
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::from_file(Path::new(path)).map_err(|e| match e {
            ShenshaError::Config(msg) => ShenshaError::Config(format!("{CONFIG_PATH_ENV}='{path}': {msg}")),
            other => other,
        })
    }
}
