use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShenshaError {
    /// 천간/지지 기호가 아님 (차트 파싱 경계에서만 발생)
    #[error("Invalid {kind} value: '{value}'")]
    InvalidEnumValue { kind: &'static str, value: String },

    #[error("Invalid pillar count: expected 4, found {found}")]
    InvalidPillarCount { found: usize },

    /// 카탈로그 구성 오류 - 시작 시점에 치명적
    #[error("Duplicate rule id: {0}")]
    DuplicateRuleId(String),

    #[error("Unknown rule id: {0}")]
    UnknownRuleId(String),

    #[error("Invalid rule '{id}': {reason}")]
    InvalidRule { id: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ShenshaError {
    pub(crate) fn invalid_stem(value: &str) -> Self {
        ShenshaError::InvalidEnumValue { kind: "stem", value: value.to_string() }
    }

    pub(crate) fn invalid_branch(value: &str) -> Self {
        ShenshaError::InvalidEnumValue { kind: "branch", value: value.to_string() }
    }

    /// API 응답용 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            ShenshaError::InvalidEnumValue { .. } | ShenshaError::InvalidPillarCount { .. } => {
                "INVALID_CHART"
            }
            ShenshaError::UnknownRuleId(_) => "UNKNOWN_RULE",
            ShenshaError::Serialization(_) => "INVALID_JSON",
            ShenshaError::DuplicateRuleId(_) | ShenshaError::InvalidRule { .. } => "CATALOG_ERROR",
            ShenshaError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// 호출자가 입력을 고쳐서 재시도할 수 있는 에러인지
    pub fn is_caller_error(&self) -> bool {
        match self {
            ShenshaError::InvalidEnumValue { .. } => true,
            ShenshaError::InvalidPillarCount { .. } => true,
            ShenshaError::UnknownRuleId(_) => true,
            ShenshaError::Serialization(_) => true,
            ShenshaError::Config(_) => true,
            ShenshaError::DuplicateRuleId(_) => false,
            ShenshaError::InvalidRule { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShenshaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ShenshaError::invalid_stem("X").code(), "INVALID_CHART");
        assert_eq!(ShenshaError::UnknownRuleId("nope".into()).code(), "UNKNOWN_RULE");
        assert_eq!(ShenshaError::DuplicateRuleId("a".into()).code(), "CATALOG_ERROR");
    }

    #[test]
    fn test_display() {
        let err = ShenshaError::invalid_branch("午午");
        assert_eq!(err.to_string(), "Invalid branch value: '午午'");
        assert!(err.is_caller_error());
        assert!(!ShenshaError::DuplicateRuleId("a".into()).is_caller_error());
    }
}
