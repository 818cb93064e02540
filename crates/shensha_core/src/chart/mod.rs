// 사주 차트 모델
// 천간/지지 폐쇄 열거형, 오행 테이블, 차트 파싱

pub mod parse;
pub mod types;

pub use types::*;
