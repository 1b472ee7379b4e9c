//! 세션 쿠키 페이로드 모델

pub mod session_record;

pub use session_record::*;
