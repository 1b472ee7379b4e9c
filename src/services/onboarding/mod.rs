//! 온보딩 서비스 모듈

pub mod onboarding_service;

pub use onboarding_service::*;
