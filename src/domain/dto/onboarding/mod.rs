//! 온보딩 관련 DTO

pub mod onboarding_dto;

pub use onboarding_dto::*;
