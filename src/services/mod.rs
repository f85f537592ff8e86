//! # 서비스 모듈
//!
//! 라우트와 저장 계층 사이의 보조 로직을 모아둔 모듈입니다.
//! - `slugs`: 이름 → URL 친화적 slug 변환과 충돌 회피

pub mod slugs;

pub use slugs::*;
