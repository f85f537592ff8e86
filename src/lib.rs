//! # wikindo 라이브러리 루트
//!
//! 위키 스타일 콘텐츠 서버의 핵심 모듈들을 공개합니다.
//! 바이너리(main.rs)와 통합 테스트(tests/)가 이 모듈 트리를 공유합니다.
//!
//! 각 모듈:
//! - `config`: 환경변수 기반 서버 설정
//! - `db`: JSON 파일 저장소와 그 위의 저장 계층(스페이스/아티클/버전/검색)
//! - `error`: 애플리케이션 에러 타입과 HTTP 응답 변환
//! - `models`: 데이터 모델 구조체
//! - `routes`: Axum 라우트 핸들러
//! - `services`: 보조 로직 (slug 생성 등)

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
