//! # 데이터 접근 계층 (Data Access Layer)
//!
//! 단일 JSON 파일에 저장된 위키 문서 전체를 다루는 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 데이터 작업을 수행합니다.
//!
//! 모든 변경 작업은 "전체 로드 → 메모리에서 변형 → 전체 저장"의
//! 한 사이클로 수행됩니다. 부분 쓰기는 없습니다.
//!
//! 각 하위 모듈:
//! - `store`: JSON 파일 저장소 (로드/저장/정규화)
//! - `spaces`: 스페이스 CRUD와 연쇄 삭제
//! - `articles`: 아티클 CRUD와 버전 계보 유지
//! - `versions`: 버전 조회와 복원(restore)
//! - `search`: 검색 점수 계산과 발췌 생성

pub mod articles;
pub mod search;
pub mod spaces;
pub mod store;
pub mod versions;

// 하위 모듈의 모든 공개 항목을 재공개(re-export)하여
// `crate::db::get_article`처럼 바로 접근할 수 있게 합니다.
pub use articles::*;
pub use search::*;
pub use spaces::*;
pub use store::*;
pub use versions::*;
