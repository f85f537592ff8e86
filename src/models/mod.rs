//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! 각 하위 모듈은 특정 도메인의 데이터 타입을 담당합니다:
//! - `space`: 스페이스(Space) 관련 구조체
//! - `article`: 아티클(Article) 관련 구조체
//! - `version`: 아티클 버전(ArticleVersion) 관련 구조체
//! - `search`: 검색 결과 관련 구조체
//!
//! 모든 모델은 `#[serde(rename_all = "camelCase")]`로 직렬화됩니다.
//! 디스크의 db.json과 HTTP 응답이 같은 camelCase 표현을 공유합니다.

pub mod article;
pub mod search;
pub mod space;
pub mod version;

// pub use: 하위 모듈의 항목을 현재 모듈에서 재공개합니다.
// 사용하는 쪽에서 `models::Article`처럼 짧게 쓸 수 있습니다.
pub use article::*;
pub use search::*;
pub use space::*;
pub use version::*;

/// `Option<Option<T>>` 필드용 역직렬화 헬퍼.
///
/// serde 기본 동작은 JSON `null`을 바깥쪽 `None`으로 접어버려
/// "필드 누락"과 "명시적 null"을 구분할 수 없습니다.
/// 이 헬퍼를 `#[serde(default, deserialize_with = "...")]`와 함께 쓰면
/// 필드 누락 = `None`, `null` = `Some(None)`, 값 = `Some(Some(v))`가 됩니다.
pub(crate) fn deserialize_explicit_null<'de, T, D>(
    deserializer: D,
) -> Result<Option<T>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}
