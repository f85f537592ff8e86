//! # slug 생성 서비스
//!
//! 이름/제목을 URL 친화적인 slug으로 바꾸고, 이미 사용 중인 slug과
//! 충돌하면 `-1`, `-2`, … 접미사를 붙여 유일성을 확보합니다.
//! 스페이스와 아티클의 slug 파생이 같은 규칙을 공유합니다.

/// 이름으로부터 사용 중이지 않은 slug을 만듭니다.
///
/// # 매개변수
/// - `name`: 원본 이름/제목
/// - `is_taken`: 해당 slug이 이미 존재하는지 판단하는 술어
///
/// # 예시
/// "My Page" → "my-page", 이미 있으면 "my-page-1", "my-page-2", …
pub fn unique_slug<F>(name: &str, is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let base = slug::slugify(name);
    let mut candidate = base.clone();
    let mut suffix = 1;
    while is_taken(&candidate) {
        candidate = format!("{}-{}", base, suffix);
        suffix += 1;
    }
    candidate
}
