//! # JSON 파일 저장소 모듈
//!
//! 위키 데이터 전체(스페이스/아티클/버전)를 단일 JSON 문서로 디스크에
//! 저장하고 불러오는 계층입니다.
//!
//! ## 설계
//! - 저장 매체는 `Storage` 트레이트 뒤로 추상화되어 있습니다.
//!   저장 계층(spaces/articles/...)은 `JsonDb`만 알고, 실제 파일 I/O는
//!   `FileStorage`가 담당합니다. 다른 저장 방식으로 교체해도 저장 계층
//!   로직은 건드리지 않습니다.
//! - 모든 변경은 `load() → 변형 → save()`의 전체 사이클이며, 이 사이클은
//!   `JsonDb::lock()`의 단일 쓰기 락으로 직렬화됩니다. 락 없이 거의 동시에
//!   들어온 두 쓰기가 서로를 덮어쓰는(lost-update) 것을 막기 위한 장치입니다.
//!
//! ## 복구 정책
//! 백킹 파일이 파손되어 파싱에 실패하면 에러를 로그로 남기고
//! 기본 문서로 재초기화합니다. 호출자에게는 에러로 드러나지 않습니다.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::AppError;
use crate::models::{Article, ArticleVersion, Space};

/// 디스크에 저장되는 문서 전체의 모양.
///
/// ```json
/// { "articles": [...], "spaces": [...], "articleVersions": [...] }
/// ```
///
/// `#[serde(default)]`로 예전 문서에서 누락된 컬렉션(특히 articleVersions)을
/// 빈 배열로 보정합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Database {
    pub articles: Vec<Article>,
    pub spaces: Vec<Space>,
    pub article_versions: Vec<ArticleVersion>,
}

/// 저장 매체 추상화. `load`/`save` 계약만 제공합니다.
#[async_trait]
pub trait Storage: Send + Sync {
    /// 백킹 문서의 원문을 읽습니다. 아직 없으면 `Ok(None)`.
    async fn load(&self) -> Result<Option<String>, AppError>;
    /// 백킹 문서 전체를 덮어씁니다.
    async fn save(&self, raw: &str) -> Result<(), AppError>;
}

/// 단일 JSON 파일에 쓰는 기본 저장 매체.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn load(&self) -> Result<Option<String>, AppError> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(Some(raw)),
            // 파일이 아직 없는 것은 에러가 아니라 "첫 실행"입니다.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, raw: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, raw).await?;
        Ok(())
    }
}

/// 저장 계층 전체가 공유하는 데이터베이스 핸들.
///
/// clone해도 같은 저장 매체와 같은 쓰기 락을 가리킵니다.
#[derive(Clone)]
pub struct JsonDb {
    storage: Arc<dyn Storage>,
    write_lock: Arc<tokio::sync::Mutex<()>>,
}

impl JsonDb {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            write_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// 파일 경로로 여는 편의 생성자.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileStorage::new(path)))
    }

    /// 문서 전체를 로드합니다.
    ///
    /// - 파일이 없으면: 기본 문서를 만들어 디스크에 기록하고 반환합니다.
    /// - 파일이 파손되었으면: 로그를 남기고 기본 문서로 재초기화합니다.
    /// - 정상이면: 정규화(normalize)를 거쳐 반환합니다.
    pub async fn load(&self) -> Result<Database, AppError> {
        let raw = match self.storage.load().await? {
            Some(raw) => raw,
            None => {
                let data = default_database();
                self.save(&data).await?;
                return Ok(data);
            }
        };

        match serde_json::from_str::<Database>(&raw) {
            Ok(mut data) => {
                normalize(&mut data);
                Ok(data)
            }
            Err(err) => {
                // 데이터 유실을 감수하고 재초기화합니다. 호출자에게는 에러가 아닙니다.
                tracing::error!("Failed reading backing file, reinitializing: {}", err);
                let data = default_database();
                self.save(&data).await?;
                Ok(data)
            }
        }
    }

    /// 문서 전체를 직렬화하여 디스크에 덮어씁니다.
    pub async fn save(&self, data: &Database) -> Result<(), AppError> {
        let raw = serde_json::to_string_pretty(data)?;
        self.storage.save(&raw).await
    }

    /// 단일 쓰기 락을 잡습니다.
    ///
    /// 변경 작업은 load-변형-save 사이클 전체 동안 이 가드를 들고 있어야 합니다.
    pub async fn lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}

/// 현재 시각의 ISO-8601 UTC 문자열 (밀리초 정밀도).
///
/// 문자열 사전순 비교가 시간순 비교와 일치하도록 항상 같은 포맷을 씁니다.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn default_space() -> Space {
    Space {
        id: 1,
        slug: "default".to_string(),
        name: "Default Space".to_string(),
        home_page_slug: None,
        created_at: now_iso(),
    }
}

/// 첫 실행 또는 복구 시 사용하는 기본 문서:
/// 빈 아티클/버전 + 기본 스페이스 하나.
pub fn default_database() -> Database {
    Database {
        articles: Vec::new(),
        spaces: vec![default_space()],
        article_versions: Vec::new(),
    }
}

/// 예전 포맷의 문서를 현재 포맷으로 보정합니다.
///
/// - `spaces`가 비어 있으면 기본 스페이스를 주입합니다.
/// - `spaceId`가 없던 아티클(역직렬화 기본값 0)은 첫 스페이스 소속으로 봅니다.
///
/// `homePageSlug`와 `articleVersions`의 누락은 serde 기본값이 처리합니다.
pub fn normalize(data: &mut Database) {
    if data.spaces.is_empty() {
        data.spaces.push(default_space());
    }
    let first_space_id = data.spaces[0].id;
    for article in &mut data.articles {
        if article.space_id == 0 {
            article.space_id = first_space_id;
        }
    }
}
