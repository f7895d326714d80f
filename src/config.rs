//! 패턴 생성 옵션 (JSON 로드 지원)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::PatternError;

/// 패턴 생성 옵션
///
/// 모든 값의 기본값은 `false`이며, JSON에서 빠진 키도 `false`로 처리된다.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegExpOptions {
    /// 앞 글자들에 포함된 단독 초성도 초성 검색으로 확장
    pub initial_search: bool,
    /// 검색어로 시작하는 경우만 매칭 (`^`)
    pub starts_with: bool,
    /// 검색어로 끝나는 경우만 매칭 (`$`)
    pub ends_with: bool,
    /// 글자 사이 공백 무시 (`\s*`)
    pub ignore_space: bool,
    /// 글자 사이 임의 문자 허용 (`.*`). `ignore_space`보다 우선
    pub fuzzy: bool,
    /// 마지막 글자 대안 묶음을 `(?:...)`로 생성
    pub non_capture_group: bool,
}

impl RegExpOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_search(mut self, value: bool) -> Self {
        self.initial_search = value;
        self
    }

    pub fn with_starts_with(mut self, value: bool) -> Self {
        self.starts_with = value;
        self
    }

    pub fn with_ends_with(mut self, value: bool) -> Self {
        self.ends_with = value;
        self
    }

    pub fn with_ignore_space(mut self, value: bool) -> Self {
        self.ignore_space = value;
        self
    }

    pub fn with_fuzzy(mut self, value: bool) -> Self {
        self.fuzzy = value;
        self
    }

    pub fn with_non_capture_group(mut self, value: bool) -> Self {
        self.non_capture_group = value;
        self
    }

    /// JSON 문자열에서 옵션 로드
    pub fn from_json(json: &str) -> Result<Self, PatternError> {
        Ok(serde_json::from_str(json)?)
    }

    /// JSON 파일에서 옵션 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PatternError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON 파일로 옵션 저장
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PatternError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
