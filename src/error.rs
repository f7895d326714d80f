//! 패턴 생성/옵션 로드 에러

/// 패턴 생성 및 옵션 로드 에러
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// 빈 검색어
    #[error("검색어가 비어 있습니다")]
    EmptySearch,
    /// 옵션 파일 읽기 실패
    #[error("옵션 파일 읽기 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 옵션 JSON 파싱 실패
    #[error("옵션 JSON 파싱 오류: {0}")]
    Parse(#[from] serde_json::Error),
}
