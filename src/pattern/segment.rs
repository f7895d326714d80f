//! 정규식 조각 목록과 문자열 직렬화
//!
//! 사용자 입력 글자, 이미 완성된 정규식 조각, 글자 사이 연결자를
//! 구분해 모아 두었다가 마지막에 한 번만 문자열로 만든다.
//! 사용자 입력만 이스케이프되므로 연결자(`.*`, `\s*`)가
//! 이스케이프되거나 입력 글자와 섞일 일이 없다.

use crate::config::RegExpOptions;

/// 글자 사이 연결자
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glue {
    /// 임의 문자열 허용 (`.*`)
    Fuzzy,
    /// 공백 허용 (`\s*`)
    IgnoreSpace,
}

impl Glue {
    /// 옵션에 해당하는 연결자. `fuzzy`가 `ignore_space`보다 우선
    pub fn from_options(options: &RegExpOptions) -> Option<Glue> {
        if options.fuzzy {
            Some(Glue::Fuzzy)
        } else if options.ignore_space {
            Some(Glue::IgnoreSpace)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Glue::Fuzzy => ".*",
            Glue::IgnoreSpace => r"\s*",
        }
    }
}

/// 정규식 조각
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// 사용자 입력 글자 (직렬화 시 이스케이프)
    Literal(char),
    /// 그대로 쓰는 정규식 조각 (문자 클래스, 대안 묶음, 앵커)
    Pattern(String),
    Glue(Glue),
}

/// 조각 목록을 정규식 문자열로 직렬화
pub fn render(segments: &[Segment]) -> String {
    let mut out = String::new();
    let mut buf = [0u8; 4];
    for segment in segments {
        match segment {
            Segment::Literal(c) => out.push_str(&regex::escape(c.encode_utf8(&mut buf))),
            Segment::Pattern(p) => out.push_str(p),
            Segment::Glue(g) => out.push_str(g.as_str()),
        }
    }
    out
}
