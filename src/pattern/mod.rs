//! 한글 검색어 → 정규식 패턴 생성
//!
//! 입력 중인(초성만 있거나 받침이 아직 없는) 마지막 글자까지 고려해,
//! 완성된 한글 텍스트에 매칭되는 정규식을 만듭니다.
//!
//! # 사용 예시
//!
//! ```
//! use korean_regexp::{get_regexp, RegExpOptions};
//!
//! let re = get_regexp("대한민ㄱ", &RegExpOptions::default()).unwrap();
//! assert_eq!(re.as_str(), "대한민[ㄱ가-깋]");
//! assert!(re.is_match("대한민국"));
//!
//! let options = RegExpOptions::new().with_initial_search(true);
//! let re = get_regexp("ㅎㄱ", &options).unwrap();
//! assert_eq!(re.as_str(), "[ㅎ하-힣][ㄱ가-깋]");
//! assert!(re.is_match("한글"));
//! ```

mod builder;
mod segment;

pub use builder::{get_pattern, get_regexp, initial_search_class};
