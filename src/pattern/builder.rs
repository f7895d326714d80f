//! 검색어 → 정규식 생성
//!
//! 마지막 글자는 입력 중일 수 있으므로, 그 글자가 완성되었을 때 될 수 있는
//! 모든 음절을 포함하는 패턴으로 확장한다. 나머지 글자는 그대로 매칭한다.
//!
//! - `대한민ㄱ` → `대한민[ㄱ가-깋]`
//! - `대한민구` → `대한민[구-귛]`
//! - `대한민국` → `대한민(국|구[가-깋])`

use regex::Regex;

use super::segment::{render, Glue, Segment};
use crate::config::RegExpOptions;
use crate::core::phonemes::{decompose, Phonemes};
use crate::core::unicode::{
    choseong_base_code, choseong_index, is_choseong_jamo, jongseong_index, jungseong_index,
    jungseong_range, split_jongseong, JONGSEONG_COUNT, SYLLABLES_PER_CHOSEONG,
};
use crate::error::PatternError;

/// 음절 코드를 문자로 변환 (호출부는 항상 가-힣 범위의 코드만 넘김)
fn syllable(code: u32) -> char {
    char::from_u32(code).unwrap_or_else(|| unreachable!("잘못된 음절 코드: {:#X}", code))
}

/// 초성 검색용 문자 클래스
///
/// 초성이면 해당 초성으로 시작하는 모든 음절 범위를 반환한다.
/// (`ㄱ` → `[가-깋]`, `allow_only_initial`이면 `[ㄱ가-깋]`)
/// 초성이 아니면 글자를 그대로 반환한다.
pub fn initial_search_class(initial: char, allow_only_initial: bool) -> String {
    let Some(cho) = choseong_index(initial) else {
        return initial.to_string();
    };

    let from = choseong_base_code(cho);
    let to = from + SYLLABLES_PER_CHOSEONG - 1;

    let mut class = String::from("[");
    if allow_only_initial {
        class.push(initial);
    }
    class.push(syllable(from));
    class.push('-');
    class.push(syllable(to));
    class.push(']');
    class
}

/// 마지막 글자가 될 수 있는 대안 패턴 목록
///
/// `phonemes.initial_offset`이 있는 경우에만 호출된다.
fn tail_alternatives(last: char, phonemes: &Phonemes, cho: u32) -> Vec<String> {
    let base = choseong_base_code(cho);
    let medial_offset = phonemes.medial_offset.unwrap_or(0);
    let open = base + medial_offset * JONGSEONG_COUNT;

    // 받침이 있는 경우
    if let Some(finale) = phonemes.finale {
        let mut patterns = vec![last.to_string()];

        // 받침이 다음 글자의 초성일 수 있음 (국 → 구[가-깋])
        if is_choseong_jamo(finale) {
            let mut p = String::new();
            p.push(syllable(open));
            p.push_str(&initial_search_class(finale, false));
            patterns.push(p);
        }

        // 복합 받침은 앞 자음만 받침으로 두고 뒤 자음은 다음 글자의 초성으로
        if let Some((keep, next)) = split_jongseong(finale) {
            if let Some(jong) = jongseong_index(keep) {
                let mut p = String::new();
                p.push(syllable(open + jong));
                p.push_str(&initial_search_class(next, false));
                patterns.push(p);
            }
        }

        return patterns;
    }

    // 받침 없이 모음으로 끝난 경우: 어떤 받침이든 올 수 있음
    if let Some(medial) = phonemes.medial {
        let (from, to) = match jungseong_range(medial)
            .and_then(|(lo, hi)| Some((jungseong_index(lo)?, jungseong_index(hi)?)))
        {
            // 복합 모음으로 이어질 수 있으면 범위 확장 (구 → [구-귛])
            Some((lo, hi)) => (
                base + lo * JONGSEONG_COUNT,
                base + hi * JONGSEONG_COUNT + JONGSEONG_COUNT - 1,
            ),
            None => (open, open + JONGSEONG_COUNT - 1),
        };
        return vec![format!("[{}-{}]", syllable(from), syllable(to))];
    }

    // 초성만 입력된 경우
    vec![initial_search_class(phonemes.initial.unwrap_or(last), true)]
}

/// 대안이 둘 이상이면 묶음으로 감싼다
fn group(patterns: Vec<String>, non_capture: bool) -> String {
    if patterns.len() == 1 {
        return patterns.into_iter().collect();
    }
    let open = if non_capture { "(?:" } else { "(" };
    format!("{}{})", open, patterns.join("|"))
}

/// 검색어로부터 정규식 문자열 생성
///
/// 빈 검색어는 `PatternError::EmptySearch`.
pub fn get_pattern(search: &str, options: &RegExpOptions) -> Result<String, PatternError> {
    let mut front: Vec<char> = search.chars().collect();
    let last = *front.last().ok_or(PatternError::EmptySearch)?;

    let phonemes = decompose(last);
    log::trace!("마지막 글자 분해: {:?} → {:?}", last, phonemes);

    // 한글이 아닌 마지막 글자는 앞 글자들과 함께 그대로 매칭
    let tail = phonemes.initial_offset.map(|cho| {
        front.pop();
        group(
            tail_alternatives(last, &phonemes, cho),
            options.non_capture_group,
        )
    });

    let glue = Glue::from_options(options);
    let mut segments = Vec::with_capacity(front.len() * 2 + 4);

    if options.starts_with {
        segments.push(Segment::Pattern("^".to_string()));
    }

    for (i, &c) in front.iter().enumerate() {
        if i > 0 {
            segments.extend(glue.map(Segment::Glue));
        }
        if options.initial_search && is_choseong_jamo(c) {
            segments.push(Segment::Pattern(initial_search_class(c, true)));
        } else {
            segments.push(Segment::Literal(c));
        }
    }

    if let Some(tail) = tail {
        if !front.is_empty() {
            segments.extend(glue.map(Segment::Glue));
        }
        segments.push(Segment::Pattern(tail));
    }

    if options.ends_with {
        segments.push(Segment::Pattern("$".to_string()));
    }

    let pattern = render(&segments);
    log::debug!("검색어 {:?} → 패턴 {:?}", search, pattern);
    Ok(pattern)
}

/// 검색어로부터 컴파일된 정규식 생성
///
/// 생성된 패턴이 컴파일되지 않는 것은 테이블/생성 로직의 결함이므로 panic.
pub fn get_regexp(search: &str, options: &RegExpOptions) -> Result<Regex, PatternError> {
    let pattern = get_pattern(search, options)?;
    match Regex::new(&pattern) {
        Ok(re) => Ok(re),
        Err(e) => {
            log::error!("생성된 패턴 컴파일 실패: {:?}: {}", pattern, e);
            panic!("생성된 패턴 {:?} 컴파일 실패: {}", pattern, e);
        }
    }
}
