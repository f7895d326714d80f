//! 유니코드 한글 조합/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
pub const BASE: u32 = 0xAC00;

/// 마지막 완성형 한글 음절 코드포인트 (힣)
pub const LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 하나가 차지하는 음절 수 (중성 × 종성)
pub const SYLLABLES_PER_CHOSEONG: u32 = JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// 초성 (호환용 자모), 인덱스 = 초성 오프셋
#[rustfmt::skip]
pub const INITIALS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 (호환용 자모), 인덱스 = 중성 오프셋
#[rustfmt::skip]
pub const MEDIALS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 (호환용 자모), 인덱스 = 종성 오프셋. 0번은 종성 없음
#[rustfmt::skip]
pub const FINALES: [Option<char>; 28] = [
    None,
    Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'), Some('ㄷ'),
    Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'), Some('ㄿ'),
    Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'), Some('ㅇ'),
    Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = BASE + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(BASE..=LAST).contains(&code) {
        return None;
    }
    let offset = code - BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = ((offset - jongseong) / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = ((offset - jongseong) / JONGSEONG_COUNT - jungseong) / JUNGSEONG_COUNT;
    Some((choseong, jungseong, jongseong))
}

/// 초성 ㄱ~ㅎ 중 하나이면 초성 인덱스 반환
pub fn choseong_index(jamo: char) -> Option<u32> {
    INITIALS.iter().position(|&c| c == jamo).map(|i| i as u32)
}

/// 중성 자모의 인덱스 반환
pub fn jungseong_index(jamo: char) -> Option<u32> {
    MEDIALS.iter().position(|&c| c == jamo).map(|i| i as u32)
}

/// 종성 자모의 인덱스 반환 (종성 없음은 조회 대상 아님)
pub fn jongseong_index(jamo: char) -> Option<u32> {
    FINALES
        .iter()
        .position(|&c| c == Some(jamo))
        .map(|i| i as u32)
}

/// 문자가 단독 초성 자모인지 확인
pub fn is_choseong_jamo(c: char) -> bool {
    choseong_index(c).is_some()
}

/// 해당 초성으로 시작하는 첫 음절 코드 (중성 ㅏ, 종성 없음)
pub fn choseong_base_code(choseong: u32) -> u32 {
    BASE + choseong * SYLLABLES_PER_CHOSEONG
}

/// 복합 종성을 두 자음으로 분리
/// 반환: (받침으로 남는 자음, 다음 글자의 초성이 되는 자음)
pub fn split_jongseong(jong: char) -> Option<(char, char)> {
    match jong {
        'ㄲ' => Some(('ㄱ', 'ㄱ')),
        'ㄳ' => Some(('ㄱ', 'ㅅ')),
        'ㄵ' => Some(('ㄴ', 'ㅈ')),
        'ㄶ' => Some(('ㄴ', 'ㅎ')),
        'ㄺ' => Some(('ㄹ', 'ㄱ')),
        'ㄻ' => Some(('ㄹ', 'ㅁ')),
        'ㄼ' => Some(('ㄹ', 'ㅂ')),
        'ㄽ' => Some(('ㄹ', 'ㅅ')),
        'ㄾ' => Some(('ㄹ', 'ㅌ')),
        'ㄿ' => Some(('ㄹ', 'ㅍ')),
        'ㅀ' => Some(('ㄹ', 'ㅎ')),
        'ㅄ' => Some(('ㅂ', 'ㅅ')),
        'ㅆ' => Some(('ㅅ', 'ㅅ')),
        _ => None,
    }
}

/// 입력 중인 모음이 이어서 복합 모음이 될 수 있는 경우의 중성 범위
/// 반환: (첫 중성, 마지막 중성), 양 끝 포함
///
/// ㅗ 다음에 ㅏ/ㅐ/ㅣ를 치면 ㅘ/ㅙ/ㅚ가 되므로 ㅗ~ㅚ 전체를 포함한다.
pub fn jungseong_range(jung: char) -> Option<(char, char)> {
    match jung {
        'ㅗ' => Some(('ㅗ', 'ㅚ')),
        'ㅜ' => Some(('ㅜ', 'ㅟ')),
        'ㅡ' => Some(('ㅡ', 'ㅢ')),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(INITIALS.len() as u32, CHOSEONG_COUNT);
        assert_eq!(MEDIALS.len() as u32, JUNGSEONG_COUNT);
        assert_eq!(FINALES.len() as u32, JONGSEONG_COUNT);
        assert_eq!(BASE + CHOSEONG_COUNT * SYLLABLES_PER_CHOSEONG - 1, LAST);
    }

    #[test]
    fn test_compose_syllable() {
        // 가 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 없음(0)
        assert_eq!(compose_syllable(0, 0, 0), Some('가'));
        assert_eq!(compose_syllable(0, 0, 1), Some('각'));
        assert_eq!(compose_syllable(18, 0, 4), Some('한'));
        assert_eq!(compose_syllable(0, 18, 8), Some('글'));
        assert_eq!(compose_syllable(18, 20, 27), Some('힣'));
        assert_eq!(compose_syllable(19, 0, 0), None);
        assert_eq!(compose_syllable(0, 21, 0), None);
        assert_eq!(compose_syllable(0, 0, 28), None);
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('각'), Some((0, 0, 1)));
        assert_eq!(decompose_syllable('한'), Some((18, 0, 4)));
        assert_eq!(decompose_syllable('글'), Some((0, 18, 8)));
        assert_eq!(decompose_syllable('힣'), Some((18, 20, 27)));

        // 한글 음절이 아닌 문자
        assert_eq!(decompose_syllable('a'), None);
        assert_eq!(decompose_syllable('ㄱ'), None);
        assert_eq!(decompose_syllable('\u{D7A4}'), None);
    }

    #[test]
    fn test_compose_decompose_all() {
        for code in BASE..=LAST {
            let c = char::from_u32(code).unwrap();
            let (cho, jung, jong) = decompose_syllable(c).unwrap();
            assert_eq!(compose_syllable(cho, jung, jong), Some(c));
        }
    }

    #[test]
    fn test_jamo_index() {
        assert_eq!(choseong_index('ㄱ'), Some(0));
        assert_eq!(choseong_index('ㅎ'), Some(18));
        assert_eq!(choseong_index('ㄳ'), None);
        assert_eq!(choseong_index('ㅏ'), None);
        assert_eq!(jungseong_index('ㅟ'), Some(16));
        assert_eq!(jongseong_index('ㄺ'), Some(9));
        assert_eq!(jongseong_index('ㄸ'), None);
    }

    #[test]
    fn test_choseong_base_code() {
        assert_eq!(char::from_u32(choseong_base_code(0)), Some('가'));
        assert_eq!(char::from_u32(choseong_base_code(18)), Some('하'));
    }

    #[test]
    fn test_split_jongseong() {
        assert_eq!(split_jongseong('ㄲ'), Some(('ㄱ', 'ㄱ')));
        assert_eq!(split_jongseong('ㅆ'), Some(('ㅅ', 'ㅅ')));
        assert_eq!(split_jongseong('ㄺ'), Some(('ㄹ', 'ㄱ')));
        assert_eq!(split_jongseong('ㅄ'), Some(('ㅂ', 'ㅅ')));

        // 단일 종성은 분리 불가
        assert_eq!(split_jongseong('ㄱ'), None);
        assert_eq!(split_jongseong('ㄴ'), None);
    }

    #[test]
    fn test_split_jongseong_parts_are_valid() {
        for jong in FINALES.iter().flatten() {
            if let Some((keep, next)) = split_jongseong(*jong) {
                assert!(jongseong_index(keep).is_some(), "{}", jong);
                assert!(is_choseong_jamo(next), "{}", jong);
            }
        }
    }

    #[test]
    fn test_jungseong_range() {
        assert_eq!(jungseong_range('ㅗ'), Some(('ㅗ', 'ㅚ')));
        assert_eq!(jungseong_range('ㅜ'), Some(('ㅜ', 'ㅟ')));
        assert_eq!(jungseong_range('ㅡ'), Some(('ㅡ', 'ㅢ')));
        assert_eq!(jungseong_range('ㅏ'), None);
        assert_eq!(jungseong_range('ㅣ'), None);
    }
}
