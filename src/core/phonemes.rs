//! 글자 하나를 초성/중성/종성으로 분해

use super::unicode::{choseong_index, decompose_syllable, FINALES, INITIALS, MEDIALS};

/// 글자 하나의 분해 결과
///
/// 오프셋은 `INITIALS`/`MEDIALS`/`FINALES` 테이블의 인덱스이며,
/// 찾지 못한 경우 `None`이다. 종성 없는 음절은 `finale == None`,
/// `finale_offset == Some(0)`이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Phonemes {
    /// 초성
    pub initial: Option<char>,
    /// 중성
    pub medial: Option<char>,
    /// 종성
    pub finale: Option<char>,
    pub initial_offset: Option<u32>,
    pub medial_offset: Option<u32>,
    pub finale_offset: Option<u32>,
}

impl Phonemes {
    /// 초성, 완성형 음절 어느 쪽도 아닌 문자인지 확인
    pub fn is_empty(&self) -> bool {
        self.initial_offset.is_none()
    }
}

/// 글자 하나를 분해
///
/// - 단독 초성 자모(ㄱ, ㄲ, ..., ㅎ): 초성만 채움
/// - 완성형 한글(가-힣): 초성/중성/종성 모두 채움
/// - 그 외 문자: 모두 비어 있음
pub fn decompose(c: char) -> Phonemes {
    if let Some(cho) = choseong_index(c) {
        return Phonemes {
            initial: Some(c),
            initial_offset: Some(cho),
            ..Phonemes::default()
        };
    }

    match decompose_syllable(c) {
        Some((cho, jung, jong)) => Phonemes {
            initial: Some(INITIALS[cho as usize]),
            medial: Some(MEDIALS[jung as usize]),
            finale: FINALES[jong as usize],
            initial_offset: Some(cho),
            medial_offset: Some(jung),
            finale_offset: Some(jong),
        },
        None => Phonemes::default(),
    }
}
