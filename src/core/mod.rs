//! 한글 자모 테이블과 음절 분해

pub mod phonemes;
pub mod unicode;

pub use phonemes::{decompose, Phonemes};
