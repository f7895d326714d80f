pub mod config;
pub mod core;
pub mod error;
pub mod pattern;

pub use config::RegExpOptions;
pub use core::{decompose, Phonemes};
pub use error::PatternError;
pub use pattern::{get_pattern, get_regexp};
