//! # libzhuyin
//!
//! Pinyin → Zhuyin/Bopomofo conversion built on hanzidict-core.

pub mod convert;
pub mod error;
pub mod phrase;
pub mod table;

// Re-export shared types from core
pub use hanzidict_core::{DisplayConfig, PinyinSource, Romanization};

pub use convert::{normalize_syllable, to_zhuyin, to_zhuyin_with};
pub use error::ConversionError;
pub use phrase::{phrase_to_zhuyin, phrase_to_zhuyin_lossy, render_pronunciation, split_syllables};
pub use table::{SyllableTable, PINYIN_TO_ZHUYIN};
