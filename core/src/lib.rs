//! hanzidict-core
//!
//! Language data shared by the hanzidict crates: Han character
//! classification, lookup key classification, display preferences and the
//! dictionary record seam.
//!
//! Public API:
//! - `HanRangeSet`, `is_han` - Han/CJK code point membership
//! - `QueryKind`, `classify` - what kind of text a lookup key is
//! - `DisplayConfig` - romanization and hanzi form preferences
//! - `DictEntry`, `PinyinSource` - dictionary records as seen by the converters

pub mod han;
pub use han::{contains_han, is_han, is_han_char, is_han_text, HanRangeSet, HAN_RANGES};

pub mod query;
pub use query::{classify, is_zhuyin_char, QueryKind};

pub mod config;
pub use config::{DisplayConfig, HanziForm, Romanization, UnknownOption};

pub mod record;
pub use record::{DictEntry, PinyinSource};
