//! Lookup key classification.
//!
//! A dictionary lookup key is either hanzi, a zhuyin string, or a
//! romanization (pinyin or an input-method code). The dictionary layer uses
//! this to pick which record field to search.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::han::is_han_char;

/// Zhuyin tone marks (tone 1 is unmarked).
pub const ZHUYIN_TONE_MARKS: [char; 4] = ['ˊ', 'ˇ', 'ˋ', '˙'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryKind {
    /// Nothing but whitespace.
    Empty,
    /// Only Han characters.
    Hanzi,
    /// Only Bopomofo symbols and tone marks.
    Zhuyin,
    /// Latin romanization or input-method codes.
    Romanization,
    /// A mixture of the above, or characters none of them cover.
    Mixed,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueryKind::Empty => "empty",
            QueryKind::Hanzi => "hanzi",
            QueryKind::Zhuyin => "zhuyin",
            QueryKind::Romanization => "romanization",
            QueryKind::Mixed => "mixed",
        };
        f.write_str(name)
    }
}

/// Bopomofo (U+3100..U+312F), Bopomofo Extended (U+31A0..U+31BF) or a tone mark.
pub fn is_zhuyin_char(ch: char) -> bool {
    matches!(ch, '\u{3100}'..='\u{312F}' | '\u{31A0}'..='\u{31BF}') || ZHUYIN_TONE_MARKS.contains(&ch)
}

fn is_romanization_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '\'' | ':' | 'ü' | 'Ü')
}

/// Classify a lookup key.
///
/// # Example
/// ```
/// use hanzidict_core::query::{classify, QueryKind};
///
/// assert_eq!(classify("中国"), QueryKind::Hanzi);
/// assert_eq!(classify("zhong1 guo2"), QueryKind::Romanization);
/// assert_eq!(classify("ㄓㄨㄥ ㄍㄨㄛˊ"), QueryKind::Zhuyin);
/// ```
pub fn classify(key: &str) -> QueryKind {
    let (mut han, mut zhuyin, mut roman, mut other) = (0usize, 0usize, 0usize, 0usize);
    for ch in key.chars().filter(|c| !c.is_whitespace()) {
        if is_han_char(ch) {
            han += 1;
        } else if is_zhuyin_char(ch) {
            zhuyin += 1;
        } else if is_romanization_char(ch) {
            roman += 1;
        } else {
            other += 1;
        }
    }

    let total = han + zhuyin + roman + other;
    match total {
        0 => QueryKind::Empty,
        n if n == han => QueryKind::Hanzi,
        n if n == zhuyin => QueryKind::Zhuyin,
        n if n == roman => QueryKind::Romanization,
        _ => QueryKind::Mixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_basic_kinds() {
        assert_eq!(classify(""), QueryKind::Empty);
        assert_eq!(classify("  \t"), QueryKind::Empty);
        assert_eq!(classify("字典"), QueryKind::Hanzi);
        assert_eq!(classify("ni3hao3"), QueryKind::Romanization);
        assert_eq!(classify("xi'an"), QueryKind::Romanization);
        assert_eq!(classify("lu:4"), QueryKind::Romanization);
        assert_eq!(classify("nü3"), QueryKind::Romanization);
        assert_eq!(classify("ㄇㄚ˙"), QueryKind::Zhuyin);
    }

    #[test]
    fn classify_mixed() {
        assert_eq!(classify("中a"), QueryKind::Mixed);
        assert_eq!(classify("ㄇa"), QueryKind::Mixed);
        assert_eq!(classify("中。"), QueryKind::Mixed);
    }

    #[test]
    fn tone_marks_count_as_zhuyin() {
        for mark in ZHUYIN_TONE_MARKS {
            assert!(is_zhuyin_char(mark));
        }
        assert!(!is_zhuyin_char('a'));
    }
}
